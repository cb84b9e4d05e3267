// tests/loader.rs
use std::sync::{
    atomic::{AtomicBool, Ordering},
    mpsc, Arc, Mutex,
};
use std::time::Duration;

use cert_view::loader::spawn_load;
use cert_view::net::CertificateSource;
use cert_view::{Certificate, CertificateViewModel, LoadError};

fn ann() -> Certificate {
    Certificate {
        id: 1,
        first_name: "Ann".into(),
        last_name: "Lee".into(),
        from_date: "2024-01-05".into(),
        tom_date: "2024-06-01".into(),
        created_at: "2024-01-01".into(),
    }
}

/// Blocks inside fetch until the test releases it.
struct Gated {
    gate: Mutex<mpsc::Receiver<()>>,
}

impl CertificateSource for Gated {
    fn fetch(&self) -> Result<Vec<Certificate>, LoadError> {
        let _ = self.gate.lock().unwrap().recv();
        Ok(vec![ann()])
    }
}

struct Failing;
impl CertificateSource for Failing {
    fn fetch(&self) -> Result<Vec<Certificate>, LoadError> {
        Err(LoadError::Interrupted)
    }
}

#[test]
fn poll_is_empty_until_the_fetch_settles() {
    let (release, gate) = mpsc::channel();
    let source = Arc::new(Gated { gate: Mutex::new(gate) });
    let (done_tx, done_rx) = mpsc::channel();

    let pending = spawn_load(source, move || {
        let _ = done_tx.send(());
    });
    assert!(pending.poll().is_none());

    release.send(()).unwrap();
    done_rx.recv_timeout(Duration::from_secs(5)).unwrap();

    let result = pending.poll().expect("settled");
    let mut vm = CertificateViewModel::new();
    vm.apply_load(result);
    assert_eq!(vm.certificates(), &[ann()]);
}

#[test]
fn wait_returns_failures() {
    let pending = spawn_load(Arc::new(Failing), || {});
    assert!(matches!(pending.wait(), Err(LoadError::Interrupted)));
}

#[test]
fn dropped_view_discards_the_result() {
    let (release, gate) = mpsc::channel();
    let source = Arc::new(Gated { gate: Mutex::new(gate) });
    let notified = Arc::new(AtomicBool::new(false));
    let flag = notified.clone();

    let pending = spawn_load(source.clone(), move || flag.store(true, Ordering::SeqCst));
    drop(pending);
    release.send(()).unwrap();

    // The worker holds the other clone until it finishes.
    for _ in 0..500 {
        if Arc::strong_count(&source) == 1 {
            break;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    assert_eq!(Arc::strong_count(&source), 1);
    assert!(!notified.load(Ordering::SeqCst));
}
