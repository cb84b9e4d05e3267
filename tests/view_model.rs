// tests/view_model.rs
//
// Load lifecycle, search state and the download menu, without UI.
//
use cert_view::net::CertificateSource;
use cert_view::view_model::LoadPhase;
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

struct Broken;
impl CertificateSource for Broken {
    fn fetch(&self) -> Result<Vec<Certificate>, LoadError> {
        Err(LoadError::Interrupted)
    }
}

struct Garbled;
impl CertificateSource for Garbled {
    fn fetch(&self) -> Result<Vec<Certificate>, LoadError> {
        cert_view::net::decode_certificates(r#"{"not":"an array"}"#)
    }
}

#[test]
fn starts_loading_and_empty() {
    let vm = CertificateViewModel::new();
    assert_eq!(vm.phase(), LoadPhase::Loading);
    assert!(vm.is_loading());
    assert!(vm.certificates().is_empty());
    // spinner, not the empty-state message, while loading
    assert!(!vm.shows_empty_state());
    assert!(!vm.menu_open());
}

#[test]
fn successful_load_replaces_records() {
    let mut vm = CertificateViewModel::new();
    vm.load_from(&vec![ann()]);
    assert_eq!(vm.phase(), LoadPhase::Loaded);
    assert_eq!(vm.certificates(), &[ann()]);
    assert!(vm.diagnostics().is_empty());
}

#[test]
fn failed_load_clears_flag_and_logs_once() {
    let mut vm = CertificateViewModel::new();
    vm.load_from(&Broken);
    assert!(!vm.is_loading());
    assert!(vm.certificates().is_empty());
    assert_eq!(vm.diagnostics().len(), 1);
    assert!(vm.shows_empty_state());
}

#[test]
fn malformed_body_is_a_load_failure() {
    let mut vm = CertificateViewModel::new();
    vm.load_from(&Garbled);
    assert!(!vm.is_loading());
    assert!(vm.certificates().is_empty());
    assert_eq!(vm.diagnostics().len(), 1);
    assert!(vm.diagnostics()[0].starts_with("Error fetching data:"));
}

#[test]
fn load_settles_only_once() {
    let mut vm = CertificateViewModel::new();
    vm.apply_load(Ok(vec![ann()]));
    vm.apply_load(Ok(Vec::new()));
    vm.apply_load(Err(LoadError::Interrupted));
    assert_eq!(vm.certificates().len(), 1);
    assert!(vm.diagnostics().is_empty());
}

#[test]
fn ann_lee_search_scenario() {
    let mut vm = CertificateViewModel::new();
    vm.apply_load(Ok(vec![ann()]));

    let shown = vm.filtered();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].full_name(), "Ann Lee");
    assert_eq!(shown[0].to_row()[3..5], ["Jan 5, 2024", "Jun 1, 2024"]);

    vm.set_search_term("lee");
    assert_eq!(vm.filtered().len(), 1);
    assert!(!vm.shows_empty_state());

    vm.set_search_term("zzz");
    assert!(vm.filtered().is_empty());
    assert!(vm.shows_empty_state());
    // full set untouched
    assert_eq!(vm.certificates().len(), 1);
    assert_eq!(vm.search_term(), "zzz");
}

#[test]
fn menu_toggles_and_closes() {
    let mut vm = CertificateViewModel::new();
    vm.toggle_menu();
    assert!(vm.menu_open());
    vm.toggle_menu();
    assert!(!vm.menu_open());
    vm.toggle_menu();
    vm.close_menu();
    assert!(!vm.menu_open());
}
