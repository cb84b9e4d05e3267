// src/logging.rs
//
// `log` facade setup. The GUI has no console on Windows, so it logs to a file
// under the local store dir; the CLI logs to stderr. Both share one line format:
//   [HH:MM:SS.mmm][LEVEL] message
// where the timestamp is time elapsed since the logger was installed.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Instant;

use env_logger::{Builder, Env, Target};

use crate::config::consts::{LOG_FILE, STORE_DIR};

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

fn builder() -> Builder {
    start();
    let mut b = Builder::from_env(Env::default().default_filter_or("info"));
    b.format(|buf, record| {
        let elapsed = fmt_elapsed(start().elapsed().as_millis());
        writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
    });
    b
}

pub fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

/// Install the file logger (GUI). Falls back to stderr if the log file
/// cannot be opened. Safe to call more than once.
pub fn init_file() {
    let mut b = builder();
    let path = log_path();
    let opened = fs::create_dir_all(STORE_DIR)
        .and_then(|_| OpenOptions::new().create(true).append(true).open(&path));
    match opened {
        Ok(file) => { b.target(Target::Pipe(Box::new(file))); }
        Err(e) => {
            b.target(Target::Stderr);
            eprintln!("Logging to stderr; cannot open {}: {e}", path.display());
        }
    }
    let _ = b.try_init();
}

/// Install the stderr logger (CLI). Safe to call more than once.
pub fn init_stderr() {
    let _ = builder().target(Target::Stderr).try_init();
}

#[cfg(test)]
mod tests {
    use super::fmt_elapsed;

    #[test]
    fn elapsed_is_zero_padded() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_004), "01:02:03.004");
    }
}
