// src/error.rs
use std::path::PathBuf;

/// Why the certificate list could not be loaded.
///
/// The view treats every variant the same way ("data load failed"); the split
/// only exists so the log line says what went wrong.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to request certificates: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Certificates endpoint answered {0}")]
    Status(reqwest::StatusCode),
    #[error("Failed to decode certificates: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Load worker exited without a result")]
    Interrupted,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF rendering failed: {0}")]
    Pdf(#[from] printpdf::Error),
    #[error("Path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}
