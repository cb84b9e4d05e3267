// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod csv;
pub mod dates;
pub mod error;
pub mod file;
pub mod gui;
pub mod loader;
pub mod logging;
pub mod model;
pub mod net;
pub mod pdf;
pub mod view_model;

pub use error::{ExportError, LoadError};
pub use model::Certificate;
pub use view_model::CertificateViewModel;
