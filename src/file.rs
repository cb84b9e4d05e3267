// src/file.rs
//
// Export destinations. Files land in the export dir under fixed names,
// overwriting any previous export.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;

use crate::config::options::{ExportFormat, ExportOptions};
use crate::error::ExportError;
use crate::model::Certificate;
use crate::{csv, pdf};

/// Write `contents` to `<dir>/<file_name>`, creating `dir` when missing.
/// Overwrites an existing export. Returns the final path written to.
pub fn write_export(dir: &Path, file_name: &str, contents: &[u8]) -> Result<PathBuf, ExportError> {
    ensure_directory(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, contents)?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Render `certs` in `format` and write it into the configured export dir.
pub fn export_certificates(
    export: &ExportOptions,
    format: ExportFormat,
    certs: &[Certificate],
    generated_at: NaiveDateTime,
) -> Result<PathBuf, ExportError> {
    let bytes = match format {
        ExportFormat::Csv => csv::to_export_string(certs, export.quoting).into_bytes(),
        ExportFormat::Pdf => pdf::render(certs, generated_at)?,
    };
    let path = write_export(export.out_dir(), format.file_name(), &bytes)?;
    log::info!("Export: {} row(s) → {}", certs.len(), path.display());
    Ok(path)
}
