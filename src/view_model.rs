// src/view_model.rs
//
// Certificate View-Model: the record list, the search term, the load phase
// and the download menu. Owned by the UI thread; everything else (render,
// CLI listing, export) reads from it.
//
// - Load phase goes Loading → Loaded exactly once.
// - The record set is replaced wholesale by the load, never patched.
// - Search only affects `filtered()`. Exports always take the full set.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::config::options::{ExportFormat, ExportOptions, Quoting};
use crate::error::{ExportError, LoadError};
use crate::model::Certificate;
use crate::net::CertificateSource;
use crate::{csv, file, pdf};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Loaded,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DownloadMenu {
    #[default]
    Closed,
    Open,
}

/// Records whose "First Last" contains `term`, case-insensitively,
/// in their original order. An empty term keeps everything.
pub fn filter_certificates<'a>(certs: &'a [Certificate], term: &str) -> Vec<&'a Certificate> {
    let needle = term.to_lowercase();
    certs.iter().filter(|c| c.matches_lower(&needle)).collect()
}

#[derive(Debug)]
pub struct CertificateViewModel {
    certificates: Vec<Certificate>,
    search_term: String,
    phase: LoadPhase,
    menu: DownloadMenu,
    diagnostics: Vec<String>,
}

impl Default for CertificateViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CertificateViewModel {
    pub fn new() -> Self {
        Self {
            certificates: Vec::new(),
            search_term: s!(),
            phase: LoadPhase::Loading,
            menu: DownloadMenu::Closed,
            diagnostics: Vec::new(),
        }
    }

    /* ---------- load ---------- */

    /// Settle the load. Success replaces the record set; failure is logged
    /// and leaves it empty. Only the first result counts.
    pub fn apply_load(&mut self, result: Result<Vec<Certificate>, LoadError>) {
        if self.phase == LoadPhase::Loaded {
            log::debug!("Load: Ignoring late result; already loaded");
            return;
        }

        match result {
            Ok(certs) => {
                log::info!("Load: OK {} certificate(s)", certs.len());
                self.certificates = certs;
            }
            Err(e) => {
                let line = format!("Error fetching data: {e}");
                log::error!("Load: {line}");
                self.diagnostics.push(line);
            }
        }
        self.phase = LoadPhase::Loaded;
    }

    /// Fetch synchronously from `source` and settle the load.
    pub fn load_from(&mut self, source: &dyn CertificateSource) {
        self.apply_load(source.fetch());
    }

    #[inline]
    pub fn phase(&self) -> LoadPhase { self.phase }

    #[inline]
    pub fn is_loading(&self) -> bool { self.phase == LoadPhase::Loading }

    /// Full, unfiltered record set.
    #[inline]
    pub fn certificates(&self) -> &[Certificate] { &self.certificates }

    /// Failure lines recorded by the load.
    #[inline]
    pub fn diagnostics(&self) -> &[String] { &self.diagnostics }

    /* ---------- search ---------- */

    #[inline]
    pub fn search_term(&self) -> &str { &self.search_term }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        log::trace!("Search: term → {:?}", self.search_term);
    }

    pub fn filtered(&self) -> Vec<&Certificate> {
        filter_certificates(&self.certificates, &self.search_term)
    }

    /// True when the "no certificates found" message should show.
    pub fn shows_empty_state(&self) -> bool {
        !self.is_loading() && self.filtered().is_empty()
    }

    /* ---------- download menu ---------- */

    #[inline]
    pub fn menu_open(&self) -> bool { self.menu == DownloadMenu::Open }

    pub fn toggle_menu(&mut self) {
        self.menu = match self.menu {
            DownloadMenu::Closed => DownloadMenu::Open,
            DownloadMenu::Open => DownloadMenu::Closed,
        };
    }

    pub fn close_menu(&mut self) {
        self.menu = DownloadMenu::Closed;
    }

    /* ---------- export ---------- */

    /// CSV text of the full record set.
    pub fn csv_text(&self, quoting: Quoting) -> String {
        csv::to_export_string(&self.certificates, quoting)
    }

    /// PDF bytes of the full record set.
    pub fn pdf_bytes(&self, generated_at: NaiveDateTime) -> Result<Vec<u8>, ExportError> {
        pdf::render(&self.certificates, generated_at)
    }

    /// Write `student_certificates.csv` into `dir`. Closes the menu.
    pub fn export_csv(&mut self, dir: &Path, quoting: Quoting) -> Result<PathBuf, ExportError> {
        self.close_menu();
        let text = self.csv_text(quoting);
        file::write_export(dir, ExportFormat::Csv.file_name(), text.as_bytes())
    }

    /// Write `student_certificates.pdf` into `dir`. Closes the menu.
    pub fn export_pdf(&mut self, dir: &Path, generated_at: NaiveDateTime) -> Result<PathBuf, ExportError> {
        self.close_menu();
        let bytes = self.pdf_bytes(generated_at)?;
        file::write_export(dir, ExportFormat::Pdf.file_name(), &bytes)
    }

    /// Export in `format` according to `export` options. Closes the menu.
    pub fn export(
        &mut self,
        export: &ExportOptions,
        format: ExportFormat,
        generated_at: NaiveDateTime,
    ) -> Result<PathBuf, ExportError> {
        self.close_menu();
        file::export_certificates(export, format, &self.certificates, generated_at)
    }
}
