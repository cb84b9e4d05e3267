// src/config/options.rs
use std::path::{Path, PathBuf};
use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub export: ExportOptions,
    pub view: ViewOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub url: String,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self { url: s!(CERTIFICATES_URL) }
    }
}

/// Which iteration of the certificate page to draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// Card grid, no download control.
    Cards,
    /// Table with a single CSV download button.
    Table,
    /// Table with a Download toggle offering PDF or CSV.
    #[default]
    TableMenu,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Cards, Variant::Table, Variant::TableMenu];

    pub fn label(self) -> &'static str {
        match self {
            Variant::Cards => "Cards",
            Variant::Table => "Table",
            Variant::TableMenu => "Table + menu",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewOptions {
    pub variant: Variant,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Pdf,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Pdf => "pdf" }
    }
    pub fn file_name(&self) -> &'static str {
        match self { ExportFormat::Csv => CSV_FILE, ExportFormat::Pdf => PDF_FILE }
    }
}

/// CSV field quoting policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Quoting {
    /// Fields are joined as-is, even when they contain the delimiter.
    #[default]
    Never,
    /// Quote fields containing the delimiter, quotes or line breaks.
    Needed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_dir: PathBuf,
    pub quoting: Quoting,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: Self::default_dir(),
            quoting: Quoting::Never,
        }
    }
}

impl ExportOptions {
    /// The user's download directory if the platform has one, else `out/`.
    pub fn default_dir() -> PathBuf {
        dirs::download_dir().unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse GUI/CLI text into the export dir. Blank text restores the default.
    pub fn set_out_dir(&mut self, text: &str) {
        let s = text.trim();
        self.out_dir = if s.is_empty() { Self::default_dir() } else { PathBuf::from(s) };
    }
}
