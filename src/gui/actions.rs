// src/gui/actions.rs
use chrono::Local;

use crate::{config::options::ExportFormat, gui::app::App};

/// Export the full (unfiltered) record set. Closes the download menu.
pub fn export(app: &mut App, format: ExportFormat) {
    // normalize export dir first (mutates app) before the export borrows
    app.state.commit_out_dir();

    let n = app.vm.certificates().len();
    log::info!(
        "Export: Begin format={:?}, rows={}, search={:?}",
        format,
        n,
        app.vm.search_term()
    );

    let generated_at = Local::now().naive_local();
    app.status = match app.vm.export(&app.state.options.export, format, generated_at) {
        Ok(path) => format!("Exported {} certificate(s) → {}", n, path.display()),
        Err(e) => {
            log::error!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };
}
