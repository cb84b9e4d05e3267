// src/gui/components/export_bar.rs
//
// Export dir field plus the download control:
// - Table:     one "Download CSV" button
// - TableMenu: a "Download" toggle revealing PDF / CSV choices

use eframe::egui;
use crate::{
    config::options::{ExportFormat, Quoting, Variant},
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let variant = app.variant();

    ui.horizontal(|ui| {
        ui.label("Export to:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.out_dir_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.state.gui.out_dir_dirty = true;
        }

        let quoting = &mut app.state.options.export.quoting;
        let mut quote = *quoting == Quoting::Needed;
        if ui.checkbox(&mut quote, "Quote CSV fields").changed() {
            *quoting = if quote { Quoting::Needed } else { Quoting::Never };
            log::info!("UI: CSV quoting → {:?}", quoting);
        }

        match variant {
            Variant::Table => {
                if ui.button("Download CSV").clicked() {
                    actions::export(app, ExportFormat::Csv);
                }
            }
            Variant::TableMenu => {
                let label = if app.vm.menu_open() { "Download ⏶" } else { "Download ⏷" };
                if ui.button(label).clicked() {
                    app.vm.toggle_menu();
                }
            }
            Variant::Cards => {}
        }
    });

    if variant == Variant::TableMenu && app.vm.menu_open() {
        ui.horizontal(|ui| {
            if ui.button("Download PDF").clicked() {
                actions::export(app, ExportFormat::Pdf);
            }
            if ui.button("Download CSV").clicked() {
                actions::export(app, ExportFormat::Csv);
            }
        });
    }
}
