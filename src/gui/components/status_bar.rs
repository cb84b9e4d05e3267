// src/gui/components/status_bar.rs
use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.horizontal(|ui| {
        ui.label(&app.status);
        if !app.vm.is_loading() {
            ui.separator();
            ui.label(format!(
                "Showing {} of {}",
                app.vm.filtered().len(),
                app.vm.certificates().len()
            ));
        }
    });
}
