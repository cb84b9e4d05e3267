// src/gui/components/cards.rs
//
// Card grid (first variant): one card per filtered certificate.

use eframe::egui::{self, Align, Layout, RichText};
use crate::{config::consts::CARD_WIDTH, dates::format_date, gui::app::App, model::Certificate};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let certs = app.vm.filtered();

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            let cols = ((ui.available_width() / CARD_WIDTH).floor() as usize).max(1);

            egui::Grid::new("certificate_cards")
                .num_columns(cols)
                .spacing([12.0, 12.0])
                .show(ui, |ui| {
                    for (i, cert) in certs.iter().enumerate() {
                        card(ui, cert);
                        if (i + 1) % cols == 0 {
                            ui.end_row();
                        }
                    }
                });
        });
}

fn card(ui: &mut egui::Ui, cert: &Certificate) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(CARD_WIDTH - 32.0);

        ui.horizontal(|ui| {
            ui.small(format!("ID: {}", cert.id));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.small(format!("Created: {}", format_date(&cert.created_at)));
            });
        });

        ui.add_space(4.0);
        ui.label(RichText::new(cert.full_name()).size(18.0).strong());
        ui.add_space(2.0);
        ui.label(format!("From: {}", format_date(&cert.from_date)));
        ui.label(format!("To: {}", format_date(&cert.tom_date)));
    });
}
