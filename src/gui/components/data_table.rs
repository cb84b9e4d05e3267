// src/gui/components/data_table.rs
//
// Draws the live table of filtered certificates (table variants).
// Purely a view; the same six columns as the exports.

use eframe::egui::{self, Align, Layout};
use egui_extras::{Column, TableBuilder};
use crate::{config::consts::EXPORT_HEADERS, gui::app::App, model::Certificate};

const ROW_H: f32 = 20.0;
const HEADER_H: f32 = 24.0;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let rows: Vec<Vec<String>> = app.vm.filtered().into_iter().map(Certificate::to_row).collect();

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::auto().at_least(48.0))
        .columns(Column::auto().at_least(120.0).clip(true), 4)
        .column(Column::remainder())
        .header(HEADER_H, |mut header| {
            for h in EXPORT_HEADERS {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_H, rows.len(), |mut row| {
                let cells = &rows[row.index()];
                for cell in cells {
                    row.col(|ui| {
                        ui.label(cell.as_str());
                    });
                }
            });
        });
}
