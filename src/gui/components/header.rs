// src/gui/components/header.rs
//
// Title, search field and the variant switch.

use eframe::egui::{self, RichText};
use crate::{
    config::{consts::{SEARCH_HINT, WINDOW_TITLE}, options::Variant},
    gui::app::App,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(WINDOW_TITLE).size(26.0).strong());
        ui.add_space(6.0);

        let search = ui.add(
            egui::TextEdit::singleline(&mut app.search_text)
                .hint_text(SEARCH_HINT)
                .desired_width(480.0),
        );
        if search.changed() {
            app.vm.set_search_term(app.search_text.as_str());
        }
    });

    ui.horizontal(|ui| {
        ui.label("View:");
        let before = app.state.options.view.variant;
        for v in Variant::ALL {
            ui.selectable_value(&mut app.state.options.view.variant, v, v.label());
        }
        if app.state.options.view.variant != before {
            // menu state belongs to the Download toggle; don't carry it across views
            app.vm.close_menu();
            log::info!("UI: Variant → {:?}", app.state.options.view.variant);
        }
    });
    ui.add_space(4.0);
}
