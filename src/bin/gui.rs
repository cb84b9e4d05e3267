// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use cert_view::{config::state::AppState, gui, logging};
use eframe::egui::{IconData, ViewportBuilder};

fn app_icon() -> Option<IconData> {
    let rgba = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/cert_view.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    logging::init_file();
    let state = AppState::default();

    let mut viewport = ViewportBuilder::default()
        .with_inner_size([state.gui.window_w, state.gui.window_h]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(options, state) {
        log::error!("GUI failed: {}", e);
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
