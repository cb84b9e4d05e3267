// src/gui/app.rs
use std::{error::Error, sync::Arc};

use eframe::egui;

use crate::{
    config::{consts::{EMPTY_STATE, WINDOW_TITLE}, options::Variant, state::AppState},
    loader::{self, PendingLoad},
    net::{CertificateSource, HttpSource},
    view_model::CertificateViewModel,
};

use super::components;

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            let source: Arc<dyn CertificateSource> =
                Arc::new(HttpSource::new(state.options.source.url.clone()));
            Ok(Box::new(App::new(state, source, cc.egui_ctx.clone())))
        }),
    )?;
    Ok(())
}

pub struct App {
    // options + GUI fields (UI thread only)
    pub state: AppState,

    // records, search, load phase, download menu
    pub vm: CertificateViewModel,

    // search text field; mirrored into vm on edit
    pub search_text: String,

    // status line
    pub status: String,

    // the one load; dropped once settled (or with the App)
    pending: Option<PendingLoad>,
}

impl App {
    /// Create the view and start the initial load.
    pub fn new(state: AppState, source: Arc<dyn CertificateSource>, ctx: egui::Context) -> Self {
        log::info!(
            "Init: variant={:?}, url={}",
            state.options.view.variant,
            state.options.source.url
        );

        let pending = loader::spawn_load(source, move || ctx.request_repaint());

        Self {
            state,
            vm: CertificateViewModel::new(),
            search_text: s!(),
            status: s!("Loading certificates…"),
            pending: Some(pending),
        }
    }

    #[inline]
    pub fn variant(&self) -> Variant { self.state.options.view.variant }

    /// Apply the load result once it arrives.
    fn poll_load(&mut self) {
        let Some(result) = self.pending.as_ref().and_then(|p| p.poll()) else { return };
        self.pending = None;

        self.vm.apply_load(result);
        self.status = if self.vm.diagnostics().is_empty() {
            format!("Loaded {} certificate(s)", self.vm.certificates().len())
        } else {
            s!("Ready")
        };
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            components::header::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            components::status_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.variant() != Variant::Cards {
                components::export_bar::draw(ui, self);
                ui.separator();
            }

            if self.vm.is_loading() {
                ui.vertical_centered(|ui| {
                    ui.add_space(48.0);
                    ui.add(egui::Spinner::new().size(48.0));
                });
                return;
            }

            if self.vm.shows_empty_state() {
                ui.vertical_centered(|ui| {
                    ui.add_space(48.0);
                    ui.label(EMPTY_STATE);
                });
                return;
            }

            match self.variant() {
                Variant::Cards => components::cards::draw(ui, self),
                Variant::Table | Variant::TableMenu => components::data_table::draw(ui, self),
            }
        });
    }
}
