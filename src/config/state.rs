// src/config/state.rs
use super::consts::{WINDOW_H, WINDOW_W};
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,

    /// Export dir text field (mapped into ExportOptions on export)
    pub out_dir_text: String,
    pub out_dir_dirty: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: WINDOW_W,
            window_h: WINDOW_H,
            out_dir_text: s!(),
            out_dir_dirty: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppOptions::default())
    }
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        let out_dir_text = options.export.out_dir().to_string_lossy().into_owned();
        Self {
            options,
            gui: GuiState { out_dir_text, ..GuiState::default() },
        }
    }

    /// Apply a pending edit of the export dir field.
    pub fn commit_out_dir(&mut self) {
        if self.gui.out_dir_dirty {
            self.options.export.set_out_dir(&self.gui.out_dir_text);
            log::info!("UI: Export dir set → {}", self.options.export.out_dir().display());
            self.gui.out_dir_dirty = false;
        }
    }
}
