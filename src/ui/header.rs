//! Header panel UI rendering
//!
//! Handles the top bar with file controls, zoom buttons, and the info-panel
//! toggle.

use std::path::PathBuf;

use eframe::egui;
use egui::Color32;

use crate::app::AppState;
use crate::utils::file_types;

/// Zoom step applied by the header buttons.
const ZOOM_STEP: f32 = 1.15;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a file in the open dialog
    OpenFileRequested(PathBuf),
}

/// Renders the application header with file controls and zoom controls
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open Image").clicked() {
            let mut dialog =
                rfd::FileDialog::new().add_filter("Images", file_types::SUPPORTED_EXTENSIONS);

            if let Some(dir) = &state.prefs.last_open_dir {
                dialog = dialog.set_directory(dir);
            } else if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        ui.separator();

        if state.image.has_image() {
            // Zoom controls
            if ui.button("🔍+").clicked() {
                state.view.zoom_by(ZOOM_STEP);
            }

            if ui.button("🔍-").clicked() {
                state.view.zoom_by(1.0 / ZOOM_STEP);
            }

            if ui.button("⛶ Fit").clicked() {
                state.view.reset();
            }

            ui.label(format!("Zoom: {:.0}%", state.view.zoom() * 100.0));
        }

        // Push the info-panel toggle to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.checkbox(&mut state.prefs.show_info_panel, "ℹ Info");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}
