//! Info panel UI rendering
//!
//! Populates the side panel with file metadata and image details for the
//! currently displayed image.

use eframe::egui;

use crate::app::AppState;
use crate::utils::{format_file_size, format_modified};

/// Renders the metadata groups for the current image.
pub fn render_info_panel(ui: &mut egui::Ui, state: &AppState) {
    let Some(meta) = state.image.metadata() else {
        ui.label("No image loaded");
        return;
    };

    egui::CollapsingHeader::new("File Information")
        .default_open(true)
        .show(ui, |ui| {
            ui.label(format!("File Name: {}", meta.file_name));
            ui.label(format!("Path: {}", meta.path.display()));
            ui.label(format!("Size: {}", format_file_size(meta.size_bytes)));
            if let Some(modified) = meta.modified {
                ui.label(format!("Modified: {}", format_modified(modified)));
            }
        });

    if let Some(bitmap) = state.image.bitmap() {
        egui::CollapsingHeader::new("Image Details")
            .default_open(true)
            .show(ui, |ui| {
                ui.label(format!(
                    "Dimensions: {} × {} px",
                    bitmap.width(),
                    bitmap.height()
                ));
            });
    }
}
