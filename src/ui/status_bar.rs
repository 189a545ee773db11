//! Status bar UI rendering
//!
//! Handles the bottom status bar: process memory, status line, and the load
//! progress indicator.

use eframe::egui;
use egui::RichText;

use crate::app::AppState;
use crate::utils::{format_memory_mb, get_current_memory_mb};

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());

        ui.label(RichText::new("|").strong());
        ui.label(state.status.line());

        // Progress bar only while a load is in flight
        if let Some(percent) = state.status.progress() {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add(
                    egui::ProgressBar::new(f32::from(percent) / 100.0)
                        .desired_width(160.0)
                        .show_percentage(),
                );
            });
        }
    });
}
