//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, viewer, info, status) and manages
//! their layout and interaction coordination.

use eframe::egui;

use crate::app::AppState;
use crate::ui::{header, info_panel, status_bar, viewer_panel};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open an image file
    OpenFileRequested(std::path::PathBuf),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => {
                        PanelInteraction::OpenFileRequested(path)
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        // Right panel: image information
        if state.prefs.show_info_panel {
            let info_frame = egui::Frame::default()
                .inner_margin(egui::Margin::same(4))
                .fill(ctx.style().visuals.panel_fill);

            egui::SidePanel::right("info_panel")
                .default_width(280.0)
                .resizable(true)
                .frame(info_frame)
                .show(ctx, |ui| {
                    ui.heading("Image Information");
                    ui.separator();
                    info_panel::render_info_panel(ui, state);
                });
        }

        // Central panel: image canvas
        let viewer_frame = egui::Frame::default().fill(egui::Color32::from_gray(24));

        egui::CentralPanel::default()
            .frame(viewer_frame)
            .show(ctx, |ui| {
                viewer_panel::render_viewer_panel(ui, state);
            });

        interaction
    }
}
