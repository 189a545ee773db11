//! Central image canvas.
//!
//! Paints the accepted texture scaled by fit-to-panel times the current zoom
//! factor, offset by the pan vector. Dragging pans; Ctrl+wheel or pinch
//! zooms, anchored at the pointer.

use eframe::egui;
use egui::{Align2, Color32, FontId, Rect, Sense};

use crate::app::AppState;

/// Renders the image canvas filling the central panel.
pub fn render_viewer_panel(ui: &mut egui::Ui, state: &mut AppState) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
    let panel_rect = response.rect;

    if let (Some(texture), Some(image_size)) = (state.image.texture(), state.image.size_vec()) {
        // Fit baseline: the whole image visible, aspect ratio kept.
        let fit_scale = (panel_rect.width() / image_size.x)
            .min(panel_rect.height() / image_size.y);
        let scale = fit_scale * state.view.zoom();

        let center = panel_rect.center() + state.view.pan();
        let image_rect = Rect::from_center_size(center, image_size * scale);

        painter.image(
            texture.id(),
            image_rect,
            Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            Color32::WHITE,
        );

        if response.dragged() {
            state.view.pan_by(response.drag_delta());
        }

        if response.hovered() {
            let zoom_delta = ui.input(|i| i.zoom_delta());
            if zoom_delta != 1.0 {
                let anchor = ui
                    .input(|i| i.pointer.hover_pos())
                    .map(|pos| pos - panel_rect.center())
                    .unwrap_or(egui::Vec2::ZERO);
                state.view.zoom_around(zoom_delta, anchor);
            }
        }
    } else {
        painter.text(
            panel_rect.center(),
            Align2::CENTER_CENTER,
            "Open an image or drop one here",
            FontId::proportional(18.0),
            Color32::from_gray(140),
        );
    }

    // Drop hint while files hover over the window
    let files_hovering = ui.input(|i| !i.raw.hovered_files.is_empty());
    if files_hovering {
        painter.rect_filled(panel_rect, 0.0, Color32::from_black_alpha(120));
        painter.text(
            panel_rect.center(),
            Align2::CENTER_CENTER,
            "Drop image to open",
            FontId::proportional(24.0),
            Color32::WHITE,
        );
    }
}
