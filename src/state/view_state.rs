//! Zoom and pan state for the image canvas.
//!
//! Zoom is expressed relative to the fit-to-panel baseline: 1.0 means the
//! image exactly fits the viewer panel, higher values zoom in. The pan
//! offset moves the image center away from the panel center, in points.

use egui::Vec2;

/// Maximum zoom factor relative to the fit baseline.
const MAX_ZOOM: f32 = 10.0;
/// Minimum zoom factor relative to the fit baseline.
const MIN_ZOOM: f32 = 0.1;

/// State related to the visible image transform.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Current zoom factor (1.0 = fit to panel)
    zoom: f32,
    /// Offset of the image center from the panel center, in points
    pan: Vec2,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Creates a view at the fit baseline with no pan.
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
        }
    }

    /// Returns the current zoom factor.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Returns the current pan offset in points.
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Resets to the fit baseline. Called whenever a new image is accepted.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan = Vec2::ZERO;
    }

    /// Applies a zoom step centered on the panel.
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom_around(factor, Vec2::ZERO);
    }

    /// Applies a zoom step anchored at `anchor` (offset from the panel
    /// center), keeping the image point under the anchor fixed on screen.
    pub fn zoom_around(&mut self, factor: f32, anchor: Vec2) {
        let old_zoom = self.zoom;
        let new_zoom = (old_zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        if new_zoom == old_zoom {
            return;
        }
        // The image point under the anchor sits at (anchor - pan) in screen
        // units; after scaling, the pan must absorb the difference.
        let scale = new_zoom / old_zoom;
        self.pan = anchor + (self.pan - anchor) * scale;
        self.zoom = new_zoom;
    }

    /// Moves the image by `delta` points (drag panning).
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_fit_baseline() {
        let view = ViewState::new();
        assert_eq!(view.zoom(), 1.0);
        assert_eq!(view.pan(), Vec2::ZERO);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut view = ViewState::new();
        view.zoom_by(1000.0);
        assert_eq!(view.zoom(), MAX_ZOOM);
        view.zoom_by(1e-6);
        assert_eq!(view.zoom(), MIN_ZOOM);
    }

    #[test]
    fn reset_restores_baseline() {
        let mut view = ViewState::new();
        view.zoom_by(2.0);
        view.pan_by(Vec2::new(40.0, -10.0));
        view.reset();
        assert_eq!(view.zoom(), 1.0);
        assert_eq!(view.pan(), Vec2::ZERO);
    }

    #[test]
    fn anchored_zoom_keeps_point_under_anchor() {
        let mut view = ViewState::new();
        view.pan_by(Vec2::new(10.0, 20.0));
        let anchor = Vec2::new(100.0, 50.0);

        // Image-space position of the point under the anchor, in fit units.
        let before = (anchor - view.pan()) / view.zoom();
        view.zoom_around(2.0, anchor);
        let after = (anchor - view.pan()) / view.zoom();

        assert!((before - after).length() < 1e-3);
        assert_eq!(view.zoom(), 2.0);
    }

    #[test]
    fn centered_zoom_keeps_center_fixed() {
        let mut view = ViewState::new();
        view.zoom_by(2.0);
        assert_eq!(view.pan(), Vec2::ZERO);
    }
}
