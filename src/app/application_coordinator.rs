//! Application-level coordination and workflow management.
//!
//! Handles high-level operations: starting image loads, applying load
//! events to application state, and accepting dropped files.

use std::path::{Path, PathBuf};

use eframe::egui;
use insight::{LoadEvent, LoadSupervisor};

use crate::app::AppState;
use crate::utils::file_types;

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Starting asynchronous image loads
/// - Applying drained load events to state (texture upload, view reset)
/// - Handling drag-and-drop file acceptance
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Initiates an asynchronous image load.
    ///
    /// Updates the status line and progress indicator immediately; the
    /// previously displayed image stays on screen until the new one is
    /// accepted. Re-requesting supersedes any in-flight load.
    pub fn open_image(state: &mut AppState, supervisor: &mut LoadSupervisor, path: PathBuf) {
        state.status.begin_loading(&display_name(&path));
        state.error_message = None;

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            state.prefs.last_open_dir = Some(dir.to_path_buf());
        }

        supervisor.request(path);
    }

    /// Drains load events and applies them to application state.
    ///
    /// Called once per frame in the update loop. Every event already passed
    /// the supervisor's stale filter, so it belongs to the latest request.
    /// Returns true if a load reached a terminal outcome this frame.
    pub fn apply_load_events(
        state: &mut AppState,
        supervisor: &mut LoadSupervisor,
        ctx: &egui::Context,
    ) -> bool {
        let mut finished = false;
        for event in supervisor.poll() {
            match event {
                LoadEvent::Progress(percent) => {
                    state.status.set_progress(percent);
                }
                LoadEvent::Loaded(bitmap, path) => {
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(
                        [bitmap.width() as usize, bitmap.height() as usize],
                        bitmap.pixels(),
                    );
                    let texture =
                        ctx.load_texture("viewer-image", color_image, egui::TextureOptions::LINEAR);

                    let name = display_name(&path);
                    state.image.accept(bitmap, path, texture);
                    state.view.reset();
                    state.status.finish_loaded(&name);
                    state.error_message = None;
                    finished = true;
                }
                LoadEvent::Failed(message) => {
                    // The previous image stays on screen; only the status
                    // line and error text change.
                    state.status.fail(&message);
                    state.error_message = Some(message);
                    finished = true;
                }
            }
        }
        finished
    }

    /// Accepts files dropped on the window.
    ///
    /// Only the first file with a supported image extension is loaded; the
    /// rest are ignored.
    pub fn handle_dropped_files(
        state: &mut AppState,
        supervisor: &mut LoadSupervisor,
        ctx: &egui::Context,
    ) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(path) = dropped
            .into_iter()
            .filter_map(|file| file.path)
            .find(|path| file_types::is_supported_image(path))
        {
            Self::open_image(state, supervisor, path);
        }
    }
}

/// File name shown in status messages; falls back to the full path.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
