//! Centralized application state for the image viewer.
//!
//! Composes focused state components, each managing one aspect of the
//! application. Components keep their invariants local and expose
//! intent-revealing methods, which keeps access borrow-checker friendly.

use crate::app::ViewerPrefs;
use crate::state::{ImageState, StatusState, ViewState};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Accepted image, its texture and file metadata
    pub image: ImageState,

    /// Zoom and pan transform of the viewer panel
    pub view: ViewState,

    /// Status line and progress indicator
    pub status: StatusState,

    /// Persisted cosmetic preferences
    pub prefs: ViewerPrefs,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self::with_prefs(ViewerPrefs::default())
    }

    /// Creates a new application state with preferences loaded from storage.
    pub fn with_prefs(prefs: ViewerPrefs) -> Self {
        Self {
            image: ImageState::new(),
            view: ViewState::new(),
            status: StatusState::new(),
            prefs,
            error_message: None,
        }
    }
}
