//! Application-level modules for the image viewer.
//!
//! This module contains the main application coordinator, centralized state
//! management, and preference persistence.

mod app_state;
mod application_coordinator;
mod settings_coordinator;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
pub use settings_coordinator::{SettingsCoordinator, ViewerPrefs};
