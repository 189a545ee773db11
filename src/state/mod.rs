//! State management modules for the image viewer.
//!
//! This module contains state-only logic (no rendering concerns):
//! - Image state (accepted bitmap, path, texture, file metadata)
//! - View state (zoom factor, pan offset)
//! - Status state (status line, progress indicator)

mod image_state;
mod status_state;
mod view_state;

pub use image_state::{FileMetadata, ImageState};
pub use status_state::StatusState;
pub use view_state::ViewState;
