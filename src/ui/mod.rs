//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the image viewer:
//! - Header panel (file controls, zoom buttons, info toggle)
//! - Viewer panel (image canvas with pan and zoom)
//! - Info panel (file metadata and image details)
//! - Status bar (memory, status line, load progress)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod info_panel;
pub mod panel_manager;
pub mod status_bar;
pub mod viewer_panel;
