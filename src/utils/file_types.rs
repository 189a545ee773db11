//! Supported image file extensions.
//!
//! This is a UI-layer filter for dialogs and drag-and-drop; the load
//! pipeline itself accepts any path and lets decode failure signal an
//! unsupported format.

use std::path::Path;

/// Extensions accepted by the open dialog and drop handler.
pub const SUPPORTED_EXTENSIONS: &[&str] =
    &["png", "jpg", "jpeg", "bmp", "gif", "tiff", "tif", "webp"];

/// True if `path` has a supported image extension (case-insensitive).
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}
