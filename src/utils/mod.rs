//! Utility modules for the image viewer.

pub mod file_types;
pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_file_size, format_memory_mb, format_modified, get_current_memory_mb};
