pub mod decoder;
pub mod loader;

// Export decode boundary
pub use decoder::{open_bitmap, Bitmap, FileDecoder, ImageDecoder};

// Export load pipeline
pub use loader::{LoadEvent, LoadSupervisor, LoadTask, RepaintHook};
