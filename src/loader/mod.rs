//! Asynchronous image loading pipeline.

pub mod supervisor;
pub mod task;

// Re-export commonly used types
pub use supervisor::{LoadEvent, LoadSupervisor, RepaintHook};
pub use task::LoadTask;
