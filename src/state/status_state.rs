//! Status line and load progress indicator state.

/// What the status bar currently shows.
///
/// `progress` doubles as the indicator's visibility: `None` hides the bar,
/// `Some(percent)` shows it. It is set when a load begins and cleared on
/// either terminal outcome.
pub struct StatusState {
    status: String,
    progress: Option<u8>,
}

impl Default for StatusState {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusState {
    pub fn new() -> Self {
        Self {
            status: "Ready".to_string(),
            progress: None,
        }
    }

    /// Current status line text.
    pub fn line(&self) -> &str {
        &self.status
    }

    /// Current progress percent, or `None` when no load is in flight.
    pub fn progress(&self) -> Option<u8> {
        self.progress
    }

    /// A load was requested for `file_name`.
    pub fn begin_loading(&mut self, file_name: &str) {
        self.status = format!("Loading: {}", file_name);
        self.progress = Some(0);
    }

    /// The in-flight load reported progress.
    pub fn set_progress(&mut self, percent: u8) {
        self.progress = Some(percent.min(100));
    }

    /// The in-flight load finished successfully.
    pub fn finish_loaded(&mut self, file_name: &str) {
        self.status = format!("Loaded: {}", file_name);
        self.progress = None;
    }

    /// The in-flight load failed; the message becomes the status line.
    pub fn fail(&mut self, message: &str) {
        self.status = message.to_string();
        self.progress = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_tracks_load_lifecycle() {
        let mut status = StatusState::new();
        assert_eq!(status.line(), "Ready");
        assert_eq!(status.progress(), None);

        status.begin_loading("cat.png");
        assert_eq!(status.line(), "Loading: cat.png");
        assert_eq!(status.progress(), Some(0));

        status.set_progress(70);
        assert_eq!(status.progress(), Some(70));

        status.finish_loaded("cat.png");
        assert_eq!(status.line(), "Loaded: cat.png");
        assert_eq!(status.progress(), None);
    }

    #[test]
    fn failure_replaces_status_and_hides_progress() {
        let mut status = StatusState::new();
        status.begin_loading("cat.png");
        status.fail("Failed to load image: cat.png");
        assert_eq!(status.line(), "Failed to load image: cat.png");
        assert_eq!(status.progress(), None);
    }
}
