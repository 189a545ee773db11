//! Viewer preference persistence.
//!
//! Cosmetic preferences survive restarts through eframe's persistent storage,
//! serialized as a single JSON value.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Storage key for the serialized [`ViewerPrefs`].
const PREFS_KEY: &str = "viewer_prefs";

/// Preferences that persist across sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerPrefs {
    /// Whether the info side panel is shown
    pub show_info_panel: bool,
    /// Directory the open-file dialog starts in
    pub last_open_dir: Option<PathBuf>,
}

impl Default for ViewerPrefs {
    fn default() -> Self {
        Self {
            show_info_panel: true,
            last_open_dir: None,
        }
    }
}

/// Coordinates preference loading and saving against eframe storage.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads preferences, falling back to defaults when storage is absent or
    /// the stored JSON no longer parses.
    pub fn load_prefs(storage: Option<&dyn eframe::Storage>) -> ViewerPrefs {
        if let Some(storage) = storage {
            if let Some(json_str) = storage.get_string(PREFS_KEY) {
                if let Ok(prefs) = serde_json::from_str(&json_str) {
                    return prefs;
                }
            }
        }
        ViewerPrefs::default()
    }

    /// Saves preferences to persistent storage.
    pub fn save_prefs(storage: &mut dyn eframe::Storage, prefs: &ViewerPrefs) {
        if let Ok(json_str) = serde_json::to_string(prefs) {
            storage.set_string(PREFS_KEY, json_str);
            storage.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn save_and_load_round_trip() {
        let mut storage = MockStorage::new();
        let prefs = ViewerPrefs {
            show_info_panel: false,
            last_open_dir: Some(PathBuf::from("/tmp/pictures")),
        };

        SettingsCoordinator::save_prefs(&mut storage, &prefs);
        let loaded = SettingsCoordinator::load_prefs(Some(&storage));

        assert!(!loaded.show_info_panel);
        assert_eq!(loaded.last_open_dir, Some(PathBuf::from("/tmp/pictures")));
    }

    #[test]
    fn missing_storage_yields_defaults() {
        let loaded = SettingsCoordinator::load_prefs(None);
        assert!(loaded.show_info_panel);
        assert_eq!(loaded.last_open_dir, None);
    }

    #[test]
    fn corrupt_json_yields_defaults() {
        let mut storage = MockStorage::new();
        storage.set_string(PREFS_KEY, "not json".to_string());
        let loaded = SettingsCoordinator::load_prefs(Some(&storage));
        assert!(loaded.show_info_panel);
    }
}
