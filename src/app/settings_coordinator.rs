//! Demo preference persistence.
//!
//! Preferences are stored as one JSON string in eframe's storage. Missing or
//! unreadable entries fall back to defaults field by field.

use serde::{Deserialize, Serialize};

const PREFERENCES_KEY: &str = "demo_preferences";

/// Layout preferences kept across sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoPreferences {
    /// Whether the action log panel is shown
    pub show_event_log: bool,
    /// Width of the config editor side panel in points
    pub editor_width: f32,
}

impl Default for DemoPreferences {
    fn default() -> Self {
        Self {
            show_event_log: true,
            editor_width: 420.0,
        }
    }
}

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads the demo preferences from persistent storage.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface, if persistence is available
    ///
    /// # Returns
    /// The stored preferences, or defaults if none are stored or they cannot be read
    pub fn load_preferences(storage: Option<&dyn eframe::Storage>) -> DemoPreferences {
        Self::load_setting(storage, PREFERENCES_KEY)
    }

    /// Saves the demo preferences to persistent storage.
    pub fn save_preferences(storage: &mut dyn eframe::Storage, preferences: &DemoPreferences) {
        Self::save_setting(storage, PREFERENCES_KEY, preferences);
    }

    fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        let Some(json_str) = storage.and_then(|storage| storage.get_string(key)) else {
            return T::default();
        };
        serde_json::from_str(&json_str).unwrap_or_else(|e| {
            log::warn!("ignoring stored setting '{}': {}", key, e);
            T::default()
        })
    }

    fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(e) => log::warn!("failed to store setting '{}': {}", key, e),
        }
    }
}
