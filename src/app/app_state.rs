//! Centralized application state for the touch pad demo.
//!
//! The state is composed of focused components, each keeping its invariants local:
//! - The pad and its clock
//! - The configuration editor
//! - The log of emitted actions
//! - The window theme

use crate::state::{EditorState, EventLogState, PadState, ThemeState};
use rtouchpad::PadConfig;

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// The embedded touch pad
    pub pad: PadState,

    /// Live JSON configuration editor
    pub editor: EditorState,

    /// Emitted actions
    pub events: EventLogState,

    /// Theme and styling state
    pub theme: ThemeState,

    // ===== Top-Level State =====
    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a state with the default configuration and an editor showing it.
    pub fn new() -> Self {
        let config = PadConfig::default();
        let text = config.to_json_pretty().unwrap_or_else(|_| "{}".to_string());
        Self {
            pad: PadState::new(config),
            editor: EditorState::new(text),
            events: EventLogState::new(),
            theme: ThemeState::new(),
            error_message: None,
        }
    }

    /// Creates a state with a theme loaded from storage.
    pub fn with_theme(theme_name: &str) -> Self {
        Self {
            theme: ThemeState::with_theme(theme_name),
            ..Self::new()
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Installs a configuration and shows `text` in the editor.
    ///
    /// # Arguments
    /// * `text` - Editor contents the configuration was parsed from
    /// * `config` - The parsed configuration
    /// * `path` - File the configuration came from, if any
    pub fn install_config(&mut self, text: String, config: PadConfig, path: Option<std::path::PathBuf>) {
        self.editor.set_text(text);
        self.pad.apply_config(config, path);
        self.error_message = None;
    }

    /// Earliest time something scheduled needs a repaint: a pad timer, the editor
    /// debounce or a pending error display.
    pub fn next_wakeup(&self, now_ms: u64) -> Option<u64> {
        [
            self.pad.pad().next_deadline(),
            self.editor.apply_deadline(),
            self.editor.error_deadline(now_ms),
        ]
        .into_iter()
        .flatten()
        .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_editor_shows_defaults() {
        let state = AppState::new();
        let parsed = PadConfig::from_json_str(state.editor.text()).unwrap();
        assert_eq!(&parsed, state.pad.config());
        assert_eq!(state.next_wakeup(0), None);
    }

    #[test]
    fn test_next_wakeup_takes_earliest() {
        let mut state = AppState::new();
        state.editor.mark_edited(1_000);
        state.editor.record_parse_error("expected value", 900);
        assert_eq!(state.next_wakeup(1_000), Some(1_500));
    }
}
