//! Application-level coordination and workflow management.
//!
//! Handles high-level application operations like config loading, live editing,
//! driving the pad clock and collecting emitted actions.

use crate::app::AppState;
use crate::io::{AsyncLoader, LoadResult};
use eframe::egui;
use rtouchpad::PadConfig;
use std::path::PathBuf;

/// Configuration loaded by the "Example" button and on first start.
pub const EXAMPLE_CONFIG: &str = include_str!("../example-config.json");

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Managing config file loading workflows
/// - Applying edited configuration text
/// - Advancing pad timers and moving emitted actions into the log
/// - Managing error states
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Initiates asynchronous config file loading.
    pub fn open_config_file(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        path: PathBuf,
        ctx: &egui::Context,
    ) {
        state.error_message = None;
        loader.start_file_load(path, ctx);
    }

    /// Checks for loading completion and applies results to application state.
    ///
    /// Called once per frame in the update loop.
    /// Returns true if a load operation completed (success or error).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success(loaded) => {
                log::info!("loaded config from {}", loaded.path.display());
                state.install_config(loaded.text, loaded.config, Some(loaded.path));
                true
            }
            LoadResult::Error(error_msg) => {
                // The pad keeps running with its previous configuration.
                state.error_message = Some(format!("Error loading config: {}", error_msg));
                true
            }
            LoadResult::None => false,
        }
    }

    /// Loads the bundled example configuration.
    pub fn load_example(state: &mut AppState) {
        match PadConfig::from_json_str(EXAMPLE_CONFIG) {
            Ok(config) => state.install_config(EXAMPLE_CONFIG.to_string(), config, None),
            Err(e) => state.error_message = Some(format!("Error in example config: {:#}", e)),
        }
    }

    /// Parses the editor text and applies it to the pad.
    ///
    /// A parse failure keeps the last good configuration and records the error for
    /// delayed display.
    pub fn apply_editor_text(state: &mut AppState, now_ms: u64) {
        match PadConfig::from_json_str(state.editor.text()) {
            Ok(config) => {
                log::debug!("applying edited config");
                state.editor.clear_error();
                state.pad.apply_config(config, None);
            }
            Err(e) => {
                log::debug!("edited config rejected: {:#}", e);
                state.editor.record_parse_error(format!("{:#}", e), now_ms);
            }
        }
    }

    /// Runs the per-frame bookkeeping.
    ///
    /// Applies a due editor edit, fires due pad timers and moves emitted actions
    /// into the log.
    pub fn tick(state: &mut AppState, now_ms: u64) {
        if state.editor.take_due_edit(now_ms) {
            Self::apply_editor_text(state, now_ms);
        }

        state.pad.pad_mut().poll(now_ms);

        let events = state.pad.drain_events();
        if !events.is_empty() {
            state.events.extend(events);
        }
    }

    /// Empties the action log.
    pub fn clear_log(state: &mut AppState) {
        state.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtouchpad::{ActionSource, Extent, Gesture, Point};

    #[test]
    fn test_example_config_parses() {
        let mut state = AppState::new();
        ApplicationCoordinator::load_example(&mut state);

        assert!(state.error_message.is_none());
        assert_eq!(state.editor.text(), EXAMPLE_CONFIG);
        assert!(state.pad.config().action_for(Gesture::Tap).is_some());
        assert!(state.pad.config().action_for(Gesture::DoubleTap).is_some());
    }

    #[test]
    fn test_bad_edit_keeps_last_good_config() {
        let mut state = AppState::new();
        ApplicationCoordinator::load_example(&mut state);
        let good = state.pad.config().clone();

        state.editor.text_mut().push_str("{ broken");
        state.editor.mark_edited(1_000);
        let due = state.editor.apply_deadline().unwrap();

        ApplicationCoordinator::tick(&mut state, due);
        assert_eq!(state.pad.config(), &good);
        assert!(state.editor.visible_error(due).is_none());
        assert!(state.editor.visible_error(10_000).is_some());
    }

    #[test]
    fn test_tick_moves_actions_into_log() {
        let mut state = AppState::new();
        ApplicationCoordinator::load_example(&mut state);

        let pad = state.pad.pad_mut();
        pad.set_container(Extent::square(300.0));
        pad.touch_start(1, Point::new(150.0, 150.0), 0);
        pad.touch_end(1, Point::new(150.0, 150.0), 50);

        // The example binds double_tap, so the tap waits out its window.
        ApplicationCoordinator::tick(&mut state, 100);
        assert!(state.events.is_empty());

        ApplicationCoordinator::tick(&mut state, 10_000);
        assert_eq!(state.events.len(), 1);
        assert_eq!(state.events.last_source(), Some(ActionSource::Gesture(Gesture::Tap)));

        ApplicationCoordinator::clear_log(&mut state);
        assert!(state.events.is_empty());
        assert_eq!(state.events.total(), 1);
    }
}
