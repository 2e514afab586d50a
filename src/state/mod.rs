//! State management modules for the touch pad demo.
//!
//! This module contains state-only logic (no UI concerns):
//! - Pad state (the embedded touch pad and its clock)
//! - Editor state (config text, debounced apply, delayed errors)
//! - Event log state (emitted actions)
//! - Theme state (theme manager, current theme)

mod pad_state;
mod editor_state;
mod event_log;
mod theme_state;

pub use pad_state::PadState;
pub use editor_state::EditorState;
pub use event_log::EventLogState;
pub use theme_state::ThemeState;
