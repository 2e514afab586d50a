//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the touch pad demo:
//! - Header panel (config file controls, log toggle, theme selector)
//! - Config panel (live JSON editor)
//! - Pad panel (the touch pad itself)
//! - Event log panel (emitted actions)
//! - Status bar (gesture state, thresholds, config source)
//! - Panel manager (panel orchestration and layout)
//! - Input handling (mouse and touch forwarding to the pad)

pub mod header;
pub mod config_panel;
pub mod pad_panel;
pub mod event_log_panel;
pub mod status_bar;
pub mod panel_manager;
pub mod input;
