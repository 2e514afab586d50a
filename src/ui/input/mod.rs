//! Input handling subsystem for UI interactions.
//!
//! This module contains all input handling logic:
//! - Pad input handling (mouse and touch to pad samples)

pub mod pad_input_handler;
