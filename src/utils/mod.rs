//! Utility modules for the touch pad demo.

pub mod formatting;
pub mod geometry;

// Re-export commonly used functions
pub use formatting::{format_timestamp, summarize_json};
pub use geometry::{extent_of, pad_local, to_screen};
