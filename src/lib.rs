pub mod action;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod script;
pub mod surface;
pub mod theme;
pub mod timer;
pub mod visual;

// Export actions and the sink seam
pub use action::{
    Action, ActionEvent, ActionSink, ActionSource, CallbackSink, CornerId, Gesture, NullSink,
    SwipeDirection,
};

// Export configuration
pub use config::{
    CornerConfig, Length, PadConfig, RepeatConfig, VisualFeedbackConfig, DEFAULT_SWIPE_THRESHOLD,
    DEFAULT_TAP_THRESHOLD, DEFAULT_TAP_TIMEOUT_MS,
};

// Export the gesture engine and cursor projector
pub use engine::{classify_direction, is_tap_candidate, GestureEngine, HoldPhase, ReleaseOutcome};
pub use geometry::{project, Extent, Offset, PadGeometry, Point, Region};

// Export the pad surface
pub use surface::{corner_regions, layout_for, Release, Routing, TouchId, TouchPad};

// Export scripting
pub use script::{replay_script, GestureScript, ScriptGenerator, ScriptStep};

// Export visual state
pub use visual::{CursorTransition, CursorVisual, FeedbackState, PadVisual};

// Export theme support
pub use theme::{adjust_brightness, css_color_or, hex_to_color32, parse_css_color, Theme, ThemeColors, ThemeManager};
