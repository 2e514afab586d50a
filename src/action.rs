//! Action model shared by the gesture engine and its hosts.
//!
//! The engine never looks inside an [`Action`]; it only resolves which binding a
//! recognized gesture maps to and hands the descriptor to an [`ActionSink`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque descriptor of "what to do" (service call, navigation, no-op, ...).
///
/// Whatever JSON the host put into the configuration is carried through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Action(pub serde_json::Value);

impl Action {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Returns the underlying JSON value.
    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<serde_json::Value> for Action {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// Direction of a swipe or hold-repeat, in screen coordinates (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl SwipeDirection {
    pub const ALL: [SwipeDirection; 4] = [
        SwipeDirection::Up,
        SwipeDirection::Down,
        SwipeDirection::Left,
        SwipeDirection::Right,
    ];
}

/// Every gesture outcome that can carry its own action binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    Up,
    Down,
    Left,
    Right,
    Tap,
    DoubleTap,
}

impl Gesture {
    pub const ALL: [Gesture; 6] = [
        Gesture::Up,
        Gesture::Down,
        Gesture::Left,
        Gesture::Right,
        Gesture::Tap,
        Gesture::DoubleTap,
    ];

    /// Name of the configuration field holding this gesture's action.
    pub fn binding_key(self) -> &'static str {
        match self {
            Gesture::Up => "up_action",
            Gesture::Down => "down_action",
            Gesture::Left => "left_action",
            Gesture::Right => "right_action",
            Gesture::Tap => "tap_action",
            Gesture::DoubleTap => "double_tap_action",
        }
    }

    /// Stable slot used by per-gesture tables (feedback animations).
    pub fn index(self) -> usize {
        match self {
            Gesture::Up => 0,
            Gesture::Down => 1,
            Gesture::Left => 2,
            Gesture::Right => 3,
            Gesture::Tap => 4,
            Gesture::DoubleTap => 5,
        }
    }

    pub fn direction(self) -> Option<SwipeDirection> {
        match self {
            Gesture::Up => Some(SwipeDirection::Up),
            Gesture::Down => Some(SwipeDirection::Down),
            Gesture::Left => Some(SwipeDirection::Left),
            Gesture::Right => Some(SwipeDirection::Right),
            Gesture::Tap | Gesture::DoubleTap => None,
        }
    }
}

impl From<SwipeDirection> for Gesture {
    fn from(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Up => Gesture::Up,
            SwipeDirection::Down => Gesture::Down,
            SwipeDirection::Left => Gesture::Left,
            SwipeDirection::Right => Gesture::Right,
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binding_key())
    }
}

/// Identifier of one of the four corner hit-regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerId {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl CornerId {
    pub const ALL: [CornerId; 4] = [
        CornerId::TopLeft,
        CornerId::TopRight,
        CornerId::BottomLeft,
        CornerId::BottomRight,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CornerId::TopLeft => "top_left",
            CornerId::TopRight => "top_right",
            CornerId::BottomLeft => "bottom_left",
            CornerId::BottomRight => "bottom_right",
        }
    }
}

impl fmt::Display for CornerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What produced an emitted action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionSource {
    Gesture(Gesture),
    Corner(CornerId),
}

impl fmt::Display for ActionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionSource::Gesture(gesture) => gesture.fmt(f),
            ActionSource::Corner(corner) => write!(f, "corner:{}", corner),
        }
    }
}

/// A single emission: the bound action plus where it came from and when.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionEvent {
    pub source: ActionSource,
    pub action: Action,
    pub t_ms: u64,
}

impl ActionEvent {
    /// Renders the dashboard's `hass-action` event detail.
    ///
    /// The dashboard only understands tap actions, so every emission is wrapped as
    /// `{"config": {"tap_action": ...}, "action": "tap"}`.
    pub fn to_hass_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "config": { "tap_action": self.action.as_json() },
            "action": "tap",
        })
    }
}

/// Receiver of emitted actions.
///
/// The engine calls [`ActionSink::emit`] synchronously, at most once per recognized
/// gesture or timer tick.
pub trait ActionSink {
    fn emit(&mut self, event: ActionEvent);
}

impl ActionSink for Vec<ActionEvent> {
    fn emit(&mut self, event: ActionEvent) {
        self.push(event);
    }
}

/// Adapts a closure into an [`ActionSink`].
pub struct CallbackSink<F>(pub F);

impl<F> ActionSink for CallbackSink<F>
where
    F: FnMut(ActionEvent),
{
    fn emit(&mut self, event: ActionEvent) {
        (self.0)(event)
    }
}

/// Sink that drops everything; useful when only the visual state matters.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ActionSink for NullSink {
    fn emit(&mut self, _event: ActionEvent) {}
}
