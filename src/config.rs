//! Touch pad configuration.
//!
//! A configuration is supplied by the host as JSON and merged over the documented
//! defaults, the same way the dashboard card spreads its `setConfig` argument over its
//! base configuration. Every field is optional in the input; absent fields take the
//! default value and absent action bindings simply mean "do nothing".

use crate::action::{Action, CornerId, Gesture};
use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;
pub const DEFAULT_TAP_THRESHOLD: f32 = 5.0;
pub const DEFAULT_TAP_TIMEOUT_MS: u64 = 300;

/// Defaults serialized once, used as the base of every shallow merge.
static BASE_CONFIG: Lazy<serde_json::Map<String, serde_json::Value>> =
    Lazy::new(|| match serde_json::to_value(PadConfig::default()) {
        Ok(serde_json::Value::Object(map)) => map,
        _ => serde_json::Map::new(),
    });

/// Hold-repeat timing: either one duration used for both the initial delay and the
/// interval, or an explicit pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RepeatConfig {
    Uniform(u64),
    Split { delay: u64, interval: u64 },
}

impl RepeatConfig {
    /// Time the finger must stay past the swipe threshold before the first repeat.
    pub fn delay_ms(self) -> u64 {
        match self {
            RepeatConfig::Uniform(ms) => ms,
            RepeatConfig::Split { delay, .. } => delay,
        }
    }

    /// Period between repeats once the hold is active.
    pub fn interval_ms(self) -> u64 {
        match self {
            RepeatConfig::Uniform(ms) => ms,
            RepeatConfig::Split { interval, .. } => interval,
        }
    }
}

/// A CSS-like length: absolute pixels or a percentage of a reference size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LengthRepr", into = "String")]
pub enum Length {
    Px(f32),
    Percent(f32),
}

impl Length {
    /// Resolves to pixels; percentages are taken of `reference`.
    pub fn resolve(self, reference: f32) -> f32 {
        match self {
            Length::Px(px) => px,
            Length::Percent(pct) => reference * pct / 100.0,
        }
    }
}

impl FromStr for Length {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (number, percent) = if let Some(pct) = s.strip_suffix('%') {
            (pct, true)
        } else if let Some(px) = s.strip_suffix("px") {
            (px, false)
        } else {
            (s, false)
        };
        let value: f32 = number
            .trim()
            .parse()
            .with_context(|| format!("invalid length '{}'", s))?;
        Ok(if percent {
            Length::Percent(value)
        } else {
            Length::Px(value)
        })
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(px) => write!(f, "{}px", px),
            Length::Percent(pct) => write!(f, "{}%", pct),
        }
    }
}

impl From<Length> for String {
    fn from(length: Length) -> Self {
        length.to_string()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LengthRepr {
    Number(f32),
    Text(String),
}

impl TryFrom<LengthRepr> for Length {
    type Error = anyhow::Error;

    fn try_from(repr: LengthRepr) -> Result<Self> {
        match repr {
            LengthRepr::Number(px) => Ok(Length::Px(px)),
            LengthRepr::Text(text) => text.parse(),
        }
    }
}

/// A corner hit-region binding.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CornerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hass_action: Option<Action>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Flash a glyph for every emitted gesture action.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VisualFeedbackConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Complete touch pad configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadConfig {
    // ===== Gesture thresholds =====
    /// Minimum displacement (px) along the dominant axis for a swipe.
    pub swipe_threshold: f32,
    /// Displacement (px) on both axes must stay below this for a tap.
    pub tap_threshold: f32,
    /// Window (ms) in which a second tap becomes a double tap.
    pub tap_timeout: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<RepeatConfig>,

    // ===== Action bindings =====
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tap_action: Option<Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_tap_action: Option<Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up_action: Option<Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub down_action: Option<Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_action: Option<Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_action: Option<Action>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub corners: BTreeMap<CornerId, CornerConfig>,

    // ===== Styling tokens (consumed by the host only) =====
    pub background_color: String,
    pub border_radius: Length,
    pub cursor_size: Length,
    pub cursor_color: String,
    pub corner_size: Length,
    pub corner_color: String,
    pub corner_icon_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_feedback: Option<VisualFeedbackConfig>,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            tap_threshold: DEFAULT_TAP_THRESHOLD,
            tap_timeout: DEFAULT_TAP_TIMEOUT_MS,
            repeat: None,
            tap_action: None,
            double_tap_action: None,
            up_action: None,
            down_action: None,
            left_action: None,
            right_action: None,
            corners: BTreeMap::new(),
            background_color: "#2b2b2b".to_string(),
            border_radius: Length::Px(12.0),
            cursor_size: Length::Percent(20.0),
            cursor_color: "rgba(255, 255, 255, 0.4)".to_string(),
            corner_size: Length::Percent(20.0),
            corner_color: "#3a3a3a".to_string(),
            corner_icon_color: "#e0e0e0".to_string(),
            visual_feedback: None,
        }
    }
}

impl PadConfig {
    /// Shallow-merges the top-level keys of `partial` over the defaults.
    ///
    /// `null` is treated as an empty object. Anything else that is not an object,
    /// or a field with the wrong type, is an error.
    pub fn from_partial(partial: &serde_json::Value) -> Result<Self> {
        let mut merged = BASE_CONFIG.clone();
        match partial {
            serde_json::Value::Object(fields) => {
                for (key, value) in fields {
                    merged.insert(key.clone(), value.clone());
                }
            }
            serde_json::Value::Null => {}
            other => bail!("configuration must be a JSON object, got {}", json_kind(other)),
        }
        serde_json::from_value(serde_json::Value::Object(merged))
            .context("invalid touch pad configuration")
    }

    /// Parses JSON text and merges it over the defaults.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let partial: serde_json::Value =
            serde_json::from_str(text).context("configuration is not valid JSON")?;
        Self::from_partial(&partial)
    }

    /// Reads a JSON configuration file and merges it over the defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("in config file '{}'", path.display()))
    }

    /// Serializes the configuration (defaults included) as pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize configuration")
    }

    // ===== Binding lookups =====

    /// Returns the action bound to `gesture`, if any.
    pub fn action_for(&self, gesture: Gesture) -> Option<&Action> {
        match gesture {
            Gesture::Tap => self.tap_action.as_ref(),
            Gesture::DoubleTap => self.double_tap_action.as_ref(),
            Gesture::Up => self.up_action.as_ref(),
            Gesture::Down => self.down_action.as_ref(),
            Gesture::Left => self.left_action.as_ref(),
            Gesture::Right => self.right_action.as_ref(),
        }
    }

    /// Returns the action bound to a corner, if the corner exists and has one.
    pub fn corner_action(&self, corner: CornerId) -> Option<&Action> {
        self.corners.get(&corner).and_then(|c| c.hass_action.as_ref())
    }

    /// Effective single-tap delay.
    ///
    /// Without a double-tap binding there is nothing to disambiguate, so the tap is
    /// released right away and no second tap can ever count as a double tap.
    pub fn tap_window_ms(&self) -> u64 {
        if self.double_tap_action.is_some() {
            self.tap_timeout
        } else {
            0
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_config_uses_documented_defaults() {
        let config = PadConfig::from_partial(&json!({})).unwrap();
        assert_eq!(config.tap_threshold, 5.0);
        assert_eq!(config.swipe_threshold, 50.0);
        assert_eq!(config.tap_timeout, 300);
        assert_eq!(config.repeat, None);
        assert_eq!(config, PadConfig::default());
    }

    #[test]
    fn test_partial_config_overrides_only_given_fields() {
        let config = PadConfig::from_partial(&json!({
            "swipe_threshold": 80,
            "up_action": {"action": "call-service", "service": "remote.send_command"}
        }))
        .unwrap();

        assert_eq!(config.swipe_threshold, 80.0);
        assert_eq!(config.tap_threshold, DEFAULT_TAP_THRESHOLD);
        assert_eq!(
            config.action_for(Gesture::Up).map(|a| a.as_json()["service"].clone()),
            Some(json!("remote.send_command"))
        );
        assert!(config.action_for(Gesture::Down).is_none());
    }

    #[test]
    fn test_null_config_is_defaults() {
        let config = PadConfig::from_partial(&serde_json::Value::Null).unwrap();
        assert_eq!(config, PadConfig::default());
    }

    #[test]
    fn test_non_object_config_is_rejected() {
        let err = PadConfig::from_partial(&json!([1, 2, 3])).unwrap_err();
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        assert!(PadConfig::from_json_str(r#"{"tap_timeout": "soon"}"#).is_err());
        assert!(PadConfig::from_json_str("tap_timeout: 300").is_err());
    }

    #[test]
    fn test_repeat_accepts_scalar_and_pair() {
        let scalar = PadConfig::from_json_str(r#"{"repeat": 250}"#).unwrap();
        let repeat = scalar.repeat.unwrap();
        assert_eq!((repeat.delay_ms(), repeat.interval_ms()), (250, 250));

        let pair = PadConfig::from_json_str(r#"{"repeat": {"delay": 300, "interval": 100}}"#).unwrap();
        let repeat = pair.repeat.unwrap();
        assert_eq!((repeat.delay_ms(), repeat.interval_ms()), (300, 100));
    }

    #[test]
    fn test_corners_parse_by_identifier() {
        let config = PadConfig::from_partial(&json!({
            "corners": {
                "top_left": {"hass_action": {"action": "navigate", "navigation_path": "/lovelace/0"}, "icon": "mdi:home"},
                "bottom_right": {"icon": "mdi:cog"}
            }
        }))
        .unwrap();

        assert_eq!(config.corners.len(), 2);
        assert!(config.corner_action(CornerId::TopLeft).is_some());
        assert!(config.corner_action(CornerId::BottomRight).is_none());
        assert!(config.corner_action(CornerId::TopRight).is_none());
        assert_eq!(config.corners[&CornerId::TopLeft].icon.as_deref(), Some("mdi:home"));
    }

    #[test]
    fn test_unknown_corner_is_rejected() {
        assert!(PadConfig::from_partial(&json!({"corners": {"middle": {}}})).is_err());
    }

    #[test]
    fn test_tap_window_depends_on_double_tap_binding() {
        let mut config = PadConfig::default();
        assert_eq!(config.tap_window_ms(), 0);

        config.double_tap_action = Some(Action::new(json!({"action": "toggle"})));
        assert_eq!(config.tap_window_ms(), 300);
    }

    #[test]
    fn test_length_parsing() {
        assert_eq!("12px".parse::<Length>().unwrap(), Length::Px(12.0));
        assert_eq!(" 25% ".parse::<Length>().unwrap(), Length::Percent(25.0));
        assert_eq!("7".parse::<Length>().unwrap(), Length::Px(7.0));
        assert!("wide".parse::<Length>().is_err());

        let from_number: Length = serde_json::from_value(json!(40)).unwrap();
        assert_eq!(from_number, Length::Px(40.0));
        assert_eq!(Length::Percent(50.0).resolve(300.0), 150.0);
    }

    #[test]
    fn test_serialized_defaults_round_trip_through_merge() {
        let text = PadConfig::default().to_json_pretty().unwrap();
        assert_eq!(PadConfig::from_json_str(&text).unwrap(), PadConfig::default());
    }
}
