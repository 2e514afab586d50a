//! Icon resolution for corner and feedback glyphs.
//!
//! Configurations name icons the way the dashboard does (`mdi:home`). The demo has no
//! icon font, so known ids map to glyphs from egui's bundled emoji font. Unknown ids
//! resolve to nothing and the icon is simply not drawn.

use rtouchpad::Gesture;

/// Glyph for an `mdi:*` icon id, if one is known.
pub fn resolve_icon(icon: &str) -> Option<&'static str> {
    let name = icon.trim().strip_prefix("mdi:")?;
    let glyph = match name {
        "arrow-up" => "⬆",
        "arrow-down" => "⬇",
        "arrow-left" => "⬅",
        "arrow-right" => "➡",
        "gesture-tap" => "👆",
        "gesture-double-tap" => "✌",
        "home" | "home-outline" => "🏠",
        "menu" => "☰",
        "power" | "power-standby" => "⏻",
        "information" | "information-outline" => "ℹ",
        "television" | "television-classic" => "📺",
        "play" => "▶",
        "pause" => "⏸",
        "play-pause" => "⏯",
        "stop" => "⏹",
        "skip-next" => "⏭",
        "skip-previous" => "⏮",
        "volume-high" | "volume-plus" => "🔊",
        "volume-off" | "volume-mute" => "🔇",
        "magnify" => "🔍",
        "cog" => "⚙",
        "lightbulb" => "💡",
        "close" => "✖",
        "check" => "✔",
        _ => return None,
    };
    Some(glyph)
}

/// Icon id shown as feedback for each gesture.
pub fn feedback_icon(gesture: Gesture) -> &'static str {
    match gesture {
        Gesture::Up => "mdi:arrow-up",
        Gesture::Down => "mdi:arrow-down",
        Gesture::Left => "mdi:arrow-left",
        Gesture::Right => "mdi:arrow-right",
        Gesture::Tap => "mdi:gesture-tap",
        Gesture::DoubleTap => "mdi:gesture-double-tap",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_feedback_icon_resolves() {
        for gesture in Gesture::ALL {
            assert!(resolve_icon(feedback_icon(gesture)).is_some(), "{}", gesture);
        }
    }

    #[test]
    fn test_unknown_or_foreign_icons() {
        assert_eq!(resolve_icon("mdi:home"), Some("🏠"));
        assert_eq!(resolve_icon("mdi:does-not-exist"), None);
        assert_eq!(resolve_icon("hass:home"), None);
        assert_eq!(resolve_icon(""), None);
    }
}
