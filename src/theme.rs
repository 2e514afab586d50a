//! Colors for the demo shell.
//!
//! Two separate concerns live here: the window chrome themes offered by the demo
//! (Light, Dark and Home Assistant), and parsing of the CSS-like color strings found in
//! a pad configuration (`background_color`, `cursor_color`, ...).
//!
//! # Examples
//!
//! ```
//! use rtouchpad::theme::{parse_css_color, ThemeManager};
//!
//! let manager = ThemeManager::new();
//! assert!(manager.get_theme("Home Assistant").is_some());
//!
//! let cursor = parse_css_color("rgba(255, 255, 255, 0.4)").unwrap();
//! assert_eq!(cursor.a(), 102);
//! ```

use egui::Color32;

/// Color palette for the demo window chrome
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub panel_background: Color32,
    pub extreme_background: Color32,

    pub text: Color32,
    pub text_dim: Color32,

    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    /// Highlight for emitted actions in the event log
    pub accent: Color32,
    pub error: Color32,
    pub warning: Color32,
}

/// A named chrome theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Built-in chrome themes plus the current selection
pub struct ThemeManager {
    themes: Vec<Theme>,
    current: usize,
}

impl ThemeManager {
    /// Creates a manager with all built-in themes, Dark selected
    pub fn new() -> Self {
        Self {
            themes: vec![light_theme(), dark_theme(), home_assistant_theme()],
            current: 1,
        }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.iter().find(|theme| theme.name == name)
    }

    /// Returns the names of all available themes, sorted
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.iter().map(|t| t.name.as_str()).collect();
        names.sort();
        names
    }

    pub fn current_theme(&self) -> &Theme {
        &self.themes[self.current]
    }

    /// Sets the current theme by name
    pub fn set_current_theme(&mut self, name: &str) -> Result<(), String> {
        match self.themes.iter().position(|theme| theme.name == name) {
            Some(index) => {
                self.current = index;
                Ok(())
            }
            None => Err(format!("Theme '{}' not found", name)),
        }
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.noninteractive.bg_stroke.color = colors.border;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.accent;
        visuals.error_fg_color = colors.error;
        visuals.warn_fg_color = colors.warning;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme with egui default colors".to_string(),
        colors: ThemeColors {
            panel_background: Color32::from_rgb(248, 248, 248),
            extreme_background: Color32::from_rgb(255, 255, 255),
            text: Color32::from_rgb(0, 0, 0),
            text_dim: Color32::from_rgb(120, 120, 120),
            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(220, 220, 220),
            border: Color32::from_rgb(160, 160, 160),
            accent: Color32::from_rgb(40, 100, 200),
            error: Color32::from_rgb(200, 40, 40),
            warning: Color32::from_rgb(230, 120, 20),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark theme with egui default colors".to_string(),
        colors: ThemeColors {
            panel_background: Color32::from_rgb(39, 39, 39),
            extreme_background: Color32::from_rgb(16, 16, 16),
            text: Color32::from_rgb(255, 255, 255),
            text_dim: Color32::from_rgb(160, 160, 160),
            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),
            border: Color32::from_rgb(100, 100, 100),
            accent: Color32::from_rgb(52, 152, 219),
            error: Color32::from_rgb(231, 76, 60),
            warning: Color32::from_rgb(243, 156, 18),
        },
    }
}

/// Dashboard-like palette: near-black cards with the light-blue primary color
fn home_assistant_theme() -> Theme {
    Theme {
        name: "Home Assistant".to_string(),
        description: "Default dark dashboard palette".to_string(),
        colors: ThemeColors {
            panel_background: hex_to_color32("#1c1c1c"),
            extreme_background: hex_to_color32("#111111"),
            text: hex_to_color32("#e1e1e1"),
            text_dim: hex_to_color32("#9b9b9b"),
            selection: hex_to_color32("#01579b"),
            hover: hex_to_color32("#2c2c2c"),
            border: hex_to_color32("#3c3c3c"),
            accent: hex_to_color32("#03a9f4"),
            error: hex_to_color32("#db4437"),
            warning: hex_to_color32("#ffa600"),
        },
    }
}

/// Converts a `#rrggbb` string to Color32, black if malformed
pub fn hex_to_color32(hex: &str) -> Color32 {
    parse_hex(hex.trim_start_matches('#')).unwrap_or(Color32::BLACK)
}

/// Parses a CSS-like color: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)`,
/// `rgba(r, g, b, a)` with `a` in `[0, 1]` or a percentage, or one of a few named colors.
pub fn parse_css_color(text: &str) -> Option<Color32> {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = text.to_ascii_lowercase();
    if let Some(args) = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_rgb_function(args);
    }

    named_color(&lower)
}

/// Parses a configured color, falling back when it is missing or unreadable.
pub fn css_color_or(text: &str, fallback: Color32) -> Color32 {
    parse_css_color(text).unwrap_or_else(|| {
        log::warn!("unrecognized color '{}'", text);
        fallback
    })
}

fn parse_hex(hex: &str) -> Option<Color32> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some(Color32::from_rgb(digit(0)?, digit(1)?, digit(2)?)),
        4 => Some(Color32::from_rgba_unmultiplied(digit(0)?, digit(1)?, digit(2)?, digit(3)?)),
        6 => Some(Color32::from_rgb(pair(0)?, pair(2)?, pair(4)?)),
        8 => Some(Color32::from_rgba_unmultiplied(pair(0)?, pair(2)?, pair(4)?, pair(6)?)),
        _ => None,
    }
}

fn parse_rgb_function(args: &str) -> Option<Color32> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let channel = |s: &str| s.parse::<f32>().ok().map(|v| v.clamp(0.0, 255.0).round() as u8);

    match parts.as_slice() {
        [r, g, b] => Some(Color32::from_rgb(channel(r)?, channel(g)?, channel(b)?)),
        [r, g, b, a] => {
            let alpha = match a.strip_suffix('%') {
                Some(pct) => pct.trim().parse::<f32>().ok()? / 100.0,
                None => a.parse::<f32>().ok()?,
            };
            let alpha = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
            Some(Color32::from_rgba_unmultiplied(channel(r)?, channel(g)?, channel(b)?, alpha))
        }
        _ => None,
    }
}

fn named_color(name: &str) -> Option<Color32> {
    let color = match name {
        "transparent" => Color32::TRANSPARENT,
        "black" => Color32::BLACK,
        "white" => Color32::WHITE,
        "gray" | "grey" => Color32::from_rgb(128, 128, 128),
        "red" => Color32::from_rgb(255, 0, 0),
        "green" => Color32::from_rgb(0, 128, 0),
        "blue" => Color32::from_rgb(0, 0, 255),
        "yellow" => Color32::from_rgb(255, 255, 0),
        "orange" => Color32::from_rgb(255, 165, 0),
        "purple" => Color32::from_rgb(128, 0, 128),
        _ => return None,
    };
    Some(color)
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgba_premultiplied(r, g, b, color.a())
}
