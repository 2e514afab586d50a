//! Touch pad painting.
//!
//! Draws the pad from its configuration styling tokens and the visual state the pad
//! reports: background, corner regions with their icons, the cursor circle and the
//! gesture feedback glyphs.

use crate::presentation::icons::{feedback_icon, resolve_icon};
use crate::utils::to_screen;
use eframe::egui;
use egui::Color32;
use rtouchpad::{corner_regions, css_color_or, CornerId, Gesture, Length, PadConfig, TouchPad};

/// Fallbacks for configuration colors that do not parse.
const FALLBACK_BACKGROUND: Color32 = Color32::from_rgb(0x2b, 0x2b, 0x2b);
const FALLBACK_CURSOR: Color32 = Color32::from_rgba_premultiplied(102, 102, 102, 102);
const FALLBACK_CORNER: Color32 = Color32::from_rgb(0x3a, 0x3a, 0x3a);
const FALLBACK_ICON: Color32 = Color32::from_rgb(0xe0, 0xe0, 0xe0);

/// Renders the whole pad into `rect`.
///
/// # Arguments
/// * `painter` - Painter clipped to the pad area
/// * `rect` - Screen rectangle of the pad
/// * `pad` - The pad, for configuration, layout and visual state
/// * `now_ms` - Pad clock, for animations
/// * `border` - Stroke color of the pad outline (from the window theme)
pub fn render_pad(painter: &egui::Painter, rect: egui::Rect, pad: &TouchPad, now_ms: u64, border: Color32) {
    let config = pad.config();
    let radius = config.border_radius.resolve(rect.width());

    painter.rect_filled(
        rect,
        rounding(radius),
        css_color_or(&config.background_color, FALLBACK_BACKGROUND),
    );

    render_corners(painter, rect, config);
    render_cursor(painter, rect, pad, now_ms);
    render_feedback(painter, rect, pad, now_ms);

    painter.rect_stroke(rect, rounding(radius), egui::Stroke::new(1.0, border), egui::StrokeKind::Inside);
}

// ===== Parts =====

fn render_corners(painter: &egui::Painter, rect: egui::Rect, config: &PadConfig) {
    let radius = config.border_radius.resolve(rect.width());
    let fill = css_color_or(&config.corner_color, FALLBACK_CORNER);
    let icon_color = css_color_or(&config.corner_icon_color, FALLBACK_ICON);

    for (corner, region) in corner_regions(config, rtouchpad::Extent::new(rect.width(), rect.height())) {
        let corner_rect = egui::Rect::from_min_max(
            rect.min + egui::vec2(region.min.x, region.min.y),
            rect.min + egui::vec2(region.max.x, region.max.y),
        );
        painter.rect_filled(corner_rect, inner_corner_rounding(corner, radius), fill);

        let glyph = config
            .corners
            .get(&corner)
            .and_then(|c| c.icon.as_deref())
            .and_then(resolve_icon);
        if let Some(glyph) = glyph {
            // Icons take half the corner square.
            let size = corner_rect.width() * 0.5;
            painter.text(
                corner_rect.center(),
                egui::Align2::CENTER_CENTER,
                glyph,
                egui::FontId::proportional(size),
                icon_color,
            );
        }
    }
}

fn render_cursor(painter: &egui::Painter, rect: egui::Rect, pad: &TouchPad, now_ms: u64) {
    let config = pad.config();
    let cursor = pad.geometry().cursor;
    let offset = pad.visual().cursor.rendered_offset(now_ms);

    painter.circle_filled(
        to_screen(offset, rect),
        cursor.width.min(cursor.height) / 2.0,
        css_color_or(&config.cursor_color, FALLBACK_CURSOR),
    );
}

fn render_feedback(painter: &egui::Painter, rect: egui::Rect, pad: &TouchPad, now_ms: u64) {
    let config = pad.config();
    let Some((size, color)) = feedback_style(config, rect.width()) else {
        return;
    };
    let feedback = &pad.visual().feedback;

    for gesture in Gesture::ALL {
        let opacity = feedback.opacity(gesture, now_ms);
        if opacity <= 0.0 {
            continue;
        }
        let Some(glyph) = resolve_icon(feedback_icon(gesture)) else {
            continue;
        };
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            glyph,
            egui::FontId::proportional(size),
            color.gamma_multiply(opacity),
        );
    }
}

// ===== Styling helpers =====

/// Glyph size and color of the feedback flash, or None when feedback is off.
///
/// Size defaults to the full pad width and color to the cursor color.
pub fn feedback_style(config: &PadConfig, pad_width: f32) -> Option<(f32, Color32)> {
    let feedback = config.visual_feedback.as_ref()?;
    let size = feedback.size.unwrap_or(Length::Percent(100.0)).resolve(pad_width);
    let cursor = css_color_or(&config.cursor_color, FALLBACK_CURSOR);
    let color = feedback
        .color
        .as_deref()
        .map_or(cursor, |color| css_color_or(color, cursor));
    Some((size, color))
}

fn rounding(radius: f32) -> egui::CornerRadius {
    egui::CornerRadius::same(clamp_radius(radius))
}

/// Corner squares round only the edge facing the pad center.
pub fn inner_corner_rounding(corner: CornerId, radius: f32) -> egui::CornerRadius {
    let r = clamp_radius(radius);
    let mut rounding = egui::CornerRadius::ZERO;
    match corner {
        CornerId::TopLeft => rounding.se = r,
        CornerId::TopRight => rounding.sw = r,
        CornerId::BottomLeft => rounding.ne = r,
        CornerId::BottomRight => rounding.nw = r,
    }
    rounding
}

fn clamp_radius(radius: f32) -> u8 {
    radius.round().clamp(0.0, u8::MAX as f32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtouchpad::VisualFeedbackConfig;

    #[test]
    fn test_feedback_style_defaults() {
        let mut config = PadConfig::default();
        assert_eq!(feedback_style(&config, 300.0), None);

        config.cursor_color = "#ff0000".to_string();
        config.visual_feedback = Some(VisualFeedbackConfig::default());
        assert_eq!(feedback_style(&config, 300.0), Some((300.0, Color32::from_rgb(255, 0, 0))));

        config.visual_feedback = Some(VisualFeedbackConfig {
            size: Some(Length::Px(64.0)),
            color: Some("#00ff00".to_string()),
        });
        assert_eq!(feedback_style(&config, 300.0), Some((64.0, Color32::from_rgb(0, 255, 0))));
    }

    #[test]
    fn test_inner_corner_rounding() {
        let top_left = inner_corner_rounding(CornerId::TopLeft, 12.0);
        assert_eq!((top_left.nw, top_left.se), (0, 12));

        let bottom_right = inner_corner_rounding(CornerId::BottomRight, 1_000.0);
        assert_eq!((bottom_right.nw, bottom_right.se), (255, 0));
    }
}
