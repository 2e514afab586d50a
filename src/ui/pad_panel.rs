//! Pad panel UI rendering
//!
//! Lays out the square pad in the central area, forwards input to it and paints it.

use crate::app::AppState;
use crate::rendering::pad_renderer::render_pad;
use crate::ui::input::pad_input_handler::handle_pad_input;
use crate::utils::extent_of;
use eframe::egui;

/// Smallest pad side in points; below this the pad overflows the panel.
const MIN_PAD_SIDE: f32 = 120.0;
const PAD_MARGIN: f32 = 16.0;

/// Renders the pad centered in the remaining space
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
/// * `now_ms` - Pad clock
pub fn render_pad_panel(ui: &mut egui::Ui, state: &mut AppState, now_ms: u64) {
    let area = ui.available_rect_before_wrap().shrink(PAD_MARGIN);
    let side = area.width().min(area.height()).max(MIN_PAD_SIDE);
    let rect = egui::Rect::from_center_size(area.center(), egui::vec2(side, side));

    // Claim the area so drags on the pad do not reach other widgets.
    ui.allocate_rect(rect, egui::Sense::click_and_drag());

    state.pad.pad_mut().set_container(extent_of(rect));
    handle_pad_input(ui.ctx(), rect, &mut state.pad);

    let pad = state.pad.pad();
    render_pad(&ui.painter_at(rect), rect, pad, now_ms, state.theme.colors().border);

    if pad.visual().is_animating(now_ms) {
        ui.ctx().request_repaint();
    }
}
