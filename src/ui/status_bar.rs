//! Status bar UI rendering
//!
//! Shows the live gesture state of the pad and where its configuration came from.

use crate::app::AppState;
use crate::io::AsyncLoader;
use eframe::egui;
use egui::RichText;
use rtouchpad::HoldPhase;

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `loader` - Config loader, for the loading indicator
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, loader: &AsyncLoader) {
    let pad = state.pad.pad();
    let engine = pad.engine();
    let config = state.pad.config();

    ui.horizontal(|ui| {
        let gesture = if engine.in_gesture() { "touching" } else { "idle" };
        ui.label(RichText::new(gesture).strong());

        if let Some(direction) = engine.armed_direction() {
            let phase = if engine.is_repeating() {
                HoldPhase::Repeating
            } else {
                HoldPhase::Delay
            };
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(format!("hold {:?} ({:?})", direction, phase)).strong());
        }

        if engine.has_pending_tap() {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new("tap pending").strong());
        }

        if let Some(source) = state.events.last_source() {
            ui.label(RichText::new("|").strong());
            ui.label(format!("last: {}", source));
        }

        ui.label(RichText::new("|").strong());
        ui.label(format!(
            "swipe ≥ {}px | tap < {}px | double tap < {}ms",
            config.swipe_threshold, config.tap_threshold, config.tap_timeout
        ));

        ui.label(RichText::new("|").strong());
        match state.pad.config_path() {
            Some(path) => ui.label(path.display().to_string()),
            None => ui.label("unsaved config"),
        };

        if loader.is_loading() {
            ui.label(RichText::new("|").strong());
            ui.spinner();
            ui.label("loading…");
        }
    });
}
