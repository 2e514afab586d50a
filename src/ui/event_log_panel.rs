//! Action log panel UI rendering
//!
//! Lists emitted actions newest first, as they would be handed to the dashboard.

use crate::app::AppState;
use crate::utils::{format_timestamp, summarize_json};
use eframe::egui;
use egui::RichText;

const PAYLOAD_PREVIEW_CHARS: usize = 120;

/// Renders the action log
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_event_log_panel(ui: &mut egui::Ui, state: &AppState) {
    let colors = state.theme.colors();

    ui.horizontal(|ui| {
        ui.heading("Actions");
        ui.label(
            RichText::new(format!("{} shown, {} emitted", state.events.len(), state.events.total()))
                .color(colors.text_dim),
        );
    });
    ui.separator();

    if state.events.is_empty() {
        ui.label(RichText::new("Tap, swipe or hold on the pad.").color(colors.text_dim));
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("action_log")
                .num_columns(4)
                .striped(true)
                .show(ui, |ui| {
                    for entry in state.events.entries().rev() {
                        ui.label(RichText::new(format!("#{}", entry.seq)).monospace().color(colors.text_dim));
                        ui.label(RichText::new(format_timestamp(entry.event.t_ms)).monospace());
                        ui.label(RichText::new(entry.event.source.to_string()).strong().color(colors.accent));
                        ui.label(
                            RichText::new(summarize_json(&entry.event.to_hass_payload(), PAYLOAD_PREVIEW_CHARS))
                                .monospace(),
                        );
                        ui.end_row();
                    }
                });
        });
}
