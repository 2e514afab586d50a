//! Config editor panel UI rendering
//!
//! A monospace JSON editor. Edits are applied by the application coordinator once
//! typing pauses; parse errors show up below the editor after a delay.

use crate::app::AppState;
use eframe::egui;
use egui::RichText;

/// Renders the configuration editor
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
/// * `now_ms` - Pad clock, for the debounce and error delay
pub fn render_config_panel(ui: &mut egui::Ui, state: &mut AppState, now_ms: u64) {
    ui.horizontal(|ui| {
        ui.heading("Configuration");
        if state.editor.has_pending_edit() {
            ui.label(RichText::new("editing…").color(state.theme.colors().text_dim));
        }
    });
    ui.separator();

    let error = state.editor.visible_error(now_ms).map(str::to_string);
    if let Some(err) = &error {
        ui.colored_label(state.theme.colors().error, err);
        ui.separator();
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let response = ui.add(
                egui::TextEdit::multiline(state.editor.text_mut())
                    .code_editor()
                    .desired_width(f32::INFINITY)
                    .desired_rows(30),
            );
            if response.changed() {
                state.editor.mark_edited(now_ms);
            }
        });
}
