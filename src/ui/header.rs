//! Header panel UI rendering
//!
//! Handles the top menu bar with config file controls, the log toggle and the theme selector.

use crate::app::AppState;
use eframe::egui;
use std::path::PathBuf;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a config file
    OpenConfigRequested(PathBuf),
    /// User clicked "Example"
    LoadExampleRequested,
    /// User clicked "Clear Log"
    ClearLogRequested,
}

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open Config").clicked() {
            let mut dialog = rfd::FileDialog::new().add_filter("Touch Pad Config", &["json"]);

            if let Some(dir) = state.pad.config_path().and_then(|p| p.parent()) {
                dialog = dialog.set_directory(dir);
            } else if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenConfigRequested(path));
            }
        }

        if ui.button("🎮 Example").clicked() {
            interaction = Some(HeaderInteraction::LoadExampleRequested);
        }

        ui.separator();

        let mut show_log = state.events.is_visible();
        if ui.checkbox(&mut show_log, "📜 Action Log").changed() {
            state.events.set_visible(show_log);
        }

        if ui.button("🗑 Clear Log").clicked() {
            interaction = Some(HeaderInteraction::ClearLogRequested);
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                    }
                });

            if old_theme != current_theme {
                state.theme.set_theme(&current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(state.theme.colors().error, err);
    }

    interaction
}
