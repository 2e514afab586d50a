//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, config editor, pad, action log, status) and
//! manages their layout.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::ui::{config_panel, event_log_panel, header, pad_panel, status_bar};
use eframe::egui;

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open a config file
    OpenConfigRequested(std::path::PathBuf),
    /// User requested the bundled example config
    LoadExampleRequested,
    /// User requested to clear the action log
    ClearLogRequested,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    ///
    /// # Returns
    /// The user interaction, if any, and the current width of the editor panel
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
        editor_width: f32,
        now_ms: u64,
    ) -> (Option<PanelInteraction>, f32) {
        let mut interaction: Option<PanelInteraction> = None;

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenConfigRequested(path) => {
                        PanelInteraction::OpenConfigRequested(path)
                    }
                    header::HeaderInteraction::LoadExampleRequested => PanelInteraction::LoadExampleRequested,
                    header::HeaderInteraction::ClearLogRequested => PanelInteraction::ClearLogRequested,
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state, loader);
        });

        // Action log above status panel
        if state.events.is_visible() {
            egui::TopBottomPanel::bottom("event_log_panel")
                .default_height(ctx.content_rect().height() * 0.25)
                .resizable(true)
                .show(ctx, |ui| {
                    egui::Frame::default().inner_margin(4.0).show(ui, |ui| {
                        event_log_panel::render_event_log_panel(ui, state);
                    });
                });
        }

        // Left panel: config editor
        let editor_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.panel_fill);

        let editor = egui::SidePanel::left("config_panel")
            .default_width(editor_width)
            .resizable(true)
            .frame(editor_frame)
            .show(ctx, |ui| {
                config_panel::render_config_panel(ui, state, now_ms);
            });

        // Remaining space: the pad
        let pad_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.extreme_bg_color);

        egui::CentralPanel::default().frame(pad_frame).show(ctx, |ui| {
            pad_panel::render_pad_panel(ui, state, now_ms);
        });

        (interaction, editor.response.rect.width())
    }
}
