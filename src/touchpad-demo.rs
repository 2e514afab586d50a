//! Touch Pad Demo GUI Application
//!
//! An interactive shell around the `rtouchpad` gesture engine using the egui framework.
//! The demo features:
//! - A square touch pad driven by mouse or touch input
//! - Live JSON configuration editing with debounced apply

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! - Asynchronous config file loading with a loading indicator
//! - A log of every emitted action
//! - Multiple theme support with persistent preferences
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `presentation/` - Icon resolution (separated from pad logic)
//! - `io/` - Config file loading
//! - `utils/` - Utility functions for formatting and geometry
//! - `ui/` - UI panel rendering, interaction, and input handling
//! - `rendering/` - Low-level painting of the pad
//! - `state/` - State management for the pad, editor and log

use eframe::egui;
use std::path::PathBuf;
use std::time::Duration;

mod utils;
mod presentation;
mod io;
mod app;
mod rendering;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, DemoPreferences, SettingsCoordinator, ThemeCoordinator};
use io::AsyncLoader;
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes and launches the touch pad demo.
fn main() -> eframe::Result {
    env_logger::init();

    // Parse command-line arguments to check for an initial config to load
    let initial_config = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("Touch Pad Demo"),
        ..Default::default()
    };

    eframe::run_native(
        "Touch Pad Demo",
        options,
        Box::new(move |cc| Ok(Box::new(TouchPadDemoApp::new(cc, initial_config)))),
    )
}

/// The main touch pad demo application.
///
/// Most functionality is delegated to coordinators:
/// - `ApplicationCoordinator` handles config loading, editing and the pad clock
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct TouchPadDemoApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous config loader
    loader: AsyncLoader,
    /// Layout preferences, saved on shutdown
    preferences: DemoPreferences,
    /// Optional config file to load on first frame
    pending_config_load: Option<PathBuf>,
}

impl TouchPadDemoApp {
    /// Creates the demo with theme and preferences loaded from persistent storage.
    ///
    /// Starts from the bundled example, replaced by the command-line config once it
    /// has loaded.
    fn new(cc: &eframe::CreationContext, initial_config: Option<PathBuf>) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let preferences = SettingsCoordinator::load_preferences(cc.storage);

        let mut state = AppState::with_theme(&theme_name);
        state.events.set_visible(preferences.show_event_log);
        ApplicationCoordinator::load_example(&mut state);

        Self {
            state,
            loader: AsyncLoader::new(),
            preferences,
            pending_config_load: initial_config,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::OpenConfigRequested(path) => {
                ApplicationCoordinator::open_config_file(&mut self.state, &mut self.loader, path, ctx);
            }
            PanelInteraction::LoadExampleRequested => {
                ApplicationCoordinator::load_example(&mut self.state);
            }
            PanelInteraction::ClearLogRequested => {
                ApplicationCoordinator::clear_log(&mut self.state);
            }
        }
    }

    fn sync_preferences(&mut self, editor_width: f32) {
        self.preferences.show_event_log = self.state.events.is_visible();
        self.preferences.editor_width = editor_width;
    }
}

impl eframe::App for TouchPadDemoApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_preferences(storage, &self.preferences);
    }

    /// Main update loop.
    ///
    /// 1. Check for async loading completion
    /// 2. Apply theme
    /// 3. Load initial config if one is pending
    /// 4. Render all panels, forwarding pad input
    /// 5. Handle panel interactions
    /// 6. Fire due timers, collect emitted actions, schedule the next wakeup
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(path) = self.pending_config_load.take() {
            ApplicationCoordinator::open_config_file(&mut self.state, &mut self.loader, path, ctx);
        }

        let now_ms = self.state.pad.now_ms();
        let (interaction, editor_width) = PanelManager::render_all_panels(
            ctx,
            &mut self.state,
            &self.loader,
            self.preferences.editor_width,
            now_ms,
        );
        if let Some(interaction) = interaction {
            self.handle_panel_interaction(interaction, ctx);
        }
        self.sync_preferences(editor_width);

        let now_ms = self.state.pad.now_ms();
        ApplicationCoordinator::tick(&mut self.state, now_ms);

        // Timers only fire when polled, so wake up for the next one.
        if let Some(wakeup) = self.state.next_wakeup(now_ms) {
            ctx.request_repaint_after(Duration::from_millis(wakeup.saturating_sub(now_ms)));
        }
    }
}
