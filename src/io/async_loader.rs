//! Asynchronous configuration file loading.
//!
//! Configuration files are read on a background thread so a slow disk (or a network
//! mount) never stalls the pad, whose timers are driven by the frame loop.

use crate::io::file_loader::{load_config_file, LoadedConfig};
use crate::io::LoadingState;
use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;

/// Result of a completed loading operation.
pub enum LoadResult {
    /// The file was read and parsed
    Success(LoadedConfig),
    /// Reading or parsing failed
    Error(String),
    /// No result available (still loading or nothing requested)
    None,
}

/// Manages background loading of configuration files.
pub struct AsyncLoader {
    /// Shared loading state flag
    loading_state: Arc<Mutex<LoadingState>>,
    /// Channel receiver for loading results
    loading_receiver: Option<Receiver<Result<LoadedConfig, String>>>,
}

impl AsyncLoader {
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            loading_receiver: None,
        }
    }

    /// Checks if a loading operation is currently in progress.
    pub fn is_loading(&self) -> bool {
        self.loading_state
            .lock()
            .map(|state| state.in_progress)
            .unwrap_or(false)
    }

    /// Starts loading a configuration file on a background thread.
    ///
    /// Call `check_completion()` once per frame to pick up the result.
    ///
    /// # Arguments
    /// * `path` - Path of the JSON configuration file
    /// * `ctx` - egui context, repainted when loading completes
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);
        let generation = begin_load(&self.loading_state);

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();

        thread::spawn(move || {
            log::debug!("loading config from {}", path.display());
            let result = load_config_file(&path).map_err(|e| format!("{:#}", e));

            // The receiver is gone if another load replaced this one.
            let _ = sender.send(result);
            finish_load(&loading_state, generation);
            ctx_handle.request_repaint();
        });
    }

    /// Returns the result of the background load if it has completed.
    pub fn check_completion(&mut self) -> LoadResult {
        let Some(receiver) = &self.loading_receiver else {
            return LoadResult::None;
        };
        let Ok(result) = receiver.try_recv() else {
            return LoadResult::None;
        };

        self.loading_receiver = None;
        match result {
            Ok(loaded) => LoadResult::Success(loaded),
            Err(error_msg) => LoadResult::Error(error_msg),
        }
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Marks a new load as running and returns its generation.
fn begin_load(state: &Mutex<LoadingState>) -> u64 {
    match state.lock() {
        Ok(mut state) => {
            state.generation += 1;
            state.in_progress = true;
            state.generation
        }
        Err(_) => 0,
    }
}

/// Clears the flag unless a newer load has started since `generation`.
fn finish_load(state: &Mutex<LoadingState>, generation: u64) {
    if let Ok(mut state) = state.lock() {
        if state.generation == generation {
            state.in_progress = false;
        }
    }
}
