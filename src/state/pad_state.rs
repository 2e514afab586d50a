//! Touch pad state: the embedded pad, its clock and the path of its configuration.

use rtouchpad::{ActionEvent, PadConfig, TouchPad};
use std::path::PathBuf;
use std::time::Instant;

/// State of the embedded touch pad.
///
/// Responsibilities:
/// - Owning the [`TouchPad`] and the actions it has emitted but not yet logged
/// - Providing the monotonic millisecond clock the pad runs on
/// - Remembering where the current configuration came from
pub struct PadState {
    pad: TouchPad,
    /// Origin of the pad clock
    epoch: Instant,
    /// File the configuration was loaded from (None for the example or edits)
    config_path: Option<PathBuf>,
    /// True while the mouse holds a pad gesture
    mouse_down: bool,
}

impl std::fmt::Debug for PadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PadState")
            .field("geometry", &self.pad.geometry())
            .field("config_path", &self.config_path)
            .finish_non_exhaustive()
    }
}

impl Default for PadState {
    fn default() -> Self {
        Self::new(PadConfig::default())
    }
}

impl PadState {
    pub fn new(config: PadConfig) -> Self {
        Self {
            pad: TouchPad::new(config, Vec::new()),
            epoch: Instant::now(),
            config_path: None,
            mouse_down: false,
        }
    }

    // ===== Queries =====

    /// Milliseconds since the pad was created.
    pub fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    pub fn pad(&self) -> &TouchPad {
        &self.pad
    }

    pub fn config(&self) -> &PadConfig {
        self.pad.config()
    }

    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub fn mouse_down(&self) -> bool {
        self.mouse_down
    }

    // ===== Mutations =====

    pub fn pad_mut(&mut self) -> &mut TouchPad {
        &mut self.pad
    }

    pub fn set_mouse_down(&mut self, down: bool) {
        self.mouse_down = down;
    }

    /// Applies a configuration; staged by the pad if a gesture is in progress.
    pub fn apply_config(&mut self, config: PadConfig, path: Option<PathBuf>) {
        self.pad.set_config(config);
        self.config_path = path;
    }

    /// Takes the actions emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<ActionEvent> {
        std::mem::take(self.pad.sink_mut())
    }
}
