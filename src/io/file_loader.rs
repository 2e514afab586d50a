//! Blocking configuration file loading and the shared loading flag.

use anyhow::{Context, Result};
use rtouchpad::PadConfig;
use std::path::{Path, PathBuf};

/// Holds the state of an async file loading operation.
///
/// Only the in_progress flag is shared; results come through a channel.
pub struct LoadingState {
    /// True while a file is being read on the background thread
    pub in_progress: bool,
    /// Number of the most recently started load; older loads may not clear the flag
    pub generation: u64,
}

impl LoadingState {
    pub fn new() -> Self {
        Self {
            in_progress: false,
            generation: 0,
        }
    }
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}

/// A configuration file, both as text for the editor and parsed.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub text: String,
    pub config: PadConfig,
    pub path: PathBuf,
}

/// Reads and parses a JSON configuration file.
pub fn load_config_file(path: &Path) -> Result<LoadedConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    let config = PadConfig::from_json_str(&text)
        .with_context(|| format!("in config file '{}'", path.display()))?;

    Ok(LoadedConfig {
        text,
        config,
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn test_load_keeps_original_text() {
        let path = env::temp_dir().join("touchpad_demo_loader_ok.json");
        let text = "{\n  \"tap_threshold\": 8\n}\n";
        fs::write(&path, text).unwrap();

        let loaded = load_config_file(&path).unwrap();
        assert_eq!(loaded.text, text);
        assert_eq!(loaded.config.tap_threshold, 8.0);
        assert_eq!(loaded.path, path);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = env::temp_dir().join("touchpad_demo_loader_missing.json");
        let _ = fs::remove_file(&path);

        let err = load_config_file(&path).unwrap_err();
        assert!(err.to_string().contains("touchpad_demo_loader_missing.json"));
    }
}
