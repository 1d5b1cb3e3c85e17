//! Presentation preferences
//!
//! Persisted as JSON in the working directory. Gameplay constants are not
//! settings; they live in `consts`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Renderer preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Draw the score readout on the top row
    pub show_scores: bool,
    /// Fill half-covered cells with full blocks (some fonts render half
    /// blocks poorly)
    pub high_contrast: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_scores: true,
            high_contrast: false,
        }
    }
}

impl Settings {
    /// Settings file name, looked up in the working directory
    const STORAGE_FILE: &'static str = "rally-pong-settings.json";

    /// Load settings, seeding the file with defaults on first run
    pub fn load() -> Self {
        let path = Path::new(Self::STORAGE_FILE);
        if !path.exists() {
            let defaults = Self::default();
            defaults.save();
            return defaults;
        }
        Self::load_from(path)
    }

    fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed settings ({err})");
                    Self::default()
                }
            },
            Err(err) => {
                log::info!("using default settings ({err})");
                Self::default()
            }
        }
    }

    /// Write settings back out; failures are logged, not fatal
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => match fs::write(Self::STORAGE_FILE, json) {
                Ok(()) => log::info!("settings saved"),
                Err(err) => log::warn!("could not save settings: {err}"),
            },
            Err(err) => log::warn!("could not serialize settings: {err}"),
        }
    }
}
