// SPDX-License-Identifier: GPL-3.0-only

//! User configuration with JSON persistence.
//!
//! The recognized options are the start/stop keybind, the keyboard language
//! and the typing speed multiplier. The config lives at
//! `<config dir>/gridtype/config.json`; loading falls back to built-in
//! defaults on any error and is never fatal, saving reports its error but
//! leaves the in-memory config usable.

use crate::app_settings;
use crate::layout::Language;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration that persists between application runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Global start/stop key name (owned by the hotkey surface, carried
    /// here so external frontends share one config file).
    pub keybind: String,
    /// Keyboard language variant.
    pub language: Language,
    /// Typing speed multiplier within [`app_settings::SPEED_RANGE`].
    pub typing_speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keybind: app_settings::DEFAULT_KEYBIND.to_string(),
            language: Language::default(),
            typing_speed: app_settings::DEFAULT_SPEED,
        }
    }
}

impl Config {
    /// Default config file path under the platform config directory, or
    /// `None` when no config directory is available.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(app_settings::CONFIG_DIR).join(app_settings::CONFIG_FILE))
    }

    /// Loads the config from the default location, falling back to defaults
    /// when the file is missing or unreadable.
    #[must_use]
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::warn!("no config directory available, using defaults");
                Self::default()
            }
        }
    }

    /// Loads the config from `path`, falling back to defaults on any error.
    ///
    /// Out-of-range speed values are clamped into the configurable range so
    /// a hand-edited file cannot produce degenerate timing.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        let config = match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<Self>(&contents) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read config, using defaults");
                Self::default()
            }
        };
        config.sanitized()
    }

    /// Saves the config to the default location.
    pub fn save(&self) -> std::io::Result<()> {
        let path = Self::default_path().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "no config directory available")
        })?;
        self.save_to(&path)
    }

    /// Saves the config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.clone().sanitized())
            .map_err(std::io::Error::other)?;
        fs::write(path, json)?;
        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Returns the config with the speed clamped into the valid range.
    #[must_use]
    fn sanitized(mut self) -> Self {
        let (min, max) = app_settings::SPEED_RANGE;
        if !self.typing_speed.is_finite() {
            self.typing_speed = app_settings::DEFAULT_SPEED;
        }
        self.typing_speed = self.typing_speed.clamp(min, max);
        if self.keybind.is_empty() {
            self.keybind = app_settings::DEFAULT_KEYBIND.to_string();
        }
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
