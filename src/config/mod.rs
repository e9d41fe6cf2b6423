// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast configuration, including loading and saving
//! user preferences to a `toast.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//! use iced_toast::domain::ToastPosition;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.toast.position = Some(ToastPosition::Bottom);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::domain::{DecayInterval, ToastPosition};
use crate::error::Result;
use defaults::{
    DEFAULT_DECAY_SECS, FADE_IN_SECS, FADE_OUT_SECS, MAX_ANIMATION_SECS, SWIPE_OUT_SECS,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "toast.toml";
const APP_NAME: &str = "IcedToast";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub toast: ToastConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
}

/// Defaults applied to requests that do not override them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToastConfig {
    #[serde(default)]
    pub decay_secs: Option<f32>,
    #[serde(default)]
    pub position: Option<ToastPosition>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            decay_secs: Some(DEFAULT_DECAY_SECS),
            position: Some(ToastPosition::Top),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    #[serde(default)]
    pub fade_in_secs: Option<f32>,
    #[serde(default)]
    pub swipe_out_secs: Option<f32>,
    #[serde(default)]
    pub fade_out_secs: Option<f32>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            fade_in_secs: Some(FADE_IN_SECS),
            swipe_out_secs: Some(SWIPE_OUT_SECS),
            fade_out_secs: Some(FADE_OUT_SECS),
        }
    }
}

/// Resolved animation durations used by the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timings {
    pub fade_in: Duration,
    pub swipe_out: Duration,
    pub fade_out: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        AnimationConfig::default().timings()
    }
}

impl AnimationConfig {
    /// Resolves configured durations, falling back to defaults for missing
    /// or out-of-range values.
    #[must_use]
    pub fn timings(&self) -> Timings {
        Timings {
            fade_in: resolve_secs(self.fade_in_secs, FADE_IN_SECS),
            swipe_out: resolve_secs(self.swipe_out_secs, SWIPE_OUT_SECS),
            fade_out: resolve_secs(self.fade_out_secs, FADE_OUT_SECS),
        }
    }
}

impl ToastConfig {
    /// Returns the configured default decay, or the built-in default when the
    /// configured value is missing or not strictly positive.
    #[must_use]
    pub fn decay(&self) -> DecayInterval {
        match self.decay_secs.map(DecayInterval::from_secs_f32) {
            Some(Ok(decay)) => decay,
            Some(Err(err)) => {
                tracing::warn!(error = %err, "ignoring configured toast decay");
                DecayInterval::default()
            }
            None => DecayInterval::default(),
        }
    }

    #[must_use]
    pub fn position(&self) -> ToastPosition {
        self.position.unwrap_or_default()
    }
}

fn resolve_secs(value: Option<f32>, fallback: f32) -> Duration {
    let secs = match value {
        Some(v) if v.is_finite() && (0.0..=MAX_ANIMATION_SECS).contains(&v) => v,
        Some(v) => {
            tracing::warn!(value = v, fallback, "animation duration out of range");
            fallback
        }
        None => fallback,
    };
    Duration::from_secs_f32(secs)
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid toast config, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
