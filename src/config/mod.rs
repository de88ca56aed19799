// SPDX-License-Identifier: MPL-2.0
//! Toaster settings stored in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[layout]` - Where the toast stack sits and in which order it reads
//! - `[motion]` - Transition length and the demo's default toast lifetime
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasted::config::{self, Edge};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.layout.align = Edge::End;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Start or end of an axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Edge {
    #[default]
    Start,
    End,
}

impl std::str::FromStr for Edge {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "start" => Ok(Edge::Start),
            "end" => Ok(Edge::End),
            other => Err(format!("invalid edge: {other} (expected start or end)")),
        }
    }
}

/// Placement of the toast stack. These are layout hints only; they never
/// change the order the store keeps toasts in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LayoutConfig {
    /// Horizontal placement.
    #[serde(default)]
    pub align: Edge,

    /// Vertical placement.
    #[serde(default)]
    pub justify: Edge,

    /// Show the newest toast first.
    #[serde(default)]
    pub reverse: bool,
}

/// Animation and lifetime settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MotionConfig {
    /// Enter/exit transition length in milliseconds.
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,

    /// Lifetime given to toasts the demo emits, in milliseconds.
    #[serde(default = "default_toast_duration_ms")]
    pub default_duration_ms: i64,
}

impl MotionConfig {
    /// Transition length, capped at [`MAX_TRANSITION_MS`].
    #[must_use]
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms.min(MAX_TRANSITION_MS))
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            transition_ms: DEFAULT_TRANSITION_MS,
            default_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub motion: MotionConfig,
}

fn default_transition_ms() -> u64 {
    DEFAULT_TRANSITION_MS
}

fn default_toast_duration_ms() -> i64 {
    DEFAULT_TOAST_DURATION_MS
}

// =============================================================================
// Load Functions
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("ignoring {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some(format!("Could not read {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
