// SPDX-License-Identifier: MPL-2.0
//! Overlay configuration, loaded from and saved to a `overlays.toml` file.
//!
//! # Configuration Sections
//!
//! - `[placement]` - Tooltip arrow and margin geometry
//! - `[toast]` - Toast positioning
//! - `[runtime]` - Timer polling
//!
//! Missing sections and fields fall back to [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use iced_overlays::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.placement.max_body_width = 280.0;
//! let path = std::env::temp_dir().join("overlays.toml");
//! config::save_to_path(&config, &path).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "overlays.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Constants used by the tooltip placement engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlacementConfig {
    /// Half-width of the arrow; the arrow is centered on the anchor by
    /// subtracting it from the anchor's half-width.
    pub arrow_size: f32,

    /// Widest the body may grow before it is clamped against the viewport.
    pub max_body_width: f32,

    /// Margin kept from the viewport edge once the body is clamped.
    pub side_margin: f32,

    /// Fixed visual inset of the arrow inside the body.
    pub arrow_inset: f32,

    /// Gap between the anchor and the tooltip container.
    pub anchor_gap: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            arrow_size: DEFAULT_ARROW_SIZE,
            max_body_width: DEFAULT_MAX_BODY_WIDTH,
            side_margin: DEFAULT_SIDE_MARGIN,
            arrow_inset: DEFAULT_ARROW_INSET,
            anchor_gap: DEFAULT_ANCHOR_GAP,
        }
    }
}

/// Toast settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Distance from the top edge for toasts requested at the top.
    #[serde(default = "default_toast_top_offset")]
    pub top_offset: f32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            top_offset: default_toast_top_offset(),
        }
    }
}

/// Timer polling settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuntimeConfig {
    /// Poll interval in milliseconds while an overlay timer is pending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_interval_ms: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: Some(DEFAULT_TICK_INTERVAL_MS),
        }
    }
}

impl RuntimeConfig {
    /// Poll interval, clamped to the supported range.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        let ms = self
            .tick_interval_ms
            .unwrap_or(DEFAULT_TICK_INTERVAL_MS)
            .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS);
        Duration::from_millis(ms)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Overlay configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub placement: PlacementConfig,

    #[serde(default)]
    pub toast: ToastConfig,

    #[serde(default)]
    pub runtime: RuntimeConfig,
}

fn default_toast_top_offset() -> f32 {
    DEFAULT_TOAST_TOP_OFFSET
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
/// the default config with a warning explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some(format!("Could not read {}: {}", path.display(), err)),
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

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
