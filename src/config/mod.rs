// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[note]` - Auto-hide duration and haptic feedback
//! - `[appearance]` - Card corner radius and background color
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument, set via [`init_cli_override`]
//! 3. Set `SNACKNOTE_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use snacknote::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.note.duration_ms = 5000;
//!
//! config::save_with_override(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::note::NoteConfig;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const APP_NAME: &str = "SnackNote";
const CONFIG_FILE: &str = "settings.toml";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "SNACKNOTE_CONFIG_DIR";

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

// =============================================================================
// Section Structs
// =============================================================================

/// Note timing and feedback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoteSection {
    /// Time a note stays visible. Zero or negative hides right away.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: i64,

    /// Whether showing a note vibrates the device.
    #[serde(default = "default_vibration")]
    pub vibration: bool,
}

impl Default for NoteSection {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            vibration: DEFAULT_VIBRATION,
        }
    }
}

/// Card appearance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceSection {
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f32,

    /// Background color as `#RRGGBB`.
    #[serde(default = "default_background")]
    pub background: String,
}

impl Default for AppearanceSection {
    fn default() -> Self {
        Self {
            corner_radius: DEFAULT_CORNER_RADIUS,
            background: default_background(),
        }
    }
}

impl AppearanceSection {
    /// Corner radius clamped to the supported range.
    #[must_use]
    pub fn clamped_corner_radius(&self) -> f32 {
        self.corner_radius
            .clamp(MIN_CORNER_RADIUS, MAX_CORNER_RADIUS)
    }

    /// Parsed background color, white if the value is malformed.
    #[must_use]
    pub fn background_color(&self) -> Color {
        parse_hex_color(&self.background).unwrap_or_else(|| {
            tracing::warn!(value = %self.background, "invalid background color, using white");
            Color::WHITE
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub note: NoteSection,
    #[serde(default)]
    pub appearance: AppearanceSection,
}

impl Config {
    /// Settings for a note state built from this configuration.
    #[must_use]
    pub fn note_config(&self) -> NoteConfig {
        NoteConfig::new(self.note.duration_ms, self.note.vibration)
    }
}

fn default_duration_ms() -> i64 {
    i64::try_from(DEFAULT_DURATION_MS).unwrap_or(i64::MAX)
}

fn default_vibration() -> bool {
    DEFAULT_VIBRATION
}

fn default_corner_radius() -> f32 {
    DEFAULT_CORNER_RADIUS
}

fn default_background() -> String {
    DEFAULT_BACKGROUND.to_string()
}

/// Parses `#RRGGBB` (the leading `#` is optional).
#[must_use]
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

// =============================================================================
// Path Resolution
// =============================================================================

/// Records the `--config-dir` CLI argument. Only the first call has an effect.
pub fn init_cli_override(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("config dir override already initialized, ignoring");
    }
}

/// Returns the settings file path, honoring overrides in priority order.
#[must_use]
pub fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    base_dir
        .or_else(|| CLI_CONFIG_DIR.get().and_then(Clone::clone))
        .or_else(|| std::env::var_os(ENV_CONFIG_DIR).map(PathBuf::from))
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_NAME)))
        .map(|dir| dir.join(CONFIG_FILE))
}

// =============================================================================
// Load Functions
// =============================================================================

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
                    return (
                        Config::default(),
                        Some(format!("failed to load {}: {err}", path.display())),
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

/// Saves the configuration, to `base_dir` when given or else the resolved
/// config directory.
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
