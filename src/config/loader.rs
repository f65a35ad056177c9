//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Default thumbnail target in the sprite gallery.
pub const DEFAULT_THUMBNAIL_SIZE: f32 = 100.0;
/// Default target for the enlarged preview in the detail panel.
pub const DEFAULT_DETAIL_PREVIEW_SIZE: f32 = 256.0;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/devoverlay/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Console window visible at startup.
    #[serde(default)]
    pub show_console: Option<bool>,

    /// Inspector window visible at startup.
    #[serde(default)]
    pub show_inspector: Option<bool>,

    /// UI demo window visible at startup.
    #[serde(default)]
    pub show_demo: Option<bool>,

    /// Keep the console pinned to the newest record.
    #[serde(default)]
    pub auto_scroll: Option<bool>,

    /// Full-size tooltip preview when hovering a thumbnail.
    #[serde(default)]
    pub hover_preview: Option<bool>,

    /// Outline the selected sprite on screen.
    #[serde(default)]
    pub highlight: Option<bool>,

    /// Longest side of a gallery thumbnail.
    #[serde(default)]
    pub thumbnail_size: Option<f32>,

    /// Longest side of the detail panel preview.
    #[serde(default)]
    pub detail_preview_size: Option<f32>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Console window open at startup.
    pub show_console: bool,
    /// Inspector window open at startup.
    pub show_inspector: bool,
    /// UI demo window open at startup.
    pub show_demo: bool,
    /// Keep the console pinned to the newest record.
    pub auto_scroll: bool,
    /// Show an enlarged tooltip over hovered thumbnails.
    pub hover_preview: bool,
    /// Outline the selected sprite on the host surface.
    pub highlight: bool,
    /// Longest side of a gallery thumbnail, in UI units.
    pub thumbnail_size: f32,
    /// Longest side of the detail preview, in UI units.
    pub detail_preview_size: f32,
    /// Log file path for the terminal shell.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            show_console: false,
            show_inspector: true,
            show_demo: false,
            auto_scroll: true,
            hover_preview: true,
            highlight: true,
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
            detail_preview_size: DEFAULT_DETAIL_PREVIEW_SIZE,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/devoverlay/devoverlay.log` on Unix-like systems,
/// or the platform state directory elsewhere. Falls back to the current
/// directory if no state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("devoverlay").join("devoverlay.log")
    } else {
        PathBuf::from("devoverlay.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/devoverlay/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if no config directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("devoverlay").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `DEVOVERLAY_CONFIG` environment variable
/// 3. Default path `~/.config/devoverlay/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("DEVOVERLAY_CONFIG") {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(
                "DEVOVERLAY_CONFIG is set but empty".to_string(),
            ));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Parse a boolean-ish environment value. Unrecognized values are ignored.
fn parse_env_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `DEVOVERLAY_AUTO_SCROLL`: Override auto-scroll
/// - `DEVOVERLAY_HIGHLIGHT`: Override highlight
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(value) = env_bool("DEVOVERLAY_AUTO_SCROLL") {
        config.auto_scroll = value;
    }
    if let Some(value) = env_bool("DEVOVERLAY_HIGHLIGHT") {
        config.highlight = value;
    }
    config
}

fn env_bool(name: &str) -> Option<bool> {
    let raw = std::env::var(name).ok()?;
    let parsed = parse_env_bool(&raw);
    if parsed.is_none() {
        tracing::warn!(variable = name, value = %raw, "ignoring unrecognized boolean");
    }
    parsed
}

/// Sizes must be positive and finite; anything else falls back to `default`.
fn valid_size(value: Option<f32>, default: f32) -> f32 {
    match value {
        Some(size) if size.is_finite() && size > 0.0 => size,
        Some(size) => {
            tracing::warn!(size, default, "ignoring invalid preview size");
            default
        }
        None => default,
    }
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        show_console: config.show_console.unwrap_or(defaults.show_console),
        show_inspector: config.show_inspector.unwrap_or(defaults.show_inspector),
        show_demo: config.show_demo.unwrap_or(defaults.show_demo),
        auto_scroll: config.auto_scroll.unwrap_or(defaults.auto_scroll),
        hover_preview: config.hover_preview.unwrap_or(defaults.hover_preview),
        highlight: config.highlight.unwrap_or(defaults.highlight),
        thumbnail_size: valid_size(config.thumbnail_size, defaults.thumbnail_size),
        detail_preview_size: valid_size(config.detail_preview_size, defaults.detail_preview_size),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Flags explicitly set on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    /// `--console`.
    pub show_console: Option<bool>,
    /// `--demo`.
    pub show_demo: Option<bool>,
    /// `--no-auto-scroll` sets this to `Some(false)`.
    pub auto_scroll: Option<bool>,
    /// `--log-file`.
    pub log_file_path: Option<PathBuf>,
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(show) = cli.show_console {
        config.show_console = show;
    }
    if let Some(show) = cli.show_demo {
        config.show_demo = show;
    }
    if let Some(auto_scroll) = cli.auto_scroll {
        config.auto_scroll = auto_scroll;
    }
    if let Some(path) = cli.log_file_path {
        config.log_file_path = path;
    }
    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
