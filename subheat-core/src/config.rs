//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/subheat/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/subheat/` (~/.config/subheat/)
//! - State/Logs: `$XDG_STATE_HOME/subheat/` (~/.local/state/subheat/)

use crate::activity::Period;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Heat-map defaults
    #[serde(default)]
    pub heatmap: HeatmapConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Defaults for the heat-map front-end
#[derive(Debug, Deserialize)]
pub struct HeatmapConfig {
    /// Period shown when none is given ("current" or a year)
    #[serde(default = "default_period")]
    pub default_period: String,

    /// Record file used when no input is given on the command line
    #[serde(default)]
    pub records_path: Option<PathBuf>,

    /// Five glyphs, one per intensity bucket from None to VeryHigh
    #[serde(default)]
    pub glyphs: Option<String>,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            default_period: default_period(),
            records_path: None,
            glyphs: None,
        }
    }
}

impl HeatmapConfig {
    /// Parse the configured default period.
    pub fn period(&self) -> Result<Period> {
        self.default_period.parse()
    }

    /// Validate configuration, returning error message if invalid
    pub fn validate(&self) -> Result<()> {
        self.period().map_err(|e| {
            Error::Config(format!("heatmap.default_period is not valid: {}", e))
        })?;

        if let Some(glyphs) = &self.glyphs {
            if glyphs.chars().count() != 5 {
                return Err(Error::Config(
                    "heatmap.glyphs must contain exactly 5 characters".to_string(),
                ));
            }
        }
        Ok(())
    }
}

fn default_period() -> String {
    "current".to_string()
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        config.heatmap.validate()?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/subheat/config.toml` (~/.config/subheat/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("subheat").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/subheat/` (~/.local/state/subheat/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("subheat")
    }
}
