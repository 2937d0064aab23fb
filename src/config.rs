//! Configuration loading for the `roadsign` CLI.
//!
//! Configuration is loaded from TOML files with the following resolution order:
//! 1. `--config <path>` (CLI flag)
//! 2. `~/.roadsign/config.toml` (user)
//! 3. `/etc/roadsign/config.toml` (system)
//!
//! Without any file the built-in defaults apply.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::classify::ScanOptions;
use crate::providers::DEFAULT_ENDPOINT;
use crate::{Result, RoadsignError};

/// CLI configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub recognizer: RecognizerConfig,
    #[serde(default)]
    pub scanner: ScannerConfig,
}

/// Digit-recognition service settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RecognizerConfig {
    /// Service endpoint (default: the deployed service).
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// Sign model thresholds.
#[derive(Debug, Clone, Deserialize)]
pub struct ScannerConfig {
    /// IoU threshold (default: 0.5).
    #[serde(default = "default_threshold")]
    pub iou_threshold: f64,
    /// Confidence threshold (default: 0.5).
    #[serde(default = "default_threshold")]
    pub confidence_threshold: f64,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            iou_threshold: default_threshold(),
            confidence_threshold: default_threshold(),
        }
    }
}

fn default_threshold() -> f64 {
    0.5
}

impl ScannerConfig {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::new()
            .iou_threshold(self.iou_threshold)
            .confidence_threshold(self.confidence_threshold)
    }
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// An explicit path must exist. Without one, the first existing user or
    /// system file is used, falling back to defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Config::default()),
        }
    }

    /// Parse a config file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            RoadsignError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            RoadsignError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })?;
        config.scanner.scan_options().validate()?;
        Ok(config)
    }

    /// Resolve the config file path.
    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(RoadsignError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        // User config
        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".roadsign").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        // System config
        let system_config = PathBuf::from("/etc/roadsign/config.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }
}
