//! Optional JSON config file for the CLI.
//!
//! Every field has a default, so `{}` is a valid config and a partial file
//! only overrides what it names. Command-line flags win over the file.

use crate::error::CliError;
use colorgear_core::wheel::DEFAULT_WHEEL_SIZE;
use colorgear_core::ColorFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Log verbosity accepted in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// CLI settings loaded from `--config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Format assumed for color input when `--from` is not given.
    pub default_format: ColorFormat,
    /// Edge length of the color wheel in pixels.
    pub wheel_size: u32,
    /// Log level used when neither `-v` nor `RUST_LOG` is set.
    pub log_level: LogLevel,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_format: ColorFormat::Hex,
            wheel_size: DEFAULT_WHEEL_SIZE,
            log_level: LogLevel::default(),
        }
    }
}

impl CliConfig {
    /// Reads and parses a JSON config file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|e| {
            CliError::Io(format!("cannot read config {}: {e}", path.display()))
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}
