//! Calculator configuration
//!
//! Loaded from an optional JSON file. Every field has a default, so an empty
//! object (`{}`) is a complete configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        /// File that failed to load
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Config text is not valid JSON for [`CalculatorConfig`]
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Config parsed but holds an unusable value
    #[error("Invalid config value: {message}")]
    Invalid {
        /// Error message
        message: String,
    },
}

impl ConfigError {
    /// Create an invalid value error
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// How the web memory indicator is emphasised
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Opacity while memory holds a non-zero value
    pub active_opacity: f64,
    /// Opacity while memory is zero
    pub inactive_opacity: f64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            active_opacity: 1.0,
            inactive_opacity: 0.5,
        }
    }
}

impl IndicatorConfig {
    /// Opacity for the given activity state
    #[must_use]
    pub fn opacity(&self, active: bool) -> f64 {
        if active {
            self.active_opacity
        } else {
            self.inactive_opacity
        }
    }
}

/// Tracing subscriber settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
    /// Log file; without one no output is written
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file: None,
        }
    }
}

/// Terminal front-end settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Draw the clickable-looking keypad
    pub show_keypad: bool,
    /// Draw the key help line
    pub show_help: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            show_keypad: true,
            show_help: true,
        }
    }
}

/// Top-level calculator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Memory indicator emphasis
    pub indicator: IndicatorConfig,
    /// Logging
    pub logging: LoggingConfig,
    /// Terminal front-end
    pub tui: TuiConfig,
}

impl CalculatorConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set indicator opacities
    #[must_use]
    pub const fn with_indicator(mut self, indicator: IndicatorConfig) -> Self {
        self.indicator = indicator;
        self
    }

    /// Set the log filter directive
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.logging.filter = filter.into();
        self
    }

    /// Set the log file
    #[must_use]
    pub fn with_log_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.logging.file = Some(file.into());
        self
    }

    /// Set terminal front-end options
    #[must_use]
    pub const fn with_tui(mut self, tui: TuiConfig) -> Self {
        self.tui = tui;
        self
    }

    /// Parses and validates a JSON configuration
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Checks that opacities lie in `[0, 1]`
    pub fn validate(&self) -> ConfigResult<()> {
        for (name, value) in [
            ("indicator.active_opacity", self.indicator.active_opacity),
            ("indicator.inactive_opacity", self.indicator.inactive_opacity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::invalid(format!(
                    "{name} must be between 0 and 1, got {value}"
                )));
            }
        }
        Ok(())
    }
}
