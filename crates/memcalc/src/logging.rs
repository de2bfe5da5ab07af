//! Tracing subscriber setup for native front-ends
//!
//! A terminal UI owns stdout, so log output only ever goes to a file. With no
//! file configured the filter is still installed and events are dropped.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

/// Errors raised while installing the subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The configured filter directive does not parse
    #[error("Invalid log filter '{filter}': {message}")]
    Filter {
        /// Offending directive
        filter: String,
        /// Parser message
        message: String,
    },

    /// The log file could not be opened
    #[error("Failed to open log file {}: {source}", .path.display())]
    File {
        /// Log file path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// A global subscriber is already installed
    #[error("Failed to install subscriber: {0}")]
    Install(String),
}

/// Builds the filter: `RUST_LOG` when set and valid, otherwise `config.filter`
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(&config.filter).map_err(|e| LoggingError::Filter {
            filter: config.filter.clone(),
            message: e.to_string(),
        })
    })
}

/// Installs the global tracing subscriber described by `config`
pub fn init_tracing(config: &LoggingConfig) -> Result<(), LoggingError> {
    let env_filter = build_filter(config)?;

    if let Some(path) = &config.file {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| LoggingError::File {
                path: path.clone(),
                source,
            })?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LoggingError::File {
                path: path.clone(),
                source,
            })?;

        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .try_init()
            .map_err(|e| LoggingError::Install(e.to_string()))?;

        tracing::info!(path = %path.display(), "Logging initialized");
        return Ok(());
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_rejected() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LoggingConfig {
            filter: "memcalc=notalevel".into(),
            file: None,
        };
        let err = build_filter(&config).unwrap_err();
        assert!(matches!(err, LoggingError::Filter { .. }));
        assert!(err.to_string().contains("memcalc=notalevel"));
    }

    #[test]
    fn test_valid_filter_accepted() {
        let config = LoggingConfig {
            filter: "memcalc=debug,warn".into(),
            file: None,
        };
        assert!(build_filter(&config).is_ok());
    }

    #[test]
    fn test_unopenable_log_file() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending
        let config = LoggingConfig {
            filter: "info".into(),
            file: Some(dir.path().to_path_buf()),
        };
        let err = init_tracing(&config).unwrap_err();
        assert!(matches!(err, LoggingError::File { .. }));
    }
}
