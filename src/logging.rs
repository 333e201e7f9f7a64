//! Structured logging setup.
//!
//! Library code only emits `tracing` events; binaries and test harnesses call
//! [`init_logging`] once to install a subscriber.

use std::env;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter directive.
pub const LOG_FILTER_ENV: &str = "TASK_MANAGER_LOG";

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "TASK_MANAGER_LOG_FORMAT";

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    /// Parses a format name, falling back to text for anything but `json`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, for example `info` or `task_manager=debug`.
    pub filter: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

impl LoggingConfig {
    /// Reads the configuration from [`LOG_FILTER_ENV`] and [`LOG_FORMAT_ENV`],
    /// using defaults for unset variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_values(env::var(LOG_FILTER_ENV).ok(), env::var(LOG_FORMAT_ENV).ok())
    }

    fn from_values(filter: Option<String>, format: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            filter: filter
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.filter),
            format: format.map_or(defaults.format, |value| LogFormat::from_name(&value)),
        }
    }
}

/// Errors raised while installing the log subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter '{filter}': {reason}")]
    InvalidFilter {
        /// Rejected directive.
        filter: String,
        /// Parser message.
        reason: String,
    },

    /// A global subscriber is already installed.
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialised,
}

/// Installs the global `tracing` subscriber.
///
/// # Errors
///
/// Returns [`LoggingError::InvalidFilter`] for an unparsable directive and
/// [`LoggingError::AlreadyInitialised`] when a subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_new(&config.filter).map_err(|err| LoggingError::InvalidFilter {
            filter: config.filter.clone(),
            reason: err.to_string(),
        })?;

    let builder = fmt().with_env_filter(filter).with_target(true);
    let installed = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|_| LoggingError::AlreadyInitialised)?;

    tracing::debug!(filter = %config.filter, format = ?config.format, "logging initialised");
    Ok(())
}
