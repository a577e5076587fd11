// ABOUTME: Structured logging setup built on the tracing ecosystem
// ABOUTME: Environment-driven level/format selection with JSON output for production
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structured logging configuration
//!
//! Log level and format come from the environment (`LOG_LEVEL`,
//! `LOG_FORMAT`) so deployments can switch to JSON output without a
//! rebuild. Noisy HTTP internals are filtered down regardless of the
//! application level.

use crate::constants::service_names;
use crate::errors::{AppError, AppResult};
use std::env;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Machine-readable JSON, one object per line
    Json,
    /// Human-readable multi-line output for development
    Pretty,
    /// Single-line human-readable output
    Compact,
}

impl LogFormat {
    fn from_env() -> Self {
        match env::var("LOG_FORMAT").unwrap_or_default().to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

/// Logging configuration assembled from the environment
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Application log level ("trace" through "error")
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include file/line in log records
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Read logging settings from the environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: LogFormat::from_env(),
            include_location: env::var("LOG_INCLUDE_LOCATION")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    /// Install the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns a config error when the level directive does not parse or
    /// a subscriber is already installed.
    pub fn init(&self) -> AppResult<()> {
        let directives = format!(
            "{level},hyper=warn,tower_http=info,feast_planner={level}",
            level = self.level
        );
        let filter = EnvFilter::try_new(&directives)
            .map_err(|e| AppError::config(format!("Invalid log level '{}': {e}", self.level)))?;

        let registry = tracing_subscriber::registry().with(filter);
        let result = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location),
                )
                .try_init(),
        };
        result.map_err(|e| AppError::config(format!("Failed to install subscriber: {e}")))
    }
}

/// Initialize logging from the environment and announce startup
///
/// # Errors
///
/// Returns a config error when initialization fails.
pub fn init_from_env() -> AppResult<()> {
    let config = LoggingConfig::from_env();
    config.init()?;
    info!(
        service = service_names::FEAST_PLANNER_SERVER,
        version = env!("CARGO_PKG_VERSION"),
        level = %config.level,
        format = ?config.format,
        "Logging initialized"
    );
    Ok(())
}
