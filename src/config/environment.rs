// ABOUTME: Environment-driven server configuration loaded at startup
// ABOUTME: Reads port, host, and environment name with sensible defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Server configuration from environment variables
//!
//! The server follows an environment-only configuration approach: every
//! knob is an environment variable with a default, so a bare `cargo run`
//! works and deployments configure through their orchestrator.

use crate::constants::defaults;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;

/// Deployment environment the server believes it is running in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    Development,
    /// CI and integration testing
    Testing,
    /// Live deployment
    Production,
}

impl Environment {
    /// Parse from the conventional environment-variable values
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value {
            "production" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Lowercase name for logging
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Testing => "testing",
            Self::Production => "production",
        }
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the HTTP server binds to
    pub http_port: u16,
    /// Host/interface the HTTP server binds to
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            host: defaults::HOST.to_owned(),
            environment: Environment::Development,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Recognized variables: `HTTP_PORT`, `HOST`, `ENVIRONMENT`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `HTTP_PORT` is set but not a
    /// valid port number.
    pub fn from_env() -> AppResult<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|e| AppError::config(format!("Invalid HTTP_PORT '{raw}': {e}")))?,
            Err(_) => defaults::HTTP_PORT,
        };

        let host = env::var("HOST").unwrap_or_else(|_| defaults::HOST.to_owned());

        let environment = Environment::from_str_or_default(
            &env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_owned()),
        );

        Ok(Self {
            http_port,
            host,
            environment,
        })
    }

    /// One-line summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "host={} port={} environment={}",
            self.host,
            self.http_port,
            self.environment.as_str()
        )
    }
}
