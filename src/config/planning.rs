// ABOUTME: Calculation defaults the engine falls back to when data is missing
// ABOUTME: Holds the default meat distribution and env-overridable planning knobs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Planning Configuration Module
//!
//! Provides the defaults the calculation engine applies when participant
//! data is incomplete, most importantly the fallback meat distribution
//! used when no attendee has submitted preferences yet. Admin dashboards
//! call the shopping-list computation speculatively while an event is
//! still being set up, so every default here must keep that computation
//! well-defined.

use crate::models::MeatDistribution;
use serde::{Deserialize, Serialize};
use std::env;
use std::sync::OnceLock;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric knob was outside its valid range
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// An environment override could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Planning defaults used by the calculation engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningConfig {
    /// Distribution assumed when no attendee supplied one
    #[serde(default = "default_distribution")]
    pub default_distribution: MeatDistribution,

    /// Decimal places used when reporting kilogram figures
    #[serde(default = "default_kilogram_precision")]
    pub kilogram_precision: u32,
}

/// Default fallback distribution: an even split across all six categories
fn default_distribution() -> MeatDistribution {
    MeatDistribution::even_split()
}

/// Kilogram figures are conventionally shown to two decimals
fn default_kilogram_precision() -> u32 {
    2
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            default_distribution: default_distribution(),
            kilogram_precision: default_kilogram_precision(),
        }
    }
}

impl PlanningConfig {
    /// Load planning defaults, honoring environment overrides
    ///
    /// `PLANNING_DEFAULT_DISTRIBUTION` may carry a JSON-encoded
    /// [`MeatDistribution`] to replace the even-split fallback.
    ///
    /// # Errors
    ///
    /// Returns a parse error when the override is set but not valid JSON
    /// for a distribution.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = env::var("PLANNING_DEFAULT_DISTRIBUTION") {
            config.default_distribution = serde_json::from_str(&raw)
                .map_err(|e| ConfigError::Parse(format!("PLANNING_DEFAULT_DISTRIBUTION: {e}")))?;
        }

        Ok(config)
    }

    /// Global shared instance, initialized on first access
    ///
    /// Environment overrides that fail to parse fall back to defaults
    /// here; startup code that wants the error calls [`Self::from_env`].
    pub fn global() -> &'static Self {
        static INSTANCE: OnceLock<PlanningConfig> = OnceLock::new();
        INSTANCE.get_or_init(|| Self::from_env().unwrap_or_default())
    }
}
