// ABOUTME: Configuration module organization for server and planning settings
// ABOUTME: Splits environment-driven server config from calculation defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration management
//!
//! Two concerns live here: [`environment`] holds the server's runtime
//! configuration (port, host, environment name) sourced from environment
//! variables, and [`planning`] holds the calculation defaults the engine
//! falls back to when data is missing.

/// Environment-driven server configuration
pub mod environment;

/// Calculation defaults and planning parameters
pub mod planning;

pub use environment::ServerConfig;
pub use planning::PlanningConfig;
