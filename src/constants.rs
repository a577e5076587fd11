// ABOUTME: Application constants and numeric limits shared across modules
// ABOUTME: Centralizes service names, defaults, and validation bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application constants and configuration values

/// Service name constants used in logging and health output
pub mod service_names {
    /// The menu planning server binary
    pub const FEAST_PLANNER_SERVER: &str = "feast-planner-server";
}

/// Default values applied when the admin does not specify one
pub mod defaults {
    /// Items without an explicit yield are assumed fully usable
    pub const YIELD_PERCENTAGE: f64 = 100.0;

    /// Default HTTP port for the server
    pub const HTTP_PORT: u16 = 8080;

    /// Default bind host for the server
    pub const HOST: &str = "127.0.0.1";
}

/// Validation bounds enforced at the API boundary
pub mod limits {
    /// Yield percentage must be strictly above zero
    pub const MIN_YIELD_PERCENTAGE_EXCLUSIVE: f64 = 0.0;

    /// Yield percentage can never exceed the full purchased weight
    pub const MAX_YIELD_PERCENTAGE: f64 = 100.0;

    /// A full distribution share within a category
    pub const FULL_SHARE_PERCENT: f64 = 100.0;

    /// Upper bound on attendees, to catch typo'd person counts
    pub const MAX_TOTAL_PERSONS: u32 = 10_000;
}

/// Unit conversion constants
pub mod units {
    /// Grams per kilogram, for display-level conversions
    pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;
}
