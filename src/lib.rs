// ABOUTME: Main library entry point for the Feast Planner menu planning service
// ABOUTME: Exposes the calculation engine, storage layer, and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Feast Planner
//!
//! A menu-planning service for catering themed social events. Participants
//! record their meat-distribution preferences; admins define courses and
//! menu items; the service converts both into aggregate purchase quantities
//! per item, course, and category.
//!
//! ## Architecture
//!
//! - **Calculations**: pure functions turning preferences and menus into a
//!   shopping list (the core of the service)
//! - **Models**: camelCase wire types shared by routes, storage, and
//!   calculations
//! - **Storage**: trait-based store with an in-memory backend
//! - **Routes**: thin axum handlers that validate, delegate, and serialize
//!
//! ## Example
//!
//! ```rust
//! use feast_planner::calculations::average_meat_distribution;
//! use feast_planner::config::planning::PlanningConfig;
//!
//! let config = PlanningConfig::default();
//! let average = average_meat_distribution(&[], &config);
//! // No preferences submitted yet: the configured default applies.
//! assert!((average.total() - 100.0).abs() < 1e-9);
//! ```

/// Shopping-list calculation engine: aggregation, quantities, breakdowns
pub mod calculations;

/// Configuration management (server environment and planning defaults)
pub mod config;

/// Application constants and numeric limits
pub mod constants;

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// Structured logging configuration
pub mod logging;

/// Common data models for events, courses, items, and preferences
pub mod models;

/// Shared server state passed to every route
pub mod resources;

/// HTTP routes for admin management and shopping-list retrieval
pub mod routes;

/// Domain service layer between routes and the calculation engine
pub mod services;

/// Storage abstraction with an in-memory backend
pub mod storage;
