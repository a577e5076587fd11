// ABOUTME: Shopping-list calculation engine for menu planning
// ABOUTME: Pure functions: preference aggregation, purchase quantities, breakdowns
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shopping-list calculation engine
//!
//! Everything in this module is pure, synchronous computation over data
//! the caller has already loaded: no I/O, no shared state. The pipeline
//! an API handler runs is
//!
//! 1. [`average_meat_distribution`] — fold individual preferences into
//!    one averaged distribution,
//! 2. [`calculate_shopping_list`] — turn courses, attendee count, and the
//!    averaged distribution into purchase quantities,
//! 3. [`meat_distribution_breakdown`] — optionally explain the averaged
//!    distribution as person-equivalents per category.
//!
//! The calculator assumes pre-validated input; [`validation`] holds the
//! checks the API boundary runs before data ever reaches it.

/// Per-category person-equivalent breakdown for admin display
pub mod breakdown;

/// Averaging individual meat-distribution preferences
pub mod preferences;

/// Sibling distribution-percentage rebalancing
pub mod rebalance;

/// Purchase-quantity computation per item, course, and event
pub mod shopping_list;

/// Boundary validation of admin-entered menu data
pub mod validation;

pub use breakdown::meat_distribution_breakdown;
pub use preferences::average_meat_distribution;
pub use rebalance::rebalance_category;
pub use shopping_list::calculate_shopping_list;
