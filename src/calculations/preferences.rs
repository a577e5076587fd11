// ABOUTME: Preference aggregation: folds per-person meat distributions into one average
// ABOUTME: Persons without a submitted distribution are excluded, not counted as zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Preference aggregation
//!
//! Attendees fill in their preferred meat distribution on the preferences
//! form; many never do. The average used for purchase math is taken over
//! only the attendees who submitted one — a person who left the form
//! blank must not drag every category toward zero. When nobody submitted
//! anything, the configured default distribution applies instead, so
//! admin dashboards can call this before any data exists.

use crate::config::planning::PlanningConfig;
use crate::models::{MeatCategory, MeatDistribution, PersonPreference};

/// Average the meat distributions of everyone who supplied one
///
/// Each category's average is the mean over the supplying subset only:
/// persons without a `meat_distribution` are excluded from both the
/// numerator and the denominator. No normalization toward an exact 100
/// is performed; downstream weight math treats shares as relative.
///
/// Returns `config.default_distribution` when no person supplied a
/// distribution.
#[must_use]
pub fn average_meat_distribution(
    persons: &[PersonPreference],
    config: &PlanningConfig,
) -> MeatDistribution {
    let supplied: Vec<&MeatDistribution> = persons
        .iter()
        .filter_map(|person| person.meat_distribution.as_ref())
        .collect();

    if supplied.is_empty() {
        return config.default_distribution.clone();
    }

    let count = supplied.len() as f64;
    let mut average = MeatDistribution::zero();
    for category in MeatCategory::ALL {
        let sum: f64 = supplied.iter().map(|dist| dist.share(category)).sum();
        average.set_share(category, sum / count);
    }
    average
}
