// ABOUTME: Per-category person-equivalent breakdown of a course's protein budget
// ABOUTME: Admin-facing explanation of the averaged distribution, not purchase math
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Breakdown Reporter
//!
//! Answers the admin question "how many people effectively chose beef?"
//! for one course: each category's averaged percentage is translated into
//! a person-equivalent head count and the kilograms that share works out
//! to. The kilogram figure is derived exactly as the Shopping List
//! Calculator derives a protein item's category slice, so the two views
//! can be cross-checked against each other. None of this feeds back into
//! purchase quantities.

use crate::constants::units::GRAMS_PER_KILOGRAM;
use crate::models::{CategoryBreakdown, EventCourseWithItems, MeatCategory, MeatDistribution};

/// Break one course's protein budget down per meat category
///
/// Returns `None` for courses with no active protein items — there is
/// nothing to break down for a dessert course.
#[must_use]
pub fn meat_distribution_breakdown(
    course: &EventCourseWithItems,
    total_persons: u32,
    average: &MeatDistribution,
) -> Option<Vec<CategoryBreakdown>> {
    let has_protein = course
        .items
        .iter()
        .any(|item| item.is_active && item.is_protein());
    if !has_protein {
        return None;
    }

    let persons = f64::from(total_persons);
    let course_budget = persons * course.course.grams_per_person;

    let categories = MeatCategory::ALL
        .into_iter()
        .map(|category| {
            let percentage = average.share(category);
            CategoryBreakdown {
                category,
                percentage,
                person_equivalent: persons * percentage / 100.0,
                kilograms: course_budget * (percentage / 100.0) / GRAMS_PER_KILOGRAM,
            }
        })
        .collect();

    Some(categories)
}
