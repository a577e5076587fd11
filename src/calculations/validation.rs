// ABOUTME: Boundary validation of admin-entered events, courses, and menu items
// ABOUTME: Rejects bad data before it can reach the (validation-free) calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Boundary validation
//!
//! The Shopping List Calculator is a pure function that assumes its
//! input is internally consistent; a yield percentage of zero would
//! produce infinities there. These checks run at the API boundary —
//! every storage mutation passes through them — so the calculator never
//! sees invalid data through normal operation.

use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use crate::models::{EventCourse, MenuEvent, MenuItem};

/// Validate an event before it is stored
///
/// # Errors
///
/// Returns a validation error for an empty name, a zero person count, or
/// an implausibly large one.
pub fn validate_event(event: &MenuEvent) -> AppResult<()> {
    if event.name.trim().is_empty() {
        return Err(AppError::missing_field("name"));
    }
    if event.total_persons == 0 {
        return Err(AppError::invalid_input("Total persons must be positive"));
    }
    if event.total_persons > limits::MAX_TOTAL_PERSONS {
        return Err(AppError::value_out_of_range(format!(
            "Total persons must not exceed {}",
            limits::MAX_TOTAL_PERSONS
        )));
    }
    Ok(())
}

/// Validate a course before it is stored
///
/// # Errors
///
/// Returns a validation error for an empty name, a non-positive gram
/// target, or a negative sort order.
pub fn validate_course(course: &EventCourse) -> AppResult<()> {
    if course.name.trim().is_empty() {
        return Err(AppError::missing_field("name"));
    }
    if course.grams_per_person <= 0.0 || !course.grams_per_person.is_finite() {
        return Err(AppError::invalid_input(
            "Grams per person must be a positive number",
        ));
    }
    if course.sort_order < 0 {
        return Err(AppError::invalid_input("Sort order must not be negative"));
    }
    Ok(())
}

/// Validate a menu item before it is stored
///
/// # Errors
///
/// Returns a validation error when the yield percentage falls outside
/// (0, 100], a protein item carries no category, or any optional numeric
/// field carries a non-positive value.
pub fn validate_item(item: &MenuItem) -> AppResult<()> {
    if item.name.trim().is_empty() {
        return Err(AppError::missing_field("name"));
    }

    if item.yield_percentage <= limits::MIN_YIELD_PERCENTAGE_EXCLUSIVE
        || item.yield_percentage > limits::MAX_YIELD_PERCENTAGE
        || !item.yield_percentage.is_finite()
    {
        return Err(AppError::value_out_of_range(format!(
            "Yield percentage must be within (0, {}]",
            limits::MAX_YIELD_PERCENTAGE
        ))
        .with_details(serde_json::json!({ "yieldPercentage": item.yield_percentage })));
    }

    if item.is_protein() && item.category.is_none() {
        return Err(AppError::missing_field("category"));
    }

    if item.sort_order < 0 {
        return Err(AppError::invalid_input("Sort order must not be negative"));
    }

    validate_positive_if_set("gramsPerPerson", item.grams_per_person)?;
    validate_positive_if_set("unitWeightGrams", item.unit_weight_grams)?;
    validate_positive_if_set("roundingGrams", item.rounding_grams)?;

    if let Some(share) = item.distribution_percentage {
        if share <= 0.0 || share > limits::FULL_SHARE_PERCENT || !share.is_finite() {
            return Err(AppError::value_out_of_range(
                "Distribution percentage must be within (0, 100]",
            ));
        }
    }

    Ok(())
}

fn validate_positive_if_set(field: &str, value: Option<f64>) -> AppResult<()> {
    match value {
        Some(v) if v <= 0.0 || !v.is_finite() => Err(AppError::invalid_input(format!(
            "{field} must be a positive number when set"
        ))),
        _ => Ok(()),
    }
}
