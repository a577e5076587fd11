// ABOUTME: Purchase-quantity computation per menu item, course, and event
// ABOUTME: Applies category shares, yield adjustment, unit conversion, and rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shopping List Calculator
//!
//! For every active menu item this module computes three figures:
//!
//! - **raw grams**: the usable weight attendees should end up with,
//! - **adjusted grams**: the weight to buy once trimming/cooking loss
//!   (yield percentage) is accounted for,
//! - **purchase grams**: the final figure after converting to discrete
//!   units and/or rounding up to the item's purchase increment.
//!
//! Rounding always goes up: a shortfall at the butcher is worse than a
//! few hundred grams of leftovers.
//!
//! The calculator is a pure function and assumes pre-validated input
//! (see [`super::validation`]). In particular a yield percentage of zero
//! or below is a data-entry error the API boundary rejects; fed such a
//! value anyway, the math yields infinities rather than panicking.

use crate::constants::units::GRAMS_PER_KILOGRAM;
use crate::models::{
    EventCourse, EventCourseWithItems, MeatDistribution, MenuItem, ShoppingList,
    ShoppingListCourse, ShoppingListItem, ShoppingListTotals,
};

/// Compute the full shopping list for one event
///
/// Per course, the baseline budget is `total_persons x grams_per_person`.
/// Protein items carve that budget up by averaged category share and
/// their own sibling distribution percentage; any item may instead carry
/// its own per-person gram target, which overrides the course-derived
/// figure. Inactive items are skipped entirely.
///
/// Empty input (no courses, no items, zero persons) produces an empty
/// list with zeroed totals — never an error, since dashboards call this
/// speculatively while an event is still being set up.
#[must_use]
pub fn calculate_shopping_list(
    courses: &[EventCourseWithItems],
    total_persons: u32,
    average: &MeatDistribution,
) -> ShoppingList {
    let course_lists: Vec<ShoppingListCourse> = courses
        .iter()
        .map(|course| calculate_course(course, total_persons, average))
        .collect();

    let food_grams: f64 = course_lists.iter().map(|c| c.food_total_grams).sum();
    let other_grams: f64 = course_lists.iter().map(|c| c.other_total_grams).sum();
    let total_grams = food_grams + other_grams;

    ShoppingList {
        courses: course_lists,
        grand_total: ShoppingListTotals {
            food_grams,
            other_grams,
            total_grams,
            total_kilograms: total_grams / GRAMS_PER_KILOGRAM,
        },
    }
}

/// Compute purchase quantities for one course
fn calculate_course(
    course: &EventCourseWithItems,
    total_persons: u32,
    average: &MeatDistribution,
) -> ShoppingListCourse {
    let items: Vec<ShoppingListItem> = course
        .items
        .iter()
        .filter(|item| item.is_active)
        .map(|item| calculate_item(item, &course.course, total_persons, average))
        .collect();

    let food_total_grams = items
        .iter()
        .filter(|row| row.item_type.is_food())
        .map(|row| row.purchase_grams)
        .sum();
    let other_total_grams = items
        .iter()
        .filter(|row| !row.item_type.is_food())
        .map(|row| row.purchase_grams)
        .sum();

    ShoppingListCourse {
        course_id: course.course.id,
        name: course.course.name.clone(),
        grams_per_person: course.course.grams_per_person,
        food_total_grams,
        other_total_grams,
        items,
    }
}

/// Compute purchase quantities for one item
fn calculate_item(
    item: &MenuItem,
    course: &EventCourse,
    total_persons: u32,
    average: &MeatDistribution,
) -> ShoppingListItem {
    let raw_grams = raw_grams_for(item, course, total_persons, average);

    // Yield below 100% means more must be bought to net the target
    // usable weight after trimming and cooking loss.
    let adjusted_grams = raw_grams / (item.yield_percentage / 100.0);

    let (purchase_grams, unit_count) = finalize_quantity(item, adjusted_grams);

    ShoppingListItem {
        item_id: item.id,
        name: item.name.clone(),
        item_type: item.item_type,
        category: item.category,
        raw_grams,
        adjusted_grams,
        purchase_grams,
        unit_count,
        unit_label: item.unit_label.clone(),
        purchased_quantity: item.purchased_quantity,
    }
}

/// The usable grams an item should contribute
///
/// An item-level `grams_per_person` always wins. Otherwise protein items
/// take their slice of the course budget via the averaged category share
/// and their sibling distribution percentage, and non-protein items fall
/// back to the full course-level per-person target.
fn raw_grams_for(
    item: &MenuItem,
    course: &EventCourse,
    total_persons: u32,
    average: &MeatDistribution,
) -> f64 {
    let persons = f64::from(total_persons);

    if let Some(grams_per_person) = item.grams_per_person {
        return persons * grams_per_person;
    }

    let course_budget = persons * course.grams_per_person;

    if item.is_protein() {
        let category_share = item
            .category
            .map_or(0.0, |category| average.share(category));
        let sibling_share = item.distribution_percentage.unwrap_or(100.0);
        course_budget * (category_share / 100.0) * (sibling_share / 100.0)
    } else {
        course_budget
    }
}

/// Apply unit conversion and purchase-increment rounding
///
/// Items bought per piece are rounded up to whole units and their gram
/// figure becomes `units x unit_weight_grams` so course totals stay in
/// grams. A rounding increment then rounds the gram figure up to its
/// nearest multiple. Both conversions only ever round up.
fn finalize_quantity(item: &MenuItem, adjusted_grams: f64) -> (f64, Option<u32>) {
    let (mut grams, unit_count) = match item.unit_weight_grams {
        Some(unit_weight) if unit_weight > 0.0 => {
            let units = (adjusted_grams / unit_weight).ceil().max(0.0) as u32;
            (f64::from(units) * unit_weight, Some(units))
        }
        _ => (adjusted_grams, None),
    };

    if let Some(increment) = item.rounding_grams {
        if increment > 0.0 {
            grams = (grams / increment).ceil() * increment;
        }
    }

    (grams, unit_count)
}
