// ABOUTME: Orchestrates the preference-aggregation and shopping-list pipeline
// ABOUTME: Loads event data from the store and runs the pure calculation core
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Menu planning service
//!
//! The pipeline behind the shopping-list and breakdown endpoints: load
//! the event, its courses with items, and submitted preferences; average
//! the preferences; run the calculator; attach the breakdown rows. All
//! math lives in [`crate::calculations`] — this module only sequences it.

use crate::calculations::{
    average_meat_distribution, calculate_shopping_list, meat_distribution_breakdown,
};
use crate::config::PlanningConfig;
use crate::errors::AppResult;
use crate::models::{
    EventCourseWithItems, MeatDistribution, MeatDistributionBreakdown, MenuEvent, ShoppingList,
};
use crate::storage::MenuStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Full shopping-list view returned to the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListResponse {
    /// The event the list was computed for
    pub event: MenuEvent,
    /// Averaged meat distribution the protein math was based on
    pub average_meat_distribution: MeatDistribution,
    /// How many submitted preferences carried a distribution
    pub preference_count: usize,
    /// Per-course protein breakdown for the admin view
    pub meat_distribution_breakdown: Vec<MeatDistributionBreakdown>,
    /// Per-course purchase quantities and the grand total
    #[serde(flatten)]
    pub shopping_list: ShoppingList,
}

/// Computes shopping lists and breakdowns for menu events
pub struct MenuPlanningService {
    store: Arc<dyn MenuStore>,
    planning: Arc<PlanningConfig>,
}

impl MenuPlanningService {
    /// Create a service over the given store and planning defaults
    #[must_use]
    pub fn new(store: Arc<dyn MenuStore>, planning: Arc<PlanningConfig>) -> Self {
        Self { store, planning }
    }

    /// Average the submitted meat-distribution preferences for an event
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the event does not exist, or a
    /// storage error from the backend.
    pub async fn average_distribution(&self, event: &MenuEvent) -> AppResult<MeatDistribution> {
        let preferences = self.store.list_preferences(event.id).await?;
        Ok(average_meat_distribution(&preferences, &self.planning))
    }

    /// Compute the full shopping list for one event
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the event does not exist, or a
    /// storage error from the backend.
    pub async fn shopping_list(&self, event_id: uuid::Uuid) -> AppResult<ShoppingListResponse> {
        let event = self.store.get_event(event_id).await?;
        let courses = self.store.list_courses_with_items(event_id).await?;
        let preferences = self.store.list_preferences(event_id).await?;

        let supplied = preferences
            .iter()
            .filter(|p| p.meat_distribution.is_some())
            .count();
        let average = average_meat_distribution(&preferences, &self.planning);
        let mut shopping_list = calculate_shopping_list(&courses, event.total_persons, &average);
        shopping_list.grand_total.total_kilograms = round_to_precision(
            shopping_list.grand_total.total_kilograms,
            self.planning.kilogram_precision,
        );
        let meat_distribution_breakdown =
            Self::breakdowns(&courses, event.total_persons, &average);

        debug!(
            event.id = %event_id,
            courses = courses.len(),
            preferences = supplied,
            total_grams = shopping_list.grand_total.total_grams,
            "Computed shopping list"
        );

        Ok(ShoppingListResponse {
            event,
            average_meat_distribution: average,
            preference_count: supplied,
            meat_distribution_breakdown,
            shopping_list,
        })
    }

    /// Compute per-course meat breakdowns for one event
    ///
    /// Courses without active protein items are omitted entirely.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the event does not exist, or a
    /// storage error from the backend.
    pub async fn meat_breakdown(
        &self,
        event_id: uuid::Uuid,
    ) -> AppResult<Vec<MeatDistributionBreakdown>> {
        let event = self.store.get_event(event_id).await?;
        let courses = self.store.list_courses_with_items(event_id).await?;
        let average = self.average_distribution(&event).await?;

        Ok(Self::breakdowns(&courses, event.total_persons, &average))
    }

    fn breakdowns(
        courses: &[EventCourseWithItems],
        total_persons: u32,
        average: &MeatDistribution,
    ) -> Vec<MeatDistributionBreakdown> {
        courses
            .iter()
            .filter_map(|course| {
                meat_distribution_breakdown(course, total_persons, average).map(|categories| {
                    MeatDistributionBreakdown {
                        course_id: course.course.id,
                        course_name: course.course.name.clone(),
                        categories,
                    }
                })
            })
            .collect()
    }
}

/// Round a display figure to the configured number of decimals
fn round_to_precision(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(i32::try_from(decimals.min(12)).unwrap_or(12));
    (value * factor).round() / factor
}
