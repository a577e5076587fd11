// ABOUTME: Common data models for menu events, courses, items, and person preferences
// ABOUTME: Defines the camelCase wire types shared by routes, storage, and calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common data models for menu planning
//!
//! All wire types serialize with camelCase field names so that route
//! responses match the JSON contract expected by the admin dashboard.
//! Loosely-typed concepts (item types, meat categories, event status,
//! drink preferences) are modeled as exhaustive enums rather than free
//! strings, so adding a variant forces every match site to be revisited.

use crate::constants::defaults;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a menu event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Being drafted by an admin, not yet visible to participants
    Draft,
    /// Open for preference submissions
    Active,
    /// The event has taken place
    Completed,
    /// Called off
    Cancelled,
}

impl Default for EventStatus {
    fn default() -> Self {
        Self::Draft
    }
}

/// What kind of thing a menu item is
///
/// Protein items participate in meat-distribution math; the remaining
/// variants only affect which course total they are summed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// Meat, fish, or a vegetarian protein alternative
    Protein,
    /// Non-protein food (sides, salads, bread)
    Side,
    /// Beverages
    Drink,
    /// Non-food supplies (charcoal, napkins)
    Supply,
}

impl ItemType {
    /// Whether this item counts toward the food total of a course
    #[must_use]
    pub fn is_food(self) -> bool {
        matches!(self, Self::Protein | Self::Side)
    }
}

/// Protein sub-type a menu item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeatCategory {
    /// Pork cuts
    Pork,
    /// Beef cuts
    Beef,
    /// Chicken and other poultry
    Chicken,
    /// Game (venison, boar, elk)
    Game,
    /// Fish and seafood
    Fish,
    /// Vegetarian protein alternatives
    Vegetarian,
}

impl MeatCategory {
    /// All categories, in display order
    pub const ALL: [Self; 6] = [
        Self::Pork,
        Self::Beef,
        Self::Chicken,
        Self::Game,
        Self::Fish,
        Self::Vegetarian,
    ];
}

/// Percentage shares across the six meat categories for one person
/// (or averaged across an event's attendees)
///
/// Shares are relative weights; they typically sum to ~100 but the
/// calculation engine never assumes an exact total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeatDistribution {
    /// Pork share (percent)
    #[serde(default)]
    pub pork: f64,
    /// Beef share (percent)
    #[serde(default)]
    pub beef: f64,
    /// Chicken share (percent)
    #[serde(default)]
    pub chicken: f64,
    /// Game share (percent)
    #[serde(default)]
    pub game: f64,
    /// Fish share (percent)
    #[serde(default)]
    pub fish: f64,
    /// Vegetarian share (percent)
    #[serde(default)]
    pub vegetarian: f64,
}

impl MeatDistribution {
    /// A distribution with every share at zero
    #[must_use]
    pub fn zero() -> Self {
        Self {
            pork: 0.0,
            beef: 0.0,
            chicken: 0.0,
            game: 0.0,
            fish: 0.0,
            vegetarian: 0.0,
        }
    }

    /// An even split across all six categories
    #[must_use]
    pub fn even_split() -> Self {
        let share = 100.0 / Self::ALL_COUNT;
        Self {
            pork: share,
            beef: share,
            chicken: share,
            game: share,
            fish: share,
            vegetarian: share,
        }
    }

    const ALL_COUNT: f64 = 6.0;

    /// Get the share for one category
    #[must_use]
    pub fn share(&self, category: MeatCategory) -> f64 {
        match category {
            MeatCategory::Pork => self.pork,
            MeatCategory::Beef => self.beef,
            MeatCategory::Chicken => self.chicken,
            MeatCategory::Game => self.game,
            MeatCategory::Fish => self.fish,
            MeatCategory::Vegetarian => self.vegetarian,
        }
    }

    /// Set the share for one category
    pub fn set_share(&mut self, category: MeatCategory, value: f64) {
        match category {
            MeatCategory::Pork => self.pork = value,
            MeatCategory::Beef => self.beef = value,
            MeatCategory::Chicken => self.chicken = value,
            MeatCategory::Game => self.game = value,
            MeatCategory::Fish => self.fish = value,
            MeatCategory::Vegetarian => self.vegetarian = value,
        }
    }

    /// Sum of all six shares
    #[must_use]
    pub fn total(&self) -> f64 {
        self.pork + self.beef + self.chicken + self.game + self.fish + self.vegetarian
    }
}

impl Default for MeatDistribution {
    fn default() -> Self {
        Self::zero()
    }
}

/// One occasion being planned
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEvent {
    /// Unique identifier
    pub id: Uuid,
    /// Display name ("Summer BBQ 2026")
    pub name: String,
    /// Free-form event type tag ("bbq", "dinner", "brunch")
    pub event_type: String,
    /// Calendar date of the event
    pub date: NaiveDate,
    /// Number of attendees the purchase math is based on
    pub total_persons: u32,
    /// Lifecycle status
    #[serde(default)]
    pub status: EventStatus,
}

/// One course within an event ("Starters", "BBQ", "Dessert")
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCourse {
    /// Unique identifier
    pub id: Uuid,
    /// Owning event
    pub event_id: Uuid,
    /// Course name
    pub name: String,
    /// Display order within the event
    #[serde(default)]
    pub sort_order: i32,
    /// Per-attendee gram target for the course as a whole; items fall back
    /// to this when they carry no gram target of their own
    pub grams_per_person: f64,
}

/// One purchasable item within a course
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique identifier
    pub id: Uuid,
    /// Owning course
    pub course_id: Uuid,
    /// Item name ("Brisket", "Corn cobs")
    pub name: String,
    /// Item kind; protein items participate in distribution math
    pub item_type: ItemType,
    /// Protein category; required for protein items, ignored otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<MeatCategory>,
    /// Fraction of purchased weight usable after trimming/waste (percent)
    #[serde(default = "default_yield")]
    pub yield_percentage: f64,
    /// Weight of one discrete unit, for items bought per piece
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_weight_grams: Option<f64>,
    /// Label for discrete units ("whole chicken", "rack")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_label: Option<String>,
    /// Round the purchase quantity up to the nearest multiple of this
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounding_grams: Option<f64>,
    /// This item's share of its category budget when siblings compete
    /// for one category (percent; siblings are kept summing to 100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution_percentage: Option<f64>,
    /// Item-level gram target overriding the course default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grams_per_person: Option<f64>,
    /// Actual quantity the admin bought, recorded after the fact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchased_quantity: Option<f64>,
    /// Display order within the course
    #[serde(default)]
    pub sort_order: i32,
    /// Inactive items are kept for history but excluded from calculations
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_yield() -> f64 {
    defaults::YIELD_PERCENTAGE
}

fn default_true() -> bool {
    true
}

impl MenuItem {
    /// Create a new active item with default yield and no overrides
    #[must_use]
    pub fn new(course_id: Uuid, name: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            id: Uuid::new_v4(),
            course_id,
            name: name.into(),
            item_type,
            category: None,
            yield_percentage: defaults::YIELD_PERCENTAGE,
            unit_weight_grams: None,
            unit_label: None,
            rounding_grams: None,
            distribution_percentage: None,
            grams_per_person: None,
            purchased_quantity: None,
            sort_order: 0,
            is_active: true,
        }
    }

    /// Set the protein category
    #[must_use]
    pub fn with_category(mut self, category: MeatCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the yield percentage
    #[must_use]
    pub fn with_yield(mut self, yield_percentage: f64) -> Self {
        self.yield_percentage = yield_percentage;
        self
    }

    /// Purchase in discrete units of the given weight
    #[must_use]
    pub fn with_unit(mut self, unit_weight_grams: f64, unit_label: impl Into<String>) -> Self {
        self.unit_weight_grams = Some(unit_weight_grams);
        self.unit_label = Some(unit_label.into());
        self
    }

    /// Round purchase quantities up to a multiple of the given grams
    #[must_use]
    pub fn with_rounding(mut self, rounding_grams: f64) -> Self {
        self.rounding_grams = Some(rounding_grams);
        self
    }

    /// Set this item's share of its category budget
    #[must_use]
    pub fn with_distribution(mut self, distribution_percentage: f64) -> Self {
        self.distribution_percentage = Some(distribution_percentage);
        self
    }

    /// Override the course-level gram target for this item
    #[must_use]
    pub fn with_grams_per_person(mut self, grams_per_person: f64) -> Self {
        self.grams_per_person = Some(grams_per_person);
        self
    }

    /// Whether this item participates in protein distribution math
    #[must_use]
    pub fn is_protein(&self) -> bool {
        self.item_type == ItemType::Protein
    }
}

/// A course together with its menu items, as loaded for calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCourseWithItems {
    /// The course itself
    #[serde(flatten)]
    pub course: EventCourse,
    /// Items belonging to the course
    pub items: Vec<MenuItem>,
}

/// Drink choices a participant can tick on the preferences form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrinkPreference {
    /// Beer
    Beer,
    /// Wine
    Wine,
    /// Cider
    Cider,
    /// Mixed drinks
    Cocktails,
    /// Alcohol-free options
    Nonalcoholic,
}

/// One attending person's preferences (self or partner)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonPreference {
    /// Unique identifier
    pub id: Uuid,
    /// Owning event
    pub event_id: Uuid,
    /// Name of the attendee
    pub person_name: String,
    /// Whether this row describes a registered participant's partner
    #[serde(default)]
    pub is_partner: bool,
    /// Meat-distribution preference; `None` when the form was left blank
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meat_distribution: Option<MeatDistribution>,
    /// Free-text dietary requirements ("gluten-free", "no shellfish")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_requirements: Option<String>,
    /// Ticked drink choices
    #[serde(default)]
    pub drink_preferences: Vec<DrinkPreference>,
}

// ── Computed output types (never persisted) ─────────────────────────────

/// Purchase quantities computed for one menu item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    /// The item this row was computed for
    pub item_id: Uuid,
    /// Item name, copied for display
    pub name: String,
    /// Item kind
    pub item_type: ItemType,
    /// Protein category when applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<MeatCategory>,
    /// Usable grams the attendees should end up with
    pub raw_grams: f64,
    /// Grams to buy once trimming/waste is accounted for
    pub adjusted_grams: f64,
    /// Final quantity to purchase, in grams, after unit and rounding rules
    pub purchase_grams: f64,
    /// Number of discrete units, for items bought per piece
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_count: Option<u32>,
    /// Label for discrete units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_label: Option<String>,
    /// Admin-recorded actual purchase, echoed for comparison
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchased_quantity: Option<f64>,
}

/// Aggregated purchase quantities for one course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListCourse {
    /// The course these rows belong to
    pub course_id: Uuid,
    /// Course name, copied for display
    pub name: String,
    /// The per-attendee gram target the course was computed from
    pub grams_per_person: f64,
    /// Sum of purchase grams over food items (protein and sides)
    pub food_total_grams: f64,
    /// Sum of purchase grams over non-food items
    pub other_total_grams: f64,
    /// Per-item rows
    pub items: Vec<ShoppingListItem>,
}

/// Grand totals across all courses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListTotals {
    /// Food grams across all courses
    pub food_grams: f64,
    /// Non-food grams across all courses
    pub other_grams: f64,
    /// Everything combined, in grams
    pub total_grams: f64,
    /// Everything combined, in kilograms, for display
    pub total_kilograms: f64,
}

/// The full computed shopping list for one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    /// Per-course aggregates
    pub courses: Vec<ShoppingListCourse>,
    /// Grand totals
    pub grand_total: ShoppingListTotals,
}

/// Person-equivalent share of one meat category, for admin display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    /// The category
    pub category: MeatCategory,
    /// Averaged percentage share of this category
    pub percentage: f64,
    /// How many attendees this share is equivalent to
    pub person_equivalent: f64,
    /// Kilograms this share translates to for the course
    pub kilograms: f64,
}

/// Per-category breakdown of one course's protein budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeatDistributionBreakdown {
    /// The course the breakdown describes
    pub course_id: Uuid,
    /// Course name, copied for display
    pub course_name: String,
    /// One row per meat category
    pub categories: Vec<CategoryBreakdown>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_camel_case() {
        let event = MenuEvent {
            id: Uuid::new_v4(),
            name: "Summer BBQ".into(),
            event_type: "bbq".into(),
            date: NaiveDate::from_ymd_opt(2026, 7, 4).unwrap(),
            total_persons: 20,
            status: EventStatus::Active,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"totalPersons\":20"));
        assert!(json.contains("\"eventType\":\"bbq\""));
        assert!(json.contains("\"status\":\"active\""));
    }

    #[test]
    fn test_item_defaults_on_deserialize() {
        let json = serde_json::json!({
            "id": Uuid::new_v4(),
            "courseId": Uuid::new_v4(),
            "name": "Brisket",
            "itemType": "protein",
            "category": "beef"
        });
        let item: MenuItem = serde_json::from_value(json).unwrap();
        assert!((item.yield_percentage - 100.0).abs() < f64::EPSILON);
        assert!(item.is_active);
        assert!(item.distribution_percentage.is_none());
    }

    #[test]
    fn test_distribution_share_roundtrip() {
        let mut dist = MeatDistribution::zero();
        for (offset, category) in MeatCategory::ALL.into_iter().enumerate() {
            dist.set_share(category, offset as f64 * 10.0);
        }
        assert!((dist.share(MeatCategory::Pork) - 0.0).abs() < f64::EPSILON);
        assert!((dist.share(MeatCategory::Vegetarian) - 50.0).abs() < f64::EPSILON);
        assert!((dist.total() - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_even_split_totals_one_hundred() {
        let dist = MeatDistribution::even_split();
        assert!((dist.total() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_preference_without_distribution_deserializes() {
        let json = serde_json::json!({
            "id": Uuid::new_v4(),
            "eventId": Uuid::new_v4(),
            "personName": "Alex",
        });
        let pref: PersonPreference = serde_json::from_value(json).unwrap();
        assert!(pref.meat_distribution.is_none());
        assert!(pref.drink_preferences.is_empty());
        assert!(!pref.is_partner);
    }
}
