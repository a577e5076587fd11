// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Builds seeded events, courses, items, and preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

use chrono::NaiveDate;
use feast_planner::models::{
    EventCourse, EventStatus, MeatDistribution, MenuEvent, PersonPreference,
};
use uuid::Uuid;

/// A draft BBQ event for the given headcount
pub fn bbq_event(total_persons: u32) -> MenuEvent {
    MenuEvent {
        id: Uuid::new_v4(),
        name: "Summer BBQ".into(),
        event_type: "bbq".into(),
        date: NaiveDate::from_ymd_opt(2026, 7, 4).unwrap(),
        total_persons,
        status: EventStatus::Active,
    }
}

/// A course under the given event
pub fn course(event_id: Uuid, name: &str, grams_per_person: f64) -> EventCourse {
    EventCourse {
        id: Uuid::new_v4(),
        event_id,
        name: name.into(),
        sort_order: 0,
        grams_per_person,
    }
}

/// A preference carrying the given distribution (or a blank form)
pub fn preference(
    event_id: Uuid,
    person_name: &str,
    distribution: Option<MeatDistribution>,
) -> PersonPreference {
    PersonPreference {
        id: Uuid::new_v4(),
        event_id,
        person_name: person_name.into(),
        is_partner: false,
        meat_distribution: distribution,
        dietary_requirements: None,
        drink_preferences: vec![],
    }
}

/// A distribution concentrated on beef and chicken
pub fn beef_heavy(beef: f64, chicken: f64) -> MeatDistribution {
    MeatDistribution {
        beef,
        chicken,
        ..MeatDistribution::zero()
    }
}
