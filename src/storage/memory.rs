// ABOUTME: In-memory MenuStore backend over concurrent maps
// ABOUTME: Owns the rebalance-on-create/delete paths for sibling distribution shares
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory storage backend
//!
//! Backs the server in development and the test suite. Data lives in
//! concurrent maps keyed by ID; lookups collect-then-write so no map
//! guard is held across a second map operation.

use crate::calculations::rebalance_category;
use crate::calculations::validation::{validate_course, validate_event, validate_item};
use crate::errors::{AppError, AppResult};
use crate::models::{
    EventCourse, EventCourseWithItems, MeatCategory, MenuEvent, MenuItem, PersonPreference,
};
use crate::storage::MenuStore;
use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

/// In-memory [`MenuStore`] implementation
#[derive(Debug, Default)]
pub struct InMemoryStore {
    events: DashMap<Uuid, MenuEvent>,
    courses: DashMap<Uuid, EventCourse>,
    items: DashMap<Uuid, MenuItem>,
    preferences: DashMap<Uuid, PersonPreference>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect a course's items ordered by sort order, then name
    fn items_of_course(&self, course_id: Uuid) -> Vec<MenuItem> {
        let mut items: Vec<MenuItem> = self
            .items
            .iter()
            .filter(|entry| entry.course_id == course_id)
            .map(|entry| entry.value().clone())
            .collect();
        items.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then_with(|| a.name.cmp(&b.name))
        });
        items
    }

    /// Re-split one course+category evenly and write the result back
    fn rebalance_and_store(&self, course_id: Uuid, category: MeatCategory) {
        let mut siblings = self.items_of_course(course_id);
        rebalance_category(&mut siblings, category);
        for item in siblings {
            self.items.insert(item.id, item);
        }
        debug!(
            course.id = %course_id,
            category = ?category,
            "Rebalanced category distribution"
        );
    }
}

#[async_trait]
impl MenuStore for InMemoryStore {
    async fn create_event(&self, event: MenuEvent) -> AppResult<MenuEvent> {
        validate_event(&event)?;
        if self.events.contains_key(&event.id) {
            return Err(AppError::already_exists("Menu event")
                .with_resource_id(event.id.to_string()));
        }
        self.events.insert(event.id, event.clone());
        Ok(event)
    }

    async fn get_event(&self, event_id: Uuid) -> AppResult<MenuEvent> {
        self.events
            .get(&event_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| {
                AppError::not_found("Menu event").with_resource_id(event_id.to_string())
            })
    }

    async fn list_events(&self) -> AppResult<Vec<MenuEvent>> {
        let mut events: Vec<MenuEvent> =
            self.events.iter().map(|entry| entry.value().clone()).collect();
        events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
        Ok(events)
    }

    async fn update_event(&self, event: MenuEvent) -> AppResult<MenuEvent> {
        validate_event(&event)?;
        if !self.events.contains_key(&event.id) {
            return Err(
                AppError::not_found("Menu event").with_resource_id(event.id.to_string())
            );
        }
        self.events.insert(event.id, event.clone());
        Ok(event)
    }

    async fn delete_event(&self, event_id: Uuid) -> AppResult<()> {
        if self.events.remove(&event_id).is_none() {
            return Err(
                AppError::not_found("Menu event").with_resource_id(event_id.to_string())
            );
        }

        let course_ids: Vec<Uuid> = self
            .courses
            .iter()
            .filter(|entry| entry.event_id == event_id)
            .map(|entry| entry.id)
            .collect();
        self.courses.retain(|_, course| course.event_id != event_id);
        self.items
            .retain(|_, item| !course_ids.contains(&item.course_id));
        self.preferences
            .retain(|_, preference| preference.event_id != event_id);
        Ok(())
    }

    async fn create_course(&self, course: EventCourse) -> AppResult<EventCourse> {
        validate_course(&course)?;
        if !self.events.contains_key(&course.event_id) {
            return Err(AppError::not_found("Menu event")
                .with_resource_id(course.event_id.to_string()));
        }
        self.courses.insert(course.id, course.clone());
        Ok(course)
    }

    async fn get_course(&self, course_id: Uuid) -> AppResult<EventCourse> {
        self.courses
            .get(&course_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| {
                AppError::not_found("Event course").with_resource_id(course_id.to_string())
            })
    }

    async fn update_course(&self, course: EventCourse) -> AppResult<EventCourse> {
        validate_course(&course)?;
        if !self.courses.contains_key(&course.id) {
            return Err(
                AppError::not_found("Event course").with_resource_id(course.id.to_string())
            );
        }
        self.courses.insert(course.id, course.clone());
        Ok(course)
    }

    async fn delete_course(&self, course_id: Uuid) -> AppResult<()> {
        if self.courses.remove(&course_id).is_none() {
            return Err(
                AppError::not_found("Event course").with_resource_id(course_id.to_string())
            );
        }
        self.items.retain(|_, item| item.course_id != course_id);
        Ok(())
    }

    async fn list_courses_with_items(
        &self,
        event_id: Uuid,
    ) -> AppResult<Vec<EventCourseWithItems>> {
        let mut courses: Vec<EventCourse> = self
            .courses
            .iter()
            .filter(|entry| entry.event_id == event_id)
            .map(|entry| entry.value().clone())
            .collect();
        courses.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then_with(|| a.name.cmp(&b.name))
        });

        Ok(courses
            .into_iter()
            .map(|course| {
                let items = self.items_of_course(course.id);
                EventCourseWithItems { course, items }
            })
            .collect())
    }

    async fn create_item(&self, item: MenuItem) -> AppResult<MenuItem> {
        validate_item(&item)?;
        if !self.courses.contains_key(&item.course_id) {
            return Err(AppError::not_found("Event course")
                .with_resource_id(item.course_id.to_string()));
        }

        let needs_rebalance =
            item.is_protein() && item.distribution_percentage.is_none() && item.is_active;
        let course_id = item.course_id;
        let category = item.category;

        self.items.insert(item.id, item.clone());

        // An explicit percentage is an admin-tuned share; only the
        // unspecified case falls back to an even split.
        if needs_rebalance {
            if let Some(category) = category {
                self.rebalance_and_store(course_id, category);
            }
        }

        self.items
            .get(&item.id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::storage("Item vanished during creation"))
    }

    async fn get_item(&self, item_id: Uuid) -> AppResult<MenuItem> {
        self.items
            .get(&item_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::not_found("Menu item").with_resource_id(item_id.to_string()))
    }

    async fn update_item(&self, item: MenuItem) -> AppResult<MenuItem> {
        validate_item(&item)?;
        if !self.items.contains_key(&item.id) {
            return Err(AppError::not_found("Menu item").with_resource_id(item.id.to_string()));
        }
        self.items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn delete_item(&self, item_id: Uuid) -> AppResult<()> {
        let Some((_, removed)) = self.items.remove(&item_id) else {
            return Err(AppError::not_found("Menu item").with_resource_id(item_id.to_string()));
        };

        if removed.is_protein() {
            if let Some(category) = removed.category {
                self.rebalance_and_store(removed.course_id, category);
            }
        }
        Ok(())
    }

    async fn upsert_preference(
        &self,
        preference: PersonPreference,
    ) -> AppResult<PersonPreference> {
        if preference.person_name.trim().is_empty() {
            return Err(AppError::missing_field("personName"));
        }
        if !self.events.contains_key(&preference.event_id) {
            return Err(AppError::not_found("Menu event")
                .with_resource_id(preference.event_id.to_string()));
        }
        self.preferences.insert(preference.id, preference.clone());
        Ok(preference)
    }

    async fn list_preferences(&self, event_id: Uuid) -> AppResult<Vec<PersonPreference>> {
        let mut preferences: Vec<PersonPreference> = self
            .preferences
            .iter()
            .filter(|entry| entry.event_id == event_id)
            .map(|entry| entry.value().clone())
            .collect();
        preferences.sort_by(|a, b| a.person_name.cmp(&b.person_name));
        Ok(preferences)
    }
}
