// ABOUTME: Storage abstraction for menu planning data
// ABOUTME: Trait-based store with an in-memory backend; persistence is pluggable
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage abstraction layer
//!
//! All storage implementations expose the same [`MenuStore`] trait so the
//! route and service layers never depend on a concrete backend. The
//! bundled backend is in-memory; a hosted database can be slotted in by
//! implementing the trait. Every mutation validates its input at this
//! boundary, and item creation/deletion routes through the Category
//! Rebalancer so the sibling-distribution invariant has a single owner.

use crate::errors::AppResult;
use crate::models::{EventCourse, EventCourseWithItems, MenuEvent, MenuItem, PersonPreference};
use async_trait::async_trait;
use uuid::Uuid;

pub mod memory;

pub use memory::InMemoryStore;

/// Core storage abstraction trait
#[async_trait]
pub trait MenuStore: Send + Sync {
    // ================================
    // Events
    // ================================

    /// Create a new menu event
    async fn create_event(&self, event: MenuEvent) -> AppResult<MenuEvent>;

    /// Get an event by ID
    async fn get_event(&self, event_id: Uuid) -> AppResult<MenuEvent>;

    /// List all events
    async fn list_events(&self) -> AppResult<Vec<MenuEvent>>;

    /// Replace an existing event
    async fn update_event(&self, event: MenuEvent) -> AppResult<MenuEvent>;

    /// Delete an event together with its courses, items, and preferences
    async fn delete_event(&self, event_id: Uuid) -> AppResult<()>;

    // ================================
    // Courses and items
    // ================================

    /// Create a course under an event
    async fn create_course(&self, course: EventCourse) -> AppResult<EventCourse>;

    /// Get a course by ID
    async fn get_course(&self, course_id: Uuid) -> AppResult<EventCourse>;

    /// Replace an existing course
    async fn update_course(&self, course: EventCourse) -> AppResult<EventCourse>;

    /// Delete a course and all of its items
    async fn delete_course(&self, course_id: Uuid) -> AppResult<()>;

    /// List an event's courses with their items, ordered by sort order
    async fn list_courses_with_items(&self, event_id: Uuid)
        -> AppResult<Vec<EventCourseWithItems>>;

    /// Create an item under a course
    ///
    /// A protein item created without an explicit distribution percentage
    /// triggers an even rebalance of its course+category siblings.
    async fn create_item(&self, item: MenuItem) -> AppResult<MenuItem>;

    /// Get an item by ID
    async fn get_item(&self, item_id: Uuid) -> AppResult<MenuItem>;

    /// Replace an existing item (no rebalance; admin-tuned shares stick)
    async fn update_item(&self, item: MenuItem) -> AppResult<MenuItem>;

    /// Delete an item, rebalancing its surviving category siblings
    async fn delete_item(&self, item_id: Uuid) -> AppResult<()>;

    // ================================
    // Person preferences
    // ================================

    /// Insert or replace one person's preferences
    async fn upsert_preference(&self, preference: PersonPreference)
        -> AppResult<PersonPreference>;

    /// List all preferences submitted for an event
    async fn list_preferences(&self, event_id: Uuid) -> AppResult<Vec<PersonPreference>>;
}
