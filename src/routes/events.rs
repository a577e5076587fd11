// ABOUTME: CRUD routes for menu events, their courses, and menu items
// ABOUTME: Parses request DTOs and delegates every mutation to the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Event, course, and item management routes

use crate::errors::AppError;
use crate::models::{
    EventCourse, EventStatus, ItemType, MeatCategory, MenuEvent, MenuItem,
};
use crate::resources::ServerResources;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Request body for creating or replacing an event
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    /// Display name
    pub name: String,
    /// Free-form event type tag
    pub event_type: String,
    /// Calendar date
    pub date: NaiveDate,
    /// Attendee count the purchase math is based on
    pub total_persons: u32,
    /// Lifecycle status; defaults to draft
    #[serde(default)]
    pub status: EventStatus,
}

/// Request body for creating a course under an event
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequest {
    /// Course name
    pub name: String,
    /// Display order within the event
    #[serde(default)]
    pub sort_order: i32,
    /// Per-attendee gram target for the course
    pub grams_per_person: f64,
}

/// Request body for creating or replacing a menu item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    /// Item name
    pub name: String,
    /// Item kind
    pub item_type: ItemType,
    /// Protein category; required for protein items
    #[serde(default)]
    pub category: Option<MeatCategory>,
    /// Usable fraction after trimming/waste (percent); defaults to 100
    #[serde(default)]
    pub yield_percentage: Option<f64>,
    /// Weight of one discrete unit
    #[serde(default)]
    pub unit_weight_grams: Option<f64>,
    /// Label for discrete units
    #[serde(default)]
    pub unit_label: Option<String>,
    /// Round purchase grams up to a multiple of this
    #[serde(default)]
    pub rounding_grams: Option<f64>,
    /// Explicit share of the category budget (percent)
    #[serde(default)]
    pub distribution_percentage: Option<f64>,
    /// Item-level gram target overriding the course default
    #[serde(default)]
    pub grams_per_person: Option<f64>,
    /// Admin-recorded actual purchase
    #[serde(default)]
    pub purchased_quantity: Option<f64>,
    /// Display order within the course
    #[serde(default)]
    pub sort_order: i32,
    /// Whether the item participates in calculations; defaults to true
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl ItemRequest {
    fn into_item(self, id: Uuid, course_id: Uuid) -> MenuItem {
        MenuItem {
            id,
            course_id,
            name: self.name,
            item_type: self.item_type,
            category: self.category,
            yield_percentage: self
                .yield_percentage
                .unwrap_or(crate::constants::defaults::YIELD_PERCENTAGE),
            unit_weight_grams: self.unit_weight_grams,
            unit_label: self.unit_label,
            rounding_grams: self.rounding_grams,
            distribution_percentage: self.distribution_percentage,
            grams_per_person: self.grams_per_person,
            purchased_quantity: self.purchased_quantity,
            sort_order: self.sort_order,
            is_active: self.is_active.unwrap_or(true),
        }
    }
}

/// Event management route handlers
pub struct EventRoutes;

impl EventRoutes {
    /// Build the event/course/item route group
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/events", post(Self::create_event).get(Self::list_events))
            .route(
                "/api/events/:event_id",
                get(Self::get_event)
                    .put(Self::update_event)
                    .delete(Self::delete_event),
            )
            .route(
                "/api/events/:event_id/courses",
                post(Self::create_course).get(Self::list_courses),
            )
            .route(
                "/api/courses/:course_id",
                put(Self::update_course).delete(Self::delete_course),
            )
            .route("/api/courses/:course_id/items", post(Self::create_item))
            .route(
                "/api/items/:item_id",
                put(Self::update_item).delete(Self::delete_item),
            )
            .with_state(resources)
    }

    async fn create_event(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<EventRequest>,
    ) -> Result<(StatusCode, Json<MenuEvent>), AppError> {
        let event = MenuEvent {
            id: Uuid::new_v4(),
            name: request.name,
            event_type: request.event_type,
            date: request.date,
            total_persons: request.total_persons,
            status: request.status,
        };
        let created = resources.store.create_event(event).await?;
        info!(event.id = %created.id, event.name = %created.name, "Created menu event");
        Ok((StatusCode::CREATED, Json(created)))
    }

    async fn list_events(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<Vec<MenuEvent>>, AppError> {
        Ok(Json(resources.store.list_events().await?))
    }

    async fn get_event(
        State(resources): State<Arc<ServerResources>>,
        Path(event_id): Path<Uuid>,
    ) -> Result<Json<MenuEvent>, AppError> {
        Ok(Json(resources.store.get_event(event_id).await?))
    }

    async fn update_event(
        State(resources): State<Arc<ServerResources>>,
        Path(event_id): Path<Uuid>,
        Json(request): Json<EventRequest>,
    ) -> Result<Json<MenuEvent>, AppError> {
        let event = MenuEvent {
            id: event_id,
            name: request.name,
            event_type: request.event_type,
            date: request.date,
            total_persons: request.total_persons,
            status: request.status,
        };
        Ok(Json(resources.store.update_event(event).await?))
    }

    async fn delete_event(
        State(resources): State<Arc<ServerResources>>,
        Path(event_id): Path<Uuid>,
    ) -> Result<StatusCode, AppError> {
        resources.store.delete_event(event_id).await?;
        info!(event.id = %event_id, "Deleted menu event");
        Ok(StatusCode::NO_CONTENT)
    }

    async fn create_course(
        State(resources): State<Arc<ServerResources>>,
        Path(event_id): Path<Uuid>,
        Json(request): Json<CourseRequest>,
    ) -> Result<(StatusCode, Json<EventCourse>), AppError> {
        let course = EventCourse {
            id: Uuid::new_v4(),
            event_id,
            name: request.name,
            sort_order: request.sort_order,
            grams_per_person: request.grams_per_person,
        };
        let created = resources.store.create_course(course).await?;
        Ok((StatusCode::CREATED, Json(created)))
    }

    async fn list_courses(
        State(resources): State<Arc<ServerResources>>,
        Path(event_id): Path<Uuid>,
    ) -> Result<Json<serde_json::Value>, AppError> {
        // 404 for unknown events instead of an empty list
        resources.store.get_event(event_id).await?;
        let courses = resources.store.list_courses_with_items(event_id).await?;
        Ok(Json(serde_json::json!({ "courses": courses })))
    }

    async fn update_course(
        State(resources): State<Arc<ServerResources>>,
        Path(course_id): Path<Uuid>,
        Json(request): Json<CourseRequest>,
    ) -> Result<Json<EventCourse>, AppError> {
        // The event binding of a course is immutable; keep the stored one.
        let existing = resources.store.get_course(course_id).await?;
        let course = EventCourse {
            id: course_id,
            event_id: existing.event_id,
            name: request.name,
            sort_order: request.sort_order,
            grams_per_person: request.grams_per_person,
        };
        Ok(Json(resources.store.update_course(course).await?))
    }

    async fn delete_course(
        State(resources): State<Arc<ServerResources>>,
        Path(course_id): Path<Uuid>,
    ) -> Result<StatusCode, AppError> {
        resources.store.delete_course(course_id).await?;
        Ok(StatusCode::NO_CONTENT)
    }

    async fn create_item(
        State(resources): State<Arc<ServerResources>>,
        Path(course_id): Path<Uuid>,
        Json(request): Json<ItemRequest>,
    ) -> Result<(StatusCode, Json<MenuItem>), AppError> {
        let item = request.into_item(Uuid::new_v4(), course_id);
        let created = resources.store.create_item(item).await?;
        info!(
            item.id = %created.id,
            item.name = %created.name,
            course.id = %course_id,
            "Created menu item"
        );
        Ok((StatusCode::CREATED, Json(created)))
    }

    async fn update_item(
        State(resources): State<Arc<ServerResources>>,
        Path(item_id): Path<Uuid>,
        Json(request): Json<ItemRequest>,
    ) -> Result<Json<MenuItem>, AppError> {
        // The course binding of an item is immutable; keep the stored one.
        let existing = resources.store.get_item(item_id).await?;
        let item = request.into_item(item_id, existing.course_id);
        Ok(Json(resources.store.update_item(item).await?))
    }

    async fn delete_item(
        State(resources): State<Arc<ServerResources>>,
        Path(item_id): Path<Uuid>,
    ) -> Result<StatusCode, AppError> {
        resources.store.delete_item(item_id).await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
