// ABOUTME: Routes for submitting and listing per-person menu preferences
// ABOUTME: Accepts the preference form payload, blank distributions included
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Person preference routes
//!
//! A submission with no meat distribution is valid: the aggregator
//! excludes such people from the average rather than treating the
//! missing form as all-zeros.

use crate::errors::AppError;
use crate::models::{DrinkPreference, MeatDistribution, PersonPreference};
use crate::resources::ServerResources;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Request body for submitting one person's preferences
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceRequest {
    /// Name of the attendee
    pub person_name: String,
    /// Whether this describes a registered participant's partner
    #[serde(default)]
    pub is_partner: bool,
    /// Meat-distribution preference; omit to leave the form blank
    #[serde(default)]
    pub meat_distribution: Option<MeatDistribution>,
    /// Free-text dietary requirements
    #[serde(default)]
    pub dietary_requirements: Option<String>,
    /// Ticked drink choices
    #[serde(default)]
    pub drink_preferences: Vec<DrinkPreference>,
}

/// Preference route handlers
pub struct PreferenceRoutes;

impl PreferenceRoutes {
    /// Build the preference route group
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/events/:event_id/preferences",
                post(Self::submit).get(Self::list),
            )
            .with_state(resources)
    }

    async fn submit(
        State(resources): State<Arc<ServerResources>>,
        Path(event_id): Path<Uuid>,
        Json(request): Json<PreferenceRequest>,
    ) -> Result<(StatusCode, Json<PersonPreference>), AppError> {
        let preference = PersonPreference {
            id: Uuid::new_v4(),
            event_id,
            person_name: request.person_name,
            is_partner: request.is_partner,
            meat_distribution: request.meat_distribution,
            dietary_requirements: request.dietary_requirements,
            drink_preferences: request.drink_preferences,
        };
        let stored = resources.store.upsert_preference(preference).await?;
        info!(
            event.id = %event_id,
            person = %stored.person_name,
            has_distribution = stored.meat_distribution.is_some(),
            "Stored person preference"
        );
        Ok((StatusCode::CREATED, Json(stored)))
    }

    async fn list(
        State(resources): State<Arc<ServerResources>>,
        Path(event_id): Path<Uuid>,
    ) -> Result<Json<Vec<PersonPreference>>, AppError> {
        resources.store.get_event(event_id).await?;
        Ok(Json(resources.store.list_preferences(event_id).await?))
    }
}
