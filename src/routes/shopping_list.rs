// ABOUTME: Read-only routes exposing the computed shopping list and meat breakdown
// ABOUTME: Thin wrappers over MenuPlanningService; nothing here mutates state
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shopping list and breakdown routes

use crate::errors::AppError;
use crate::models::MeatDistributionBreakdown;
use crate::resources::ServerResources;
use crate::services::{MenuPlanningService, ShoppingListResponse};
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use uuid::Uuid;

/// Shopping list route handlers
pub struct ShoppingListRoutes;

impl ShoppingListRoutes {
    /// Build the shopping-list route group
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/events/:event_id/shopping-list",
                get(Self::shopping_list),
            )
            .route(
                "/api/events/:event_id/meat-breakdown",
                get(Self::meat_breakdown),
            )
            .with_state(resources)
    }

    async fn shopping_list(
        State(resources): State<Arc<ServerResources>>,
        Path(event_id): Path<Uuid>,
    ) -> Result<Json<ShoppingListResponse>, AppError> {
        let service =
            MenuPlanningService::new(resources.store.clone(), resources.planning.clone());
        Ok(Json(service.shopping_list(event_id).await?))
    }

    async fn meat_breakdown(
        State(resources): State<Arc<ServerResources>>,
        Path(event_id): Path<Uuid>,
    ) -> Result<Json<Vec<MeatDistributionBreakdown>>, AppError> {
        let service =
            MenuPlanningService::new(resources.store.clone(), resources.planning.clone());
        Ok(Json(service.meat_breakdown(event_id).await?))
    }
}
