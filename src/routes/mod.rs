// ABOUTME: HTTP route groups for the menu planning server
// ABOUTME: Each group owns its handlers; this module assembles the full router
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP routes
//!
//! Routes are grouped by concern and merged into one [`Router`] here.
//! Handlers are deliberately thin wrappers over the storage and service
//! layers; anything resembling business logic belongs below this layer.

pub mod events;
pub mod health;
pub mod preferences;
pub mod shopping_list;

use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use events::EventRoutes;
pub use health::HealthRoutes;
pub use preferences::PreferenceRoutes;
pub use shopping_list::ShoppingListRoutes;

/// Assemble the complete application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(resources.clone()))
        .merge(EventRoutes::routes(resources.clone()))
        .merge(PreferenceRoutes::routes(resources.clone()))
        .merge(ShoppingListRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
