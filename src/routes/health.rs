// ABOUTME: Liveness and readiness endpoints for deployment probes
// ABOUTME: Reports service identity and storage reachability
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Health check routes

use crate::constants::service_names;
use crate::resources::ServerResources;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

/// Health check route handlers
pub struct HealthRoutes;

impl HealthRoutes {
    /// Build the health route group
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::health))
            .route("/ready", get(Self::ready))
            .with_state(resources)
    }

    /// Liveness probe: process is up and serving
    async fn health(State(resources): State<Arc<ServerResources>>) -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": service_names::FEAST_PLANNER_SERVER,
            "version": env!("CARGO_PKG_VERSION"),
            "environment": resources.config.environment.as_str(),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }))
    }

    /// Readiness probe: storage answers queries
    async fn ready(State(resources): State<Arc<ServerResources>>) -> Json<Value> {
        let storage_ok = resources.store.list_events().await.is_ok();
        Json(json!({
            "status": if storage_ok { "ready" } else { "degraded" },
            "checks": { "storage": storage_ok },
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }))
    }
}
