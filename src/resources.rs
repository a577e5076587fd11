// ABOUTME: Shared server resources threaded through every route handler
// ABOUTME: Bundles the store and configuration behind Arc for cheap cloning
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Centralized server resources
//!
//! One `Arc<ServerResources>` is built at startup and handed to every
//! route group, so handlers share a single store and configuration
//! instead of each owning their own copies.

use crate::config::{PlanningConfig, ServerConfig};
use crate::storage::MenuStore;
use std::sync::Arc;

/// Shared resources for all route handlers
pub struct ServerResources {
    /// Storage backend for events, courses, items, and preferences
    pub store: Arc<dyn MenuStore>,
    /// HTTP server configuration
    pub config: Arc<ServerConfig>,
    /// Planning defaults used by the calculation core
    pub planning: Arc<PlanningConfig>,
}

impl ServerResources {
    /// Bundle the store and configuration for handler injection
    #[must_use]
    pub fn new(store: Arc<dyn MenuStore>, config: ServerConfig, planning: PlanningConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
            planning: Arc::new(planning),
        }
    }
}

impl std::fmt::Debug for ServerResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerResources")
            .field("config", &self.config)
            .field("planning", &self.planning)
            .finish_non_exhaustive()
    }
}
