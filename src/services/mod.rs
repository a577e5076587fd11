// ABOUTME: Service layer gluing storage to the calculation core
// ABOUTME: Routes call services; services load data and run the pure calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer
//!
//! Handlers stay thin: they parse the request, call a service, and shape
//! the HTTP response. The services here own the load-aggregate-calculate
//! sequence so the same logic backs every route that needs it.

pub mod menu_planning;

pub use menu_planning::{MenuPlanningService, ShoppingListResponse};
