// ABOUTME: HTTP integration tests for the menu planning routes
// ABOUTME: Drives the full flow from event creation to shopping-list retrieval
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP tests covering:
//! - Event/course/item CRUD status codes and JSON shapes
//! - Preference submission
//! - Shopping-list and breakdown retrieval with camelCase payloads
//! - Error responses for invalid input and unknown resources

mod helpers;

use axum::Router;
use feast_planner::config::{PlanningConfig, ServerConfig};
use feast_planner::resources::ServerResources;
use feast_planner::routes;
use feast_planner::storage::InMemoryStore;
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};
use std::sync::Arc;

fn test_app() -> Router {
    let resources = Arc::new(ServerResources::new(
        Arc::new(InMemoryStore::new()),
        ServerConfig::default(),
        PlanningConfig::default(),
    ));
    routes::router(resources)
}

async fn create_event(app: &Router, total_persons: u32) -> Value {
    let response = AxumTestRequest::post("/api/events")
        .json(&json!({
            "name": "Summer BBQ",
            "eventType": "bbq",
            "date": "2026-07-04",
            "totalPersons": total_persons,
            "status": "active"
        }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);
    response.json()
}

async fn create_course(app: &Router, event_id: &str, grams_per_person: f64) -> Value {
    let response = AxumTestRequest::post(&format!("/api/events/{event_id}/courses"))
        .json(&json!({
            "name": "BBQ",
            "sortOrder": 0,
            "gramsPerPerson": grams_per_person
        }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);
    response.json()
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_and_ready() {
    let app = test_app();

    let health: Value = AxumTestRequest::get("/health").send(app.clone()).await.json();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["service"], "feast-planner-server");

    let ready: Value = AxumTestRequest::get("/ready").send(app).await.json();
    assert_eq!(ready["status"], "ready");
    assert_eq!(ready["checks"]["storage"], true);
}

// ============================================================================
// Event and Course CRUD
// ============================================================================

#[tokio::test]
async fn test_event_crud_round_trip() {
    let app = test_app();
    let event = create_event(&app, 20).await;
    let event_id = event["id"].as_str().unwrap();
    assert_eq!(event["totalPersons"], 20);
    assert_eq!(event["status"], "active");

    let fetched: Value = AxumTestRequest::get(&format!("/api/events/{event_id}"))
        .send(app.clone())
        .await
        .json();
    assert_eq!(fetched["name"], "Summer BBQ");

    let updated = AxumTestRequest::put(&format!("/api/events/{event_id}"))
        .json(&json!({
            "name": "Summer BBQ 2026",
            "eventType": "bbq",
            "date": "2026-07-04",
            "totalPersons": 25,
            "status": "active"
        }))
        .send(app.clone())
        .await;
    assert_eq!(updated.status(), 200);
    let updated: Value = updated.json();
    assert_eq!(updated["totalPersons"], 25);

    let listed: Value = AxumTestRequest::get("/api/events").send(app).await.json();
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unknown_event_returns_404_with_error_body() {
    let app = test_app();
    let response =
        AxumTestRequest::get("/api/events/00000000-0000-0000-0000-000000000000")
            .send(app)
            .await;
    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_delete_event_removes_it() {
    let app = test_app();
    let event = create_event(&app, 20).await;
    let event_id = event["id"].as_str().unwrap();
    create_course(&app, event_id, 300.0).await;

    let deleted = AxumTestRequest::delete(&format!("/api/events/{event_id}"))
        .send(app.clone())
        .await;
    assert_eq!(deleted.status(), 204);

    let fetched = AxumTestRequest::get(&format!("/api/events/{event_id}"))
        .send(app)
        .await;
    assert_eq!(fetched.status(), 404);
}

#[tokio::test]
async fn test_event_with_zero_persons_is_rejected() {
    let app = test_app();
    let response = AxumTestRequest::post("/api/events")
        .json(&json!({
            "name": "Empty party",
            "eventType": "bbq",
            "date": "2026-07-04",
            "totalPersons": 0
        }))
        .send(app)
        .await;
    assert_eq!(response.status(), 400);
}

// ============================================================================
// Item Management
// ============================================================================

#[tokio::test]
async fn test_item_create_update_delete() {
    let app = test_app();
    let event = create_event(&app, 20).await;
    let event_id = event["id"].as_str().unwrap();
    let course = create_course(&app, event_id, 300.0).await;
    let course_id = course["id"].as_str().unwrap();

    let created = AxumTestRequest::post(&format!("/api/courses/{course_id}/items"))
        .json(&json!({
            "name": "Brisket",
            "itemType": "protein",
            "category": "beef",
            "yieldPercentage": 80.0
        }))
        .send(app.clone())
        .await;
    assert_eq!(created.status(), 201);
    let created: Value = created.json();
    let item_id = created["id"].as_str().unwrap();
    // First item of its category owns the full share.
    assert_eq!(created["distributionPercentage"], 100.0);

    let updated = AxumTestRequest::put(&format!("/api/items/{item_id}"))
        .json(&json!({
            "name": "Brisket",
            "itemType": "protein",
            "category": "beef",
            "yieldPercentage": 80.0,
            "distributionPercentage": 60.0
        }))
        .send(app.clone())
        .await;
    assert_eq!(updated.status(), 200);
    let updated: Value = updated.json();
    assert_eq!(updated["distributionPercentage"], 60.0);

    let deleted = AxumTestRequest::delete(&format!("/api/items/{item_id}"))
        .send(app.clone())
        .await;
    assert_eq!(deleted.status(), 204);

    let courses: Value = AxumTestRequest::get(&format!("/api/events/{event_id}/courses"))
        .send(app)
        .await
        .json();
    assert_eq!(courses["courses"][0]["items"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_invalid_yield_is_rejected_with_details() {
    let app = test_app();
    let event = create_event(&app, 20).await;
    let course = create_course(&app, event["id"].as_str().unwrap(), 300.0).await;
    let course_id = course["id"].as_str().unwrap();

    let response = AxumTestRequest::post(&format!("/api/courses/{course_id}/items"))
        .json(&json!({
            "name": "Brisket",
            "itemType": "protein",
            "category": "beef",
            "yieldPercentage": 0.0
        }))
        .send(app)
        .await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");
    assert_eq!(body["error"]["details"]["yieldPercentage"], 0.0);
}

#[tokio::test]
async fn test_protein_without_category_is_rejected() {
    let app = test_app();
    let event = create_event(&app, 20).await;
    let course = create_course(&app, event["id"].as_str().unwrap(), 300.0).await;
    let course_id = course["id"].as_str().unwrap();

    let response = AxumTestRequest::post(&format!("/api/courses/{course_id}/items"))
        .json(&json!({
            "name": "Mystery meat",
            "itemType": "protein"
        }))
        .send(app)
        .await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELD");
}

// ============================================================================
// Preferences and Shopping List
// ============================================================================

#[tokio::test]
async fn test_full_flow_to_shopping_list() {
    let app = test_app();
    let event = create_event(&app, 20).await;
    let event_id = event["id"].as_str().unwrap();
    let course = create_course(&app, event_id, 300.0).await;
    let course_id = course["id"].as_str().unwrap();

    for (name, distribution) in [
        ("Brisket", json!(60.0)),
        ("Short ribs", json!(40.0)),
    ] {
        let response = AxumTestRequest::post(&format!("/api/courses/{course_id}/items"))
            .json(&json!({
                "name": name,
                "itemType": "protein",
                "category": "beef",
                "distributionPercentage": distribution
            }))
            .send(app.clone())
            .await;
        assert_eq!(response.status(), 201);
    }

    for (person, beef, chicken) in [("Alex", 80.0, 20.0), ("Sam", 60.0, 40.0)] {
        let response = AxumTestRequest::post(&format!("/api/events/{event_id}/preferences"))
            .json(&json!({
                "personName": person,
                "meatDistribution": { "beef": beef, "chicken": chicken }
            }))
            .send(app.clone())
            .await;
        assert_eq!(response.status(), 201);
    }

    let list: Value = AxumTestRequest::get(&format!("/api/events/{event_id}/shopping-list"))
        .send(app.clone())
        .await
        .json();

    assert_eq!(list["event"]["totalPersons"], 20);
    assert_eq!(list["preferenceCount"], 2);
    assert_eq!(list["averageMeatDistribution"]["beef"], 70.0);

    // 20 x 300 x 70% beef -> brisket 60% = 2520 g, ribs 40% = 1680 g.
    let items = list["courses"][0]["items"].as_array().unwrap();
    let grams_of = |name: &str| {
        items
            .iter()
            .find(|row| row["name"] == name)
            .unwrap()["purchaseGrams"]
            .as_f64()
            .unwrap()
    };
    assert!((grams_of("Brisket") - 2520.0).abs() < 1e-6);
    assert!((grams_of("Short ribs") - 1680.0).abs() < 1e-6);

    // The same payload carries the admin breakdown inline.
    assert_eq!(
        list["meatDistributionBreakdown"][0]["courseName"],
        "BBQ"
    );

    let breakdown: Value =
        AxumTestRequest::get(&format!("/api/events/{event_id}/meat-breakdown"))
            .send(app)
            .await
            .json();
    let beef_row = breakdown[0]["categories"]
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["category"] == "beef")
        .unwrap()
        .clone();
    assert_eq!(beef_row["personEquivalent"], 14.0);
    assert_eq!(beef_row["kilograms"], 4.2);
}

#[tokio::test]
async fn test_blank_preference_is_accepted() {
    let app = test_app();
    let event = create_event(&app, 20).await;
    let event_id = event["id"].as_str().unwrap();

    let response = AxumTestRequest::post(&format!("/api/events/{event_id}/preferences"))
        .json(&json!({ "personName": "Kim" }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);

    let listed: Value =
        AxumTestRequest::get(&format!("/api/events/{event_id}/preferences"))
            .send(app)
            .await
            .json();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert!(listed[0].get("meatDistribution").is_none());
}

#[tokio::test]
async fn test_shopping_list_for_unknown_event_is_404() {
    let app = test_app();
    let response = AxumTestRequest::get(
        "/api/events/00000000-0000-0000-0000-000000000000/shopping-list",
    )
    .send(app)
    .await;
    assert_eq!(response.status(), 404);
}
