//! HTTP surface of the action server.

pub mod health;
pub mod plans;
pub mod webhook;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use planform_core::PlanformError;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::state::AppState;

/// Error body returned for rejected requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_name: Option<String>,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map a domain error onto an HTTP response.
pub fn api_error(err: PlanformError) -> ApiError {
    let status = match &err {
        PlanformError::UnknownAction { .. } | PlanformError::UnknownPlan { .. } => {
            StatusCode::NOT_FOUND
        }
        PlanformError::NoActivePlan { .. } => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if err.is_client_error() {
        warn!("Rejected request: {}", err);
    } else {
        tracing::error!("Request failed: {}", err);
    }

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            action_name: err.action_name().map(String::from),
        }),
    )
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        // Action server protocol
        .route("/webhook", post(webhook::run_action))
        .route("/actions", get(webhook::list_actions))
        // Plan descriptors
        .route("/api/v1/plans", get(plans::list_plans))
        .route("/api/v1/plans/:name", get(plans::get_plan))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server() -> TestServer {
        let state = AppState::builtin().unwrap();
        TestServer::new(create_router(state)).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = server().get("/health").await;
        response.assert_status_ok();
        let body: health::HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.protocol, "planform/1.0");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.plans, 2);
        assert_eq!(body.actions, 5);
    }

    #[tokio::test]
    async fn test_webhook_parse_spa() {
        let response = server()
            .post("/webhook")
            .json(&json!({
                "next_action": "parse_spa",
                "sender_id": "guest-7",
                "tracker": {
                    "sender_id": "guest-7",
                    "latest_message": {"intent": {"name": "plan_affirm", "confidence": 0.98}},
                    "active_plan": {"name": "hotel_plan", "unfilled_slots": ["has_spa"]}
                }
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(
            body,
            json!({
                "events": [{"event": "slot", "name": "has_spa", "value": true}],
                "responses": []
            })
        );
    }

    #[tokio::test]
    async fn test_webhook_intent_without_name() {
        let server = server();
        let tracker = json!({
            "latest_message": {"intent": {}, "entities": [], "text": null}
        });

        let response = server
            .post("/webhook")
            .json(&json!({"next_action": "activate_restaurant", "tracker": tracker.clone()}))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(
            body["events"],
            json!([{"event": "start_plan", "name": "restaurant_plan"}])
        );

        let response = server
            .post("/webhook")
            .json(&json!({"next_action": "parse_spa", "tracker": tracker}))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["events"], json!([]));
    }

    #[tokio::test]
    async fn test_webhook_structured_slots() {
        let response = server()
            .post("/webhook")
            .json(&json!({
                "next_action": "parse_spa",
                "tracker": {
                    "slots": {"amenities": ["pool"], "stay": {"nights": 3}},
                    "latest_message": {"intent": {"name": "plan_deny"}}
                }
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(
            body["events"],
            json!([{"event": "slot", "name": "has_spa", "value": false}])
        );
    }

    #[tokio::test]
    async fn test_webhook_deactivate_plan() {
        let response = server()
            .post("/webhook")
            .json(&json!({
                "next_action": "deactivate_plan",
                "tracker": {"active_plan": {"name": "restaurant_plan", "unfilled_slots": []}}
            }))
            .await;

        response.assert_status_ok();
        let body: webhook::ActionResponse = response.json();
        assert_eq!(
            body.events,
            vec![
                planform_core::Event::EndPlan,
                planform_core::Event::slot_set("plan_complete", true),
            ]
        );
    }

    #[tokio::test]
    async fn test_webhook_unknown_action() {
        let response = server()
            .post("/webhook")
            .json(&json!({"next_action": "action_book_table", "tracker": {}}))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: ErrorResponse = response.json();
        assert_eq!(body.action_name.as_deref(), Some("action_book_table"));
    }

    #[tokio::test]
    async fn test_webhook_without_active_plan() {
        let response = server()
            .post("/webhook")
            .json(&json!({"next_action": "deactivate_plan"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_actions() {
        let response = server().get("/actions").await;
        response.assert_status_ok();
        let body: Vec<webhook::ActionInfo> = response.json();
        let names: Vec<&str> = body.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "activate_restaurant",
                "activate_hotel",
                "deactivate_plan_switch",
                "deactivate_plan",
                "parse_spa",
            ]
        );
    }

    #[tokio::test]
    async fn test_plan_endpoints() {
        let server = server();

        let names: Vec<String> = server.get("/api/v1/plans").await.json();
        assert_eq!(names, vec!["restaurant_plan", "hotel_plan"]);

        let response = server.get("/api/v1/plans/hotel_plan").await;
        response.assert_status_ok();
        let plan: planform_core::PlanDescriptor = response.json();
        assert_eq!(plan, planform_plans::hotel_plan().unwrap());

        server
            .get("/api/v1/plans/flight_plan")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
