//! Liveness endpoint.

use axum::{extract::State, Json};
use planform_core::ActionKind;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub protocol: String,
    /// Number of plans the node serves.
    pub plans: usize,
    /// Number of actions the node can run.
    pub actions: usize,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        protocol: "planform/1.0".to_string(),
        plans: state.plans.len(),
        actions: ActionKind::ALL.len(),
    })
}
