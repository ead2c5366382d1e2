//! Plan descriptor endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use planform_core::PlanDescriptor;

use super::{api_error, ApiError};
use crate::state::AppState;

/// List the names of all registered plans.
pub async fn list_plans(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.plans.names().into_iter().map(String::from).collect())
}

/// Get a plan descriptor by name.
pub async fn get_plan(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PlanDescriptor>, ApiError> {
    let plan = state.plans.get(&name).map_err(api_error)?;
    Ok(Json(plan.clone()))
}
