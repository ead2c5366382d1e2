//! Action webhook called by the dialogue engine.

use axum::Json;
use planform_core::{Event, TrackerSnapshot};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{api_error, ApiError};

/// Request to run one action.
#[derive(Debug, Deserialize)]
pub struct ActionCall {
    /// Name of the action to run.
    pub next_action: String,

    /// Conversation the action runs for.
    #[serde(default)]
    pub sender_id: Option<String>,

    /// Conversation state at the time of the call.
    #[serde(default)]
    pub tracker: TrackerSnapshot,
}

/// Events for the engine to apply, and messages for the user.
#[derive(Debug, Serialize, Deserialize)]
pub struct ActionResponse {
    pub events: Vec<Event>,
    /// Our actions never talk to the user directly; always empty.
    pub responses: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ActionInfo {
    pub name: String,
}

/// Run the named action against the supplied tracker.
pub async fn run_action(Json(call): Json<ActionCall>) -> Result<Json<ActionResponse>, ApiError> {
    let sender = call
        .sender_id
        .as_deref()
        .unwrap_or(call.tracker.sender_id.as_str());

    let events = planform_plans::dispatch(&call.next_action, &call.tracker).map_err(api_error)?;

    let kinds: Vec<&str> = events.iter().map(Event::kind).collect();
    info!("Ran action {} for {}: {:?}", call.next_action, sender, kinds);

    Ok(Json(ActionResponse {
        events,
        responses: Vec::new(),
    }))
}

/// List the actions this node can run.
pub async fn list_actions() -> Json<Vec<ActionInfo>> {
    let actions = planform_plans::registered_actions()
        .map(|action| ActionInfo {
            name: action.name().to_string(),
        })
        .collect();
    Json(actions)
}
