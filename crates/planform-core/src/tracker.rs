//! Read-only view of the conversation that actions run against.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::SlotValue;

/// What an action may ask about the conversation.
///
/// The engine owns the conversation state; implementations only expose it.
pub trait TrackerContext {
    /// Name of the intent recognized in the most recent user message.
    fn latest_intent(&self) -> Option<&str>;

    /// Required slots of the active plan that are still unfilled, or `None`
    /// when no plan is active.
    fn unfilled_slots(&self) -> Option<Vec<String>>;
}

/// Intent recognized in a user message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentPrediction {
    /// Empty when the NLU recognized nothing.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub confidence: f64,
}

/// The most recent user message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatestMessage {
    #[serde(default)]
    pub intent: Option<IntentPrediction>,
    #[serde(default)]
    pub text: Option<String>,
}

/// The plan the engine currently runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivePlan {
    pub name: String,
    #[serde(default)]
    pub unfilled_slots: Vec<String>,
}

/// Tracker state as sent by the engine with each action call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerSnapshot {
    #[serde(default)]
    pub sender_id: String,
    #[serde(default)]
    pub slots: HashMap<String, SlotValue>,
    #[serde(default)]
    pub latest_message: Option<LatestMessage>,
    #[serde(default)]
    pub active_plan: Option<ActivePlan>,
}

impl TrackerSnapshot {
    pub fn new(sender_id: impl Into<String>) -> Self {
        Self {
            sender_id: sender_id.into(),
            ..Self::default()
        }
    }

    /// Set the latest recognized intent.
    pub fn with_intent(mut self, name: impl Into<String>) -> Self {
        let message = self.latest_message.get_or_insert_with(LatestMessage::default);
        message.intent = Some(IntentPrediction {
            name: name.into(),
            confidence: 1.0,
        });
        self
    }

    /// Mark a plan active with the given unfilled slots.
    pub fn with_active_plan<I, S>(mut self, name: impl Into<String>, unfilled: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.active_plan = Some(ActivePlan {
            name: name.into(),
            unfilled_slots: unfilled.into_iter().map(Into::into).collect(),
        });
        self
    }
}

impl TrackerContext for TrackerSnapshot {
    fn latest_intent(&self) -> Option<&str> {
        self.latest_message
            .as_ref()?
            .intent
            .as_ref()
            .map(|intent| intent.name.as_str())
            .filter(|name| !name.is_empty())
    }

    fn unfilled_slots(&self) -> Option<Vec<String>> {
        self.active_plan
            .as_ref()
            .map(|plan| plan.unfilled_slots.clone())
    }
}
