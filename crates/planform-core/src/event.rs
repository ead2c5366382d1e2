//! Events returned by actions.
//!
//! The dialogue engine applies these to the conversation; actions only build
//! them.

use serde::{Deserialize, Serialize};

use crate::types::{PlanKind, SlotValue};

/// Slot recording whether a plan ended with every required slot filled.
pub const PLAN_COMPLETE_SLOT: &str = "plan_complete";

/// An event for the dialogue engine to apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// Activate the named plan.
    StartPlan {
        /// Registration name of the plan.
        name: String,
    },
    /// Deactivate whatever plan is active.
    EndPlan,
    /// Set a slot on the conversation.
    #[serde(rename = "slot")]
    SlotSet {
        /// Slot name.
        name: String,
        /// New value.
        value: SlotValue,
    },
}

impl Event {
    /// Create a start plan event.
    pub fn start_plan(plan: PlanKind) -> Self {
        Event::StartPlan {
            name: plan.name().to_string(),
        }
    }

    /// Create an end plan event.
    pub fn end_plan() -> Self {
        Event::EndPlan
    }

    /// Create a slot set event.
    pub fn slot_set(name: impl Into<String>, value: impl Into<SlotValue>) -> Self {
        Event::SlotSet {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn is_slot_set(&self) -> bool {
        matches!(self, Event::SlotSet { .. })
    }

    /// Returns the wire tag of this event.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::StartPlan { .. } => "start_plan",
            Event::EndPlan => "end_plan",
            Event::SlotSet { .. } => "slot",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_start_plan_wire_format() {
        let event = Event::start_plan(PlanKind::Restaurant);
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"event": "start_plan", "name": "restaurant_plan"})
        );
    }

    #[test]
    fn test_end_plan_wire_format() {
        assert_eq!(
            serde_json::to_value(Event::end_plan()).unwrap(),
            json!({"event": "end_plan"})
        );
    }

    #[test]
    fn test_slot_set_wire_format() {
        let event = Event::slot_set(PLAN_COMPLETE_SLOT, false);
        assert!(event.is_slot_set());
        assert_eq!(event.kind(), "slot");
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"event": "slot", "name": "plan_complete", "value": false})
        );
    }

    #[test]
    fn test_deserialize_engine_event() {
        let event: Event =
            serde_json::from_value(json!({"event": "slot", "name": "cuisine", "value": "thai"}))
                .unwrap();
        assert_eq!(event, Event::slot_set("cuisine", "thai"));
    }
}
