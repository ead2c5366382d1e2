//! Common types used across Planform.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlanformError;

/// The actions this workspace registers with the dialogue engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Starts the restaurant plan.
    ActivateRestaurant,
    /// Starts the hotel plan.
    ActivateHotel,
    /// Ends the active plan because the user switched to another one.
    DeactivatePlanSwitch,
    /// Ends the active plan and records whether it was completed.
    DeactivatePlan,
    /// Turns a yes/no answer into the `has_spa` slot.
    ParseSpa,
}

impl ActionKind {
    /// Every action, in registration order.
    pub const ALL: [ActionKind; 5] = [
        ActionKind::ActivateRestaurant,
        ActionKind::ActivateHotel,
        ActionKind::DeactivatePlanSwitch,
        ActionKind::DeactivatePlan,
        ActionKind::ParseSpa,
    ];

    /// The name the engine dispatches this action by.
    pub fn name(&self) -> &'static str {
        match self {
            ActionKind::ActivateRestaurant => "activate_restaurant",
            ActionKind::ActivateHotel => "activate_hotel",
            ActionKind::DeactivatePlanSwitch => "deactivate_plan_switch",
            ActionKind::DeactivatePlan => "deactivate_plan",
            ActionKind::ParseSpa => "parse_spa",
        }
    }

    /// Resolve a registration name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActionKind {
    type Err = PlanformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| PlanformError::UnknownAction {
            name: s.to_string(),
        })
    }
}

/// The plans this workspace registers with the dialogue engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanKind {
    #[serde(rename = "restaurant_plan")]
    Restaurant,
    #[serde(rename = "hotel_plan")]
    Hotel,
}

impl PlanKind {
    /// Every plan, in registration order.
    pub const ALL: [PlanKind; 2] = [PlanKind::Restaurant, PlanKind::Hotel];

    /// The name the engine registers this plan under.
    pub fn name(&self) -> &'static str {
        match self {
            PlanKind::Restaurant => "restaurant_plan",
            PlanKind::Hotel => "hotel_plan",
        }
    }

    /// Resolve a registration name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value stored in a slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    /// Lists, objects and anything else the engine stores in a slot.
    Json(serde_json::Value),
}

impl From<bool> for SlotValue {
    fn from(value: bool) -> Self {
        SlotValue::Bool(value)
    }
}

impl From<f64> for SlotValue {
    fn from(value: f64) -> Self {
        SlotValue::Number(value)
    }
}

impl From<&str> for SlotValue {
    fn from(value: &str) -> Self {
        SlotValue::Text(value.to_string())
    }
}

impl From<String> for SlotValue {
    fn from(value: String) -> Self {
        SlotValue::Text(value)
    }
}

/// Prefix the engine uses for response templates.
pub const TEMPLATE_PREFIX: &str = "utter_";

/// Reference to something the engine can run: one of our actions or one of
/// the engine's response templates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ActionRef {
    Action(ActionKind),
    Template(String),
}

impl ActionRef {
    /// Reference a response template by name.
    pub fn template(name: impl Into<String>) -> Self {
        ActionRef::Template(name.into())
    }

    /// The name the engine knows this action by.
    pub fn name(&self) -> &str {
        match self {
            ActionRef::Action(kind) => kind.name(),
            ActionRef::Template(name) => name,
        }
    }

    /// Returns the action kind if this references one of our actions.
    pub fn action_kind(&self) -> Option<ActionKind> {
        match self {
            ActionRef::Action(kind) => Some(*kind),
            ActionRef::Template(_) => None,
        }
    }
}

impl From<ActionKind> for ActionRef {
    fn from(kind: ActionKind) -> Self {
        ActionRef::Action(kind)
    }
}

impl From<ActionRef> for String {
    fn from(action: ActionRef) -> Self {
        match action {
            ActionRef::Action(kind) => kind.name().to_string(),
            ActionRef::Template(name) => name,
        }
    }
}

impl TryFrom<String> for ActionRef {
    type Error = PlanformError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        if name.starts_with(TEMPLATE_PREFIX) {
            return Ok(ActionRef::Template(name));
        }
        ActionKind::from_name(&name)
            .map(ActionRef::Action)
            .ok_or(PlanformError::InvalidActionRef(name))
    }
}

impl FromStr for ActionRef {
    type Err = PlanformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionRef::try_from(s.to_string())
    }
}

impl fmt::Display for ActionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
