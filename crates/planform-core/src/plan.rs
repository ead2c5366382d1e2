//! Plan descriptors and the builder used to declare them.
//!
//! A plan is a form-like flow: the engine asks for each slot in order,
//! answers clarification requests, leaves the plan on exit intents and hands
//! the user off when it cannot continue. A descriptor only carries that
//! configuration; the engine runs it.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{PlanformError, Result};
use crate::types::{ActionKind, ActionRef};

/// How the engine collects one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSpec {
    /// Slot name.
    pub name: String,

    /// Utterance asking the user for the slot.
    pub ask_utterance: ActionRef,

    /// Utterance explaining the slot when the user asks what it means.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clarify_utterance: Option<ActionRef>,

    /// Action to run after the user answered, instead of plain extraction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_action: Option<ActionRef>,
}

impl SlotSpec {
    /// Create a slot asked with the given utterance template.
    pub fn new(name: impl Into<String>, ask_utterance: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ask_utterance: ActionRef::template(ask_utterance),
            clarify_utterance: None,
            follow_up_action: None,
        }
    }

    /// Set the clarification utterance template.
    pub fn clarify(mut self, utterance: impl Into<String>) -> Self {
        self.clarify_utterance = Some(ActionRef::template(utterance));
        self
    }

    /// Set the follow-up action.
    pub fn follow_up(mut self, action: impl Into<ActionRef>) -> Self {
        self.follow_up_action = Some(action.into());
        self
    }
}

/// Slots affected once a slot takes a particular value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRule {
    /// Slots that become required.
    #[serde(default)]
    pub need: Vec<String>,

    /// Slots that are no longer needed.
    #[serde(default)]
    pub lose: Vec<String>,
}

impl SlotRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn need<I, S>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.need.extend(slots.into_iter().map(Into::into));
        self
    }

    pub fn lose<I, S>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lose.extend(slots.into_iter().map(Into::into));
        self
    }
}

/// Rules keyed by slot name, then by observed slot value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleTable {
    rules: BTreeMap<String, BTreeMap<String, SlotRule>>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule, replacing any rule for the same slot and value.
    pub fn insert(&mut self, slot: impl Into<String>, value: impl Into<String>, rule: SlotRule) {
        self.rules
            .entry(slot.into())
            .or_default()
            .insert(value.into(), rule);
    }

    /// The rule for `slot` taking `value`, if any.
    pub fn rule_for(&self, slot: &str, value: &str) -> Option<&SlotRule> {
        self.rules.get(slot)?.get(value)
    }

    /// Values of `slot` that carry a rule.
    pub fn values_for(&self, slot: &str) -> Vec<&str> {
        self.rules
            .get(slot)
            .map(|values| values.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Iterate over `(slot, value, rule)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &SlotRule)> {
        self.rules.iter().flat_map(|(slot, values)| {
            values
                .iter()
                .map(move |(value, rule)| (slot.as_str(), value.as_str(), rule))
        })
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Static description of a plan, registered with the engine by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDescriptor {
    /// Registration name of the plan.
    pub name: String,

    /// Slots to collect, in asking order.
    pub slots: Vec<SlotSpec>,

    /// Action run once every required slot is filled.
    pub finish_action: ActionRef,

    /// Exit intent -> action leaving the plan.
    pub exit_actions: BTreeMap<String, ActionRef>,

    /// Chitchat intent -> action answering it without leaving the plan.
    pub chitchat_actions: BTreeMap<String, ActionRef>,

    /// Action explaining what the plan still needs.
    pub details_action: Option<ActionRef>,

    /// Value-dependent slot requirements.
    pub rules: RuleTable,

    /// Hand-off action when the plan cannot proceed.
    pub failure_action: Option<ActionRef>,
}

/// Builder for creating plan descriptors with a fluent API.
#[derive(Debug, Default)]
pub struct PlanDescriptorBuilder {
    name: String,
    slots: Vec<SlotSpec>,
    finish_action: Option<ActionRef>,
    exit_actions: BTreeMap<String, ActionRef>,
    chitchat_actions: BTreeMap<String, ActionRef>,
    details_action: Option<ActionRef>,
    rules: RuleTable,
    failure_action: Option<ActionRef>,
}

impl PlanDescriptorBuilder {
    /// Create a new builder for the named plan.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a slot. Slots are asked in the order they are added.
    pub fn slot(mut self, slot: SlotSpec) -> Self {
        self.slots.push(slot);
        self
    }

    /// Set the finish action.
    pub fn finish_action(mut self, action: impl Into<ActionRef>) -> Self {
        self.finish_action = Some(action.into());
        self
    }

    /// Map an exit intent to the action that leaves the plan.
    pub fn exit(mut self, intent: impl Into<String>, action: impl Into<ActionRef>) -> Self {
        self.exit_actions.insert(intent.into(), action.into());
        self
    }

    /// Map a chitchat intent to the template answering it.
    pub fn chitchat(mut self, intent: impl Into<String>, template: impl Into<String>) -> Self {
        self.chitchat_actions
            .insert(intent.into(), ActionRef::template(template));
        self
    }

    /// Set the details template.
    pub fn details(mut self, template: impl Into<String>) -> Self {
        self.details_action = Some(ActionRef::template(template));
        self
    }

    /// Add a rule for `slot` taking `value`.
    pub fn rule(mut self, slot: impl Into<String>, value: impl Into<String>, rule: SlotRule) -> Self {
        self.rules.insert(slot, value, rule);
        self
    }

    /// Set the hand-off template.
    pub fn failure_action(mut self, template: impl Into<String>) -> Self {
        self.failure_action = Some(ActionRef::template(template));
        self
    }

    /// Build and validate the descriptor.
    pub fn build(self) -> Result<PlanDescriptor> {
        let invalid = |message: String| PlanformError::InvalidPlan {
            plan: self.name.clone(),
            message,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("Plan name cannot be empty".to_string()));
        }
        if self.slots.is_empty() {
            return Err(invalid("Plan must collect at least one slot".to_string()));
        }

        let mut declared = HashSet::new();
        for slot in &self.slots {
            if !declared.insert(slot.name.as_str()) {
                return Err(invalid(format!("Slot {} is declared twice", slot.name)));
            }
        }

        for (slot, value, rule) in self.rules.iter() {
            if !declared.contains(slot) {
                return Err(invalid(format!("Rule on undeclared slot {}", slot)));
            }
            if let Some(unknown) = rule
                .need
                .iter()
                .chain(&rule.lose)
                .find(|s| !declared.contains(s.as_str()))
            {
                return Err(invalid(format!(
                    "Rule {}={} references undeclared slot {}",
                    slot, value, unknown
                )));
            }
        }

        let finish_action = self
            .finish_action
            .clone()
            .ok_or_else(|| invalid("Finish action is required".to_string()))?;

        Ok(PlanDescriptor {
            name: self.name,
            slots: self.slots,
            finish_action,
            exit_actions: self.exit_actions,
            chitchat_actions: self.chitchat_actions,
            details_action: self.details_action,
            rules: self.rules,
            failure_action: self.failure_action,
        })
    }
}

impl PlanDescriptor {
    /// Create a new PlanDescriptorBuilder.
    pub fn builder(name: impl Into<String>) -> PlanDescriptorBuilder {
        PlanDescriptorBuilder::new(name)
    }

    /// Look up a slot by name.
    pub fn slot(&self, name: &str) -> Option<&SlotSpec> {
        self.slots.iter().find(|s| s.name == name)
    }

    /// Slot names in asking order.
    pub fn slot_names(&self) -> Vec<&str> {
        self.slots.iter().map(|s| s.name.as_str()).collect()
    }

    /// Action leaving the plan for an exit intent.
    pub fn exit_action(&self, intent: &str) -> Option<&ActionRef> {
        self.exit_actions.get(intent)
    }

    /// Action answering a chitchat intent.
    pub fn chitchat_action(&self, intent: &str) -> Option<&ActionRef> {
        self.chitchat_actions.get(intent)
    }

    /// Every one of our actions this plan refers to, without duplicates.
    pub fn referenced_actions(&self) -> Vec<ActionKind> {
        let refs = std::iter::once(&self.finish_action)
            .chain(self.exit_actions.values())
            .chain(self.slots.iter().filter_map(|s| s.follow_up_action.as_ref()));

        let mut kinds = Vec::new();
        for kind in refs.filter_map(ActionRef::action_kind) {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        kinds
    }
}
