//! The restaurant and hotel plans and the registry the engine loads them from.

use planform_core::intent::{CHITCHAT, GOODBYE, REQUEST_HOTEL, REQUEST_RESTAURANT};
use planform_core::{
    ActionKind, PlanDescriptor, PlanKind, PlanformError, Result, SlotRule, SlotSpec,
};
use tracing::info;

const CHITCHAT_UTTERANCE: &str = "utter_chitchat";
const DETAILS_UTTERANCE: &str = "utter_ask_details";
const HAND_OFF_UTTERANCE: &str = "utter_human_hand_off";

/// Plan collecting a restaurant booking.
pub fn restaurant_plan() -> Result<PlanDescriptor> {
    PlanDescriptor::builder(PlanKind::Restaurant.name())
        .slot(SlotSpec::new("price", "utter_ask_price").clarify("utter_explain_price_restaurant"))
        .slot(
            SlotSpec::new("cuisine", "utter_ask_cuisine")
                .clarify("utter_explain_cuisine_restaurant"),
        )
        .slot(SlotSpec::new("people", "utter_ask_people").clarify("utter_explain_people_restaurant"))
        .slot(
            SlotSpec::new("location", "utter_ask_location")
                .clarify("utter_explain_location_restaurant"),
        )
        .finish_action(ActionKind::DeactivatePlan)
        .exit(GOODBYE, ActionKind::DeactivatePlan)
        .exit(REQUEST_HOTEL, ActionKind::DeactivatePlanSwitch)
        .chitchat(CHITCHAT, CHITCHAT_UTTERANCE)
        .details(DETAILS_UTTERANCE)
        // Fast food needs no booking size or budget.
        .rule(
            "cuisine",
            "mcdonalds",
            SlotRule::new().need(["location"]).lose(["people", "price"]),
        )
        .failure_action(HAND_OFF_UTTERANCE)
        .build()
}

/// Plan collecting a hotel booking.
pub fn hotel_plan() -> Result<PlanDescriptor> {
    PlanDescriptor::builder(PlanKind::Hotel.name())
        .slot(SlotSpec::new("startdate", "utter_ask_startdate").clarify("utter_explain_startdate_hotel"))
        .slot(SlotSpec::new("enddate", "utter_ask_enddate").clarify("utter_explain_enddate_hotel"))
        .slot(SlotSpec::new("location", "utter_ask_location").clarify("utter_explain_location_hotel"))
        .slot(SlotSpec::new("has_spa", "utter_ask_has_spa").follow_up(ActionKind::ParseSpa))
        .finish_action(ActionKind::DeactivatePlan)
        .exit(GOODBYE, ActionKind::DeactivatePlan)
        .exit(REQUEST_RESTAURANT, ActionKind::DeactivatePlanSwitch)
        .chitchat(CHITCHAT, CHITCHAT_UTTERANCE)
        .details(DETAILS_UTTERANCE)
        .failure_action(HAND_OFF_UTTERANCE)
        .build()
}

/// Build the descriptor for a built-in plan.
pub fn descriptor(kind: PlanKind) -> Result<PlanDescriptor> {
    match kind {
        PlanKind::Restaurant => restaurant_plan(),
        PlanKind::Hotel => hotel_plan(),
    }
}

/// Plans the engine can start, looked up by name.
#[derive(Debug, Clone, Default)]
pub struct PlanRegistry {
    plans: Vec<PlanDescriptor>,
}

impl PlanRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the restaurant and hotel plans.
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        for kind in PlanKind::ALL {
            registry.register(descriptor(kind)?)?;
        }
        info!("Registered {} built-in plans", registry.len());
        Ok(registry)
    }

    /// Add a plan. Names must be unique.
    pub fn register(&mut self, plan: PlanDescriptor) -> Result<()> {
        if self.plans.iter().any(|p| p.name == plan.name) {
            return Err(PlanformError::InvalidPlan {
                plan: plan.name,
                message: "A plan with this name is already registered".to_string(),
            });
        }
        self.plans.push(plan);
        Ok(())
    }

    /// Look up a plan by name.
    pub fn get(&self, name: &str) -> Result<&PlanDescriptor> {
        self.plans
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| PlanformError::UnknownPlan {
                name: name.to_string(),
            })
    }

    /// Names of all registered plans, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.plans.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlanDescriptor> {
        self.plans.iter()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}
