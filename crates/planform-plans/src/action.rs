//! The actions the dialogue engine runs by name.

use std::fmt;

use planform_core::intent::AnswerIntent;
use planform_core::{
    ActionKind, Event, PlanKind, PlanformError, Result, TrackerContext, PLAN_COMPLETE_SLOT,
};

/// Slot filled by [`SpaAnswerParse`].
pub const HAS_SPA_SLOT: &str = "has_spa";

/// Trait for actions.
pub trait Action: Send + Sync + fmt::Display {
    /// Which registered action this is.
    fn kind(&self) -> ActionKind;

    /// The name the engine dispatches this action by.
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Run the action against the current conversation.
    fn run(&self, tracker: &dyn TrackerContext) -> Result<Vec<Event>>;
}

/// Starts the restaurant plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartRestaurantPlan;

impl Action for StartRestaurantPlan {
    fn kind(&self) -> ActionKind {
        ActionKind::ActivateRestaurant
    }

    fn run(&self, _tracker: &dyn TrackerContext) -> Result<Vec<Event>> {
        Ok(vec![Event::start_plan(PlanKind::Restaurant)])
    }
}

impl fmt::Display for StartRestaurantPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActivatePlan('{}')", self.name())
    }
}

/// Starts the hotel plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartHotelPlan;

impl Action for StartHotelPlan {
    fn kind(&self) -> ActionKind {
        ActionKind::ActivateHotel
    }

    fn run(&self, _tracker: &dyn TrackerContext) -> Result<Vec<Event>> {
        Ok(vec![Event::start_plan(PlanKind::Hotel)])
    }
}

impl fmt::Display for StartHotelPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActivatePlan('{}')", self.name())
    }
}

/// Ends the active plan when the user asks for something another plan
/// handles. Completion is not recorded.
#[derive(Debug, Clone, Copy, Default)]
pub struct StopPlanSwitch;

impl Action for StopPlanSwitch {
    fn kind(&self) -> ActionKind {
        ActionKind::DeactivatePlanSwitch
    }

    fn run(&self, _tracker: &dyn TrackerContext) -> Result<Vec<Event>> {
        Ok(vec![Event::end_plan()])
    }
}

impl fmt::Display for StopPlanSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopPlanSwitch('{}')", self.name())
    }
}

/// Ends the active plan and records in `plan_complete` whether every
/// required slot was filled.
#[derive(Debug, Clone, Copy, Default)]
pub struct StopPlan;

impl Action for StopPlan {
    fn kind(&self) -> ActionKind {
        ActionKind::DeactivatePlan
    }

    fn run(&self, tracker: &dyn TrackerContext) -> Result<Vec<Event>> {
        let unfilled = tracker
            .unfilled_slots()
            .ok_or_else(|| PlanformError::NoActivePlan {
                action: self.name().to_string(),
            })?;
        let complete = unfilled.is_empty();

        Ok(vec![
            Event::end_plan(),
            Event::slot_set(PLAN_COMPLETE_SLOT, complete),
        ])
    }
}

impl fmt::Display for StopPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopPlan('{}')", self.name())
    }
}

/// Turns a yes/no answer to the spa question into the `has_spa` slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaAnswerParse;

impl Action for SpaAnswerParse {
    fn kind(&self) -> ActionKind {
        ActionKind::ParseSpa
    }

    fn run(&self, tracker: &dyn TrackerContext) -> Result<Vec<Event>> {
        let answer = AnswerIntent::classify(tracker.latest_intent());
        Ok(answer
            .as_bool()
            .map(|has_spa| Event::slot_set(HAS_SPA_SLOT, has_spa))
            .into_iter()
            .collect())
    }
}

impl fmt::Display for SpaAnswerParse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SpaAnswerParse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planform_core::{SlotValue, TrackerSnapshot};

    fn tracker() -> TrackerSnapshot {
        TrackerSnapshot::new("test-user")
    }

    #[test]
    fn test_start_restaurant_ignores_tracker() {
        let busy = tracker()
            .with_intent("plan_deny")
            .with_active_plan("hotel_plan", ["enddate"]);
        for t in [tracker(), busy] {
            let events = StartRestaurantPlan.run(&t).unwrap();
            assert_eq!(
                events,
                vec![Event::StartPlan {
                    name: "restaurant_plan".into()
                }]
            );
        }
    }

    #[test]
    fn test_start_hotel() {
        let events = StartHotelPlan.run(&tracker()).unwrap();
        assert_eq!(events, vec![Event::start_plan(PlanKind::Hotel)]);
        assert_eq!(StartHotelPlan.name(), "activate_hotel");
    }

    #[test]
    fn test_stop_plan_switch() {
        let t = tracker().with_active_plan("restaurant_plan", ["price"]);
        let events = StopPlanSwitch.run(&t).unwrap();
        assert_eq!(events, vec![Event::EndPlan]);
        assert!(!events.iter().any(Event::is_slot_set));
    }

    #[test]
    fn test_stop_plan_complete() {
        let t = tracker().with_active_plan("restaurant_plan", Vec::<String>::new());
        let events = StopPlan.run(&t).unwrap();
        assert_eq!(
            events,
            vec![Event::EndPlan, Event::slot_set("plan_complete", true)]
        );
    }

    #[test]
    fn test_stop_plan_incomplete() {
        for unfilled in [vec!["location"], vec!["startdate", "has_spa"]] {
            let t = tracker().with_active_plan("hotel_plan", unfilled);
            let events = StopPlan.run(&t).unwrap();
            assert_eq!(events.len(), 2);
            assert_eq!(events[0], Event::EndPlan);
            assert_eq!(
                events[1],
                Event::SlotSet {
                    name: "plan_complete".into(),
                    value: SlotValue::Bool(false)
                }
            );
        }
    }

    #[test]
    fn test_stop_plan_without_active_plan() {
        let err = StopPlan.run(&tracker()).unwrap_err();
        assert_eq!(
            err,
            PlanformError::NoActivePlan {
                action: "deactivate_plan".into()
            }
        );
    }

    #[test]
    fn test_spa_affirm() {
        let events = SpaAnswerParse.run(&tracker().with_intent("plan_affirm")).unwrap();
        assert_eq!(events, vec![Event::slot_set("has_spa", true)]);
    }

    #[test]
    fn test_spa_deny() {
        let events = SpaAnswerParse.run(&tracker().with_intent("plan_deny")).unwrap();
        assert_eq!(events, vec![Event::slot_set("has_spa", false)]);
    }

    #[test]
    fn test_spa_other_intents() {
        for intent in ["goodbye", "chitchat", "request_restaurant", "affirm"] {
            let events = SpaAnswerParse.run(&tracker().with_intent(intent)).unwrap();
            assert!(events.is_empty(), "intent {} produced {:?}", intent, events);
        }
        assert!(SpaAnswerParse.run(&tracker()).unwrap().is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            StartRestaurantPlan.to_string(),
            "ActivatePlan('activate_restaurant')"
        );
        assert_eq!(StartHotelPlan.to_string(), "ActivatePlan('activate_hotel')");
        assert_eq!(
            StopPlanSwitch.to_string(),
            "StopPlanSwitch('deactivate_plan_switch')"
        );
        assert_eq!(StopPlan.to_string(), "StopPlan('deactivate_plan')");
        assert_eq!(SpaAnswerParse.to_string(), "SpaAnswerParse");
    }
}
