//! Static dispatch from action names to actions.

use planform_core::{ActionKind, Event, Result, TrackerContext};
use tracing::debug;

use crate::action::{
    Action, SpaAnswerParse, StartHotelPlan, StartRestaurantPlan, StopPlan, StopPlanSwitch,
};

/// The action registered for `kind`.
pub fn action_for(kind: ActionKind) -> &'static dyn Action {
    match kind {
        ActionKind::ActivateRestaurant => &StartRestaurantPlan,
        ActionKind::ActivateHotel => &StartHotelPlan,
        ActionKind::DeactivatePlanSwitch => &StopPlanSwitch,
        ActionKind::DeactivatePlan => &StopPlan,
        ActionKind::ParseSpa => &SpaAnswerParse,
    }
}

/// Every registered action, in registration order.
pub fn registered_actions() -> impl Iterator<Item = &'static dyn Action> {
    ActionKind::ALL.into_iter().map(action_for)
}

/// Run the action registered for `kind`.
pub fn run_action(kind: ActionKind, tracker: &dyn TrackerContext) -> Result<Vec<Event>> {
    let action = action_for(kind);
    let events = action.run(tracker)?;
    debug!("Action {} returned {} events", action, events.len());
    Ok(events)
}

/// Run the action registered under `name`.
pub fn dispatch(name: &str, tracker: &dyn TrackerContext) -> Result<Vec<Event>> {
    let kind: ActionKind = name.parse()?;
    run_action(kind, tracker)
}
