//! # Planform Plans
//!
//! The restaurant and hotel plans and the actions that start, stop and feed
//! them.

pub mod action;
pub mod dispatch;
pub mod plans;

pub use action::{
    Action, SpaAnswerParse, StartHotelPlan, StartRestaurantPlan, StopPlan, StopPlanSwitch,
};
pub use dispatch::{action_for, dispatch, registered_actions, run_action};
pub use plans::{hotel_plan, restaurant_plan, PlanRegistry};
