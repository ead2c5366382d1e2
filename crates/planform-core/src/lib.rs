//! # Planform Core
//!
//! Core types for plan-driven dialogue actions.
//!
//! This crate provides the fundamental building blocks:
//! - [`PlanDescriptor`] - Static description of a form-like plan
//! - [`Event`] - What actions hand back to the dialogue engine
//! - [`TrackerContext`] - Read-only view of the conversation
//! - [`PlanformError`] - Error types

pub mod error;
pub mod event;
pub mod intent;
pub mod plan;
pub mod tracker;
pub mod types;

// Re-exports for convenience
pub use error::{PlanformError, Result};
pub use event::{Event, PLAN_COMPLETE_SLOT};
pub use intent::AnswerIntent;
pub use plan::{PlanDescriptor, PlanDescriptorBuilder, RuleTable, SlotRule, SlotSpec};
pub use tracker::{ActivePlan, IntentPrediction, LatestMessage, TrackerContext, TrackerSnapshot};
pub use types::*;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{PlanformError, Result};
    pub use crate::event::Event;
    pub use crate::plan::{PlanDescriptor, SlotRule, SlotSpec};
    pub use crate::tracker::{TrackerContext, TrackerSnapshot};
    pub use crate::types::{ActionKind, ActionRef, PlanKind, SlotValue};
}
