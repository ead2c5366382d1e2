//! Error types for Planform.

use thiserror::Error;

/// Main error type for Planform operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanformError {
    /// No action is registered under the requested name.
    #[error("Unknown action: {name}")]
    UnknownAction { name: String },

    /// No plan is registered under the requested name.
    #[error("Unknown plan: {name}")]
    UnknownPlan { name: String },

    /// A plan descriptor failed validation.
    #[error("Invalid plan {plan}: {message}")]
    InvalidPlan { plan: String, message: String },

    /// An action that needs the active plan ran while none was active.
    #[error("Action {action} requires an active plan")]
    NoActivePlan { action: String },

    /// An action reference is neither a template nor a registered action.
    #[error("Invalid action reference: {0}")]
    InvalidActionRef(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl PlanformError {
    /// Returns true if the error was caused by the caller's request rather
    /// than by the configured plans.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PlanformError::UnknownAction { .. }
                | PlanformError::UnknownPlan { .. }
                | PlanformError::NoActivePlan { .. }
        )
    }

    /// Returns the action name if available.
    pub fn action_name(&self) -> Option<&str> {
        match self {
            PlanformError::UnknownAction { name } => Some(name),
            PlanformError::NoActivePlan { action } => Some(action),
            _ => None,
        }
    }
}

/// Convenience Result type for Planform operations.
pub type Result<T> = std::result::Result<T, PlanformError>;

impl From<serde_json::Error> for PlanformError {
    fn from(err: serde_json::Error) -> Self {
        PlanformError::SerializationError(err.to_string())
    }
}
