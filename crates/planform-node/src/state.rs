//! Application state.

use std::sync::Arc;

use planform_core::Result;
use planform_plans::PlanRegistry;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Plans served to the engine.
    pub plans: Arc<PlanRegistry>,
}

impl AppState {
    /// Create application state over the given registry.
    pub fn new(plans: PlanRegistry) -> Self {
        Self {
            plans: Arc::new(plans),
        }
    }

    /// Application state serving the built-in plans.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(PlanRegistry::builtin()?))
    }
}
