//! Intent names recognized by the plans and actions.
//!
//! Intents are produced by the engine's NLU; this crate only compares names.

/// User confirmed the question the plan asked.
pub const PLAN_AFFIRM: &str = "plan_affirm";
/// User rejected the question the plan asked.
pub const PLAN_DENY: &str = "plan_deny";
pub const GOODBYE: &str = "goodbye";
pub const REQUEST_HOTEL: &str = "request_hotel";
pub const REQUEST_RESTAURANT: &str = "request_restaurant";
pub const CHITCHAT: &str = "chitchat";

/// Classification of the latest intent as an answer to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerIntent {
    Affirm,
    Deny,
    /// Anything that is not a yes/no answer, including no intent at all.
    Other,
}

impl AnswerIntent {
    /// Classify an intent name.
    pub fn classify(intent: Option<&str>) -> Self {
        match intent {
            Some(PLAN_AFFIRM) => AnswerIntent::Affirm,
            Some(PLAN_DENY) => AnswerIntent::Deny,
            _ => AnswerIntent::Other,
        }
    }

    /// The boolean answer, if this is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AnswerIntent::Affirm => Some(true),
            AnswerIntent::Deny => Some(false),
            AnswerIntent::Other => None,
        }
    }
}
