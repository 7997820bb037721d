//! Error types for the rule engine.
//!
//! Validation failures are not errors: they are ordinary outcomes carried by
//! [`EngineOutcome`](crate::engine::EngineOutcome). This module covers the
//! conditions that abort a call instead.

/// Error raised by a rule's action.
///
/// Rules are free to surface any error type; the engine only needs to
/// attribute it to the rule that raised it.
pub type RuleFault = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for the rule engine.
#[derive(Debug, thiserror::Error)]
pub enum RuleEngineError {
    /// A required registration argument was absent.
    #[error("Missing required argument: {argument}")]
    MissingArgument { argument: &'static str },

    /// The engine configuration is inconsistent.
    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),

    /// A rule's action failed; the evaluation run was aborted.
    #[error("Rule '{rule}' failed while executing: {source}")]
    RuleFault {
        rule: String,
        #[source]
        source: RuleFault,
    },
}

impl RuleEngineError {
    /// Returns `true` for programmer errors raised at registration time.
    pub fn is_argument_error(&self) -> bool {
        matches!(self, RuleEngineError::MissingArgument { .. })
    }
}
