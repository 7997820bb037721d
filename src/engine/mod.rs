//! Rule evaluation engine.
//!
//! Holds an ordered list of rules and applies them to one data instance per
//! call, following one of three cascade policies:
//!
//! - **StopOnFirstFailure**: validate in order; the first failure is recorded
//!   and ends the run. No action is executed.
//! - **RunAllPossible**: validate every rule; failures are recorded, passing
//!   rules execute their action.
//! - **RunIfValid**: validate every rule; passing rules execute, failures
//!   only clear the success flag. [`EngineConfig::record_suppressed_failures`]
//!   opts into recording them as well.
//!
//! # Design
//!
//! Evaluation is strictly sequential and synchronous. The engine keeps no
//! state between runs: every [`RuleEngine::apply_rules`] call builds a fresh
//! [`EngineOutcome`].

mod config;
mod outcome;
mod rule_engine;

pub use config::{CascadeMode, EngineConfig};
pub use outcome::{AggregatedError, EngineOutcome};
pub use rule_engine::RuleEngine;
