//! Domain-agnostic rule evaluation engine.
//!
//! A caller registers named rules against a data type, then asks the engine
//! to evaluate them against one data instance. Each rule exposes:
//!
//! - a **validation predicate** producing a [`ValidationOutcome`], and
//! - an **action** with side effects, run only when the cascade policy allows.
//!
//! The [`CascadeMode`] decides whether a failure halts evaluation, whether
//! passing rules act, and which failures are reported in the
//! [`EngineOutcome`].
//!
//! # Architecture
//!
//! The crate contains no domain concepts: the data type carries no trait
//! bounds, and concrete rules are defined by consumers through the [`Rule`]
//! trait or assembled from closures with [`FnRule`].
//!
//! # Logging
//!
//! Evaluation emits `tracing` events (`debug` per run, `trace` per rule).
//! Installing a subscriber is left to the host application.

pub mod engine;
pub mod error;
pub mod rules;

pub use engine::{AggregatedError, CascadeMode, EngineConfig, EngineOutcome, RuleEngine};
pub use error::{RuleEngineError, RuleFault};
pub use rules::{FnRule, Rule, ValidationOutcome};
