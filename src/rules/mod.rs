//! Rule contract.
//!
//! A rule is a named pair of operations over one data instance: a read-only
//! validation predicate and a side-effecting action. Concrete rules are
//! independent implementers of [`Rule`]; the engine treats them
//! polymorphically through `Box<dyn Rule<T>>`.
//!
//! [`FnRule`] covers the common case of a rule assembled from closures.

mod fn_rule;
mod types;

pub use crate::error::RuleFault;
pub use fn_rule::FnRule;
pub use types::{Rule, ValidationOutcome};
