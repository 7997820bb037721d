//! Closure-backed rule.

use super::types::{Rule, ValidationOutcome};
use crate::error::RuleFault;

type Check<T> = Box<dyn Fn(&T) -> Result<(), Vec<String>>>;
type Action<T> = Box<dyn Fn(&mut T) -> Result<(), RuleFault>>;

/// A rule assembled from closures.
///
/// The check returns `Err(messages)` to reject the data. Without an action,
/// [`execute`](Rule::execute) does nothing.
///
/// # Examples
///
/// ```
/// use rule_cascade::rules::{FnRule, Rule};
///
/// let rule = FnRule::new("even", |n: &i32| {
///     if n % 2 == 0 { Ok(()) } else { Err(vec![format!("{n} is odd")]) }
/// })
/// .with_action(|n: &mut i32| {
///     *n /= 2;
///     Ok(())
/// });
///
/// assert!(rule.validate(&4).is_valid());
/// assert_eq!(rule.validate(&3).errors(), &["3 is odd"]);
/// ```
pub struct FnRule<T: ?Sized> {
    name: String,
    check: Check<T>,
    action: Option<Action<T>>,
}

impl<T: ?Sized> FnRule<T> {
    /// Creates a rule with the given check and no action.
    pub fn new<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&T) -> Result<(), Vec<String>> + 'static,
    {
        Self {
            name: name.into(),
            check: Box::new(check),
            action: None,
        }
    }

    /// Sets the action run when the engine executes this rule.
    pub fn with_action<A>(mut self, action: A) -> Self
    where
        A: Fn(&mut T) -> Result<(), RuleFault> + 'static,
    {
        self.action = Some(Box::new(action));
        self
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }
}

impl<T: ?Sized> Rule<T> for FnRule<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn validate(&self, data: &T) -> ValidationOutcome {
        match (self.check)(data) {
            Ok(()) => ValidationOutcome::valid(&self.name),
            Err(errors) => ValidationOutcome::invalid(&self.name, errors),
        }
    }

    fn execute(&self, data: &mut T) -> Result<(), RuleFault> {
        match &self.action {
            Some(action) => action(data),
            None => Ok(()),
        }
    }
}

impl<T: ?Sized> std::fmt::Debug for FnRule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnRule")
            .field("name", &self.name)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}
