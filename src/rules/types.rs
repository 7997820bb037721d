//! Core trait for rules and the per-rule validation result.

use crate::error::RuleFault;

/// Result of validating one data instance against one rule.
///
/// Produced fresh by every [`Rule::validate`] call. An invalid outcome may
/// carry zero error messages; the engine does not check this.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationOutcome {
    name: String,
    is_valid: bool,
    errors: Vec<String>,
}

impl ValidationOutcome {
    /// A passing outcome with no errors.
    pub fn valid(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// A failing outcome carrying the given messages.
    pub fn invalid<I, S>(name: impl Into<String>, errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            is_valid: false,
            errors: errors.into_iter().map(Into::into).collect(),
        }
    }

    /// Appends an error message and marks the outcome invalid.
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.is_valid = false;
        self.errors.push(message.into());
        self
    }

    /// Name of the rule that produced this outcome.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Error messages in the order the rule reported them.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Consumes the outcome, returning its error messages.
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

/// A named validate-then-act unit over data of type `T`.
///
/// The engine calls [`validate`](Rule::validate) first and, depending on the
/// cascade mode and the result, may call [`execute`](Rule::execute) at most
/// once per evaluation run. Implementations are held as `Box<dyn Rule<T>>`
/// and are never downcast.
///
/// # Examples
///
/// ```
/// use rule_cascade::rules::{Rule, RuleFault, ValidationOutcome};
///
/// struct Order { total: f64, discounted: bool }
///
/// struct Discount { name: String }
///
/// impl Rule<Order> for Discount {
///     fn name(&self) -> &str { &self.name }
///     fn set_name(&mut self, name: String) { self.name = name; }
///
///     fn validate(&self, order: &Order) -> ValidationOutcome {
///         if order.total >= 100.0 {
///             ValidationOutcome::valid(&self.name)
///         } else {
///             ValidationOutcome::invalid(&self.name, ["total below 100"])
///         }
///     }
///
///     fn execute(&self, order: &mut Order) -> Result<(), RuleFault> {
///         order.discounted = true;
///         Ok(())
///     }
/// }
/// ```
pub trait Rule<T: ?Sized> {
    /// Returns the rule's name, used for error attribution only.
    fn name(&self) -> &str;

    /// Renames the rule. Names need not be unique.
    fn set_name(&mut self, name: String);

    /// Checks `data` against the rule.
    ///
    /// Must be free of required side effects: the engine may call it without
    /// ever calling [`execute`](Rule::execute).
    fn validate(&self, data: &T) -> ValidationOutcome;

    /// Performs the rule's action on `data`.
    ///
    /// A returned error aborts the evaluation run.
    fn execute(&self, data: &mut T) -> Result<(), RuleFault>;
}

impl<T: ?Sized, R: Rule<T> + ?Sized> Rule<T> for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn set_name(&mut self, name: String) {
        (**self).set_name(name)
    }

    fn validate(&self, data: &T) -> ValidationOutcome {
        (**self).validate(data)
    }

    fn execute(&self, data: &mut T) -> Result<(), RuleFault> {
        (**self).execute(data)
    }
}
