//! Rule registration and the evaluation loop.

use super::config::{CascadeMode, EngineConfig};
use super::outcome::{AggregatedError, EngineOutcome};
use crate::error::RuleEngineError;
use crate::rules::Rule;
use tracing::{debug, trace, warn};

/// Ordered collection of rules applied to one data instance at a time.
///
/// Rules are evaluated in insertion order on every call to
/// [`apply_rules`](RuleEngine::apply_rules). Each call is an independent
/// run; the engine keeps no state between runs.
///
/// # Examples
///
/// ```
/// use rule_cascade::engine::{CascadeMode, RuleEngine};
/// use rule_cascade::rules::FnRule;
///
/// struct Signup { email: String, welcomed: bool }
///
/// let engine = RuleEngine::new(CascadeMode::RunAllPossible)
///     .with_rule(FnRule::new("email", |s: &Signup| {
///         if s.email.contains('@') { Ok(()) } else { Err(vec!["invalid email".into()]) }
///     }))
///     .with_rule(
///         FnRule::new("welcome", |_: &Signup| Ok(())).with_action(|s: &mut Signup| {
///             s.welcomed = true;
///             Ok(())
///         }),
///     );
///
/// let mut signup = Signup { email: "nobody".into(), welcomed: false };
/// let outcome = engine.apply_rules(&mut signup).unwrap();
///
/// assert!(!outcome.is_successful());
/// assert_eq!(outcome.errors()[0].name(), "email");
/// assert!(signup.welcomed);
/// ```
pub struct RuleEngine<T: ?Sized> {
    config: EngineConfig,
    rules: Vec<Box<dyn Rule<T>>>,
}

impl<T: ?Sized> RuleEngine<T> {
    /// Creates an empty engine with the given cascade mode.
    pub fn new(cascade_mode: CascadeMode) -> Self {
        Self {
            config: EngineConfig::new(cascade_mode),
            rules: Vec::new(),
        }
    }

    /// Creates an empty engine from a full configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self, RuleEngineError> {
        config.validate().map_err(RuleEngineError::InvalidConfig)?;
        Ok(Self {
            config,
            rules: Vec::new(),
        })
    }

    pub fn cascade_mode(&self) -> CascadeMode {
        self.config.cascade_mode
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Appends a rule.
    pub fn add_rule<R: Rule<T> + 'static>(&mut self, rule: R) {
        self.rules.push(Box::new(rule));
    }

    /// Appends an already boxed rule.
    pub fn add_boxed_rule(&mut self, rule: Box<dyn Rule<T>>) {
        self.rules.push(rule);
    }

    /// Appends a rule that may be absent.
    ///
    /// Returns [`RuleEngineError::MissingArgument`] for `None`, leaving the
    /// collection unchanged.
    pub fn try_add_rule<R: Rule<T> + 'static>(
        &mut self,
        rule: Option<R>,
    ) -> Result<(), RuleEngineError> {
        let rule = rule.ok_or(RuleEngineError::MissingArgument { argument: "rule" })?;
        self.add_rule(rule);
        Ok(())
    }

    /// Appends each rule in iteration order.
    ///
    /// Accepts arrays, vectors, or any other iterator of boxed rules.
    pub fn add_rules<I>(&mut self, rules: I)
    where
        I: IntoIterator<Item = Box<dyn Rule<T>>>,
    {
        self.rules.extend(rules);
    }

    /// Appends a batch of rules that may itself be absent.
    ///
    /// Returns [`RuleEngineError::MissingArgument`] for `None`, leaving the
    /// collection unchanged.
    pub fn try_add_rules<I>(&mut self, rules: Option<I>) -> Result<(), RuleEngineError>
    where
        I: IntoIterator<Item = Box<dyn Rule<T>>>,
    {
        let rules = rules.ok_or(RuleEngineError::MissingArgument { argument: "rules" })?;
        self.add_rules(rules);
        Ok(())
    }

    /// Builder form of [`add_rule`](RuleEngine::add_rule).
    pub fn with_rule<R: Rule<T> + 'static>(mut self, rule: R) -> Self {
        self.add_rule(rule);
        self
    }

    /// Returns the number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the names of all rules in evaluation order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Mutable access to a registered rule, e.g. to rename it.
    ///
    /// Renaming affects error attribution in later runs only; position and
    /// membership are unchanged.
    pub fn rule_mut(&mut self, index: usize) -> Option<&mut (dyn Rule<T> + 'static)> {
        self.rules.get_mut(index).map(|rule| &mut **rule)
    }

    /// Evaluates every registered rule against `data` under the cascade mode.
    ///
    /// - `StopOnFirstFailure`: the first failing rule is recorded and the run
    ///   ends. Actions never run.
    /// - `RunAllPossible`: failing rules are recorded, passing rules execute.
    /// - `RunIfValid`: passing rules execute; failing rules only clear the
    ///   success flag unless `record_suppressed_failures` is set.
    ///
    /// Validation failures are reported in the returned outcome. An `Err` is
    /// returned only when a rule's action fails, which ends the run at once.
    /// Panics raised by rules are not caught.
    pub fn apply_rules(&self, data: &mut T) -> Result<EngineOutcome, RuleEngineError> {
        let mode = self.config.cascade_mode;
        debug!(mode = %mode, rules = self.rules.len(), "applying rules");

        let mut outcome = EngineOutcome::new();

        for (index, rule) in self.rules.iter().enumerate() {
            let result = rule.validate(data);
            let is_valid = result.is_valid();
            trace!(index, rule = rule.name(), is_valid, "rule validated");

            if !is_valid {
                outcome.mark_failed();
            }

            match mode {
                CascadeMode::StopOnFirstFailure => {
                    if !is_valid {
                        outcome.push_error(AggregatedError::new(
                            rule.name(),
                            result.into_errors(),
                        ));
                        debug!(index, rule = rule.name(), "stopping on first failure");
                        break;
                    }
                }
                CascadeMode::RunIfValid => {
                    if is_valid {
                        execute(&**rule, data)?;
                    } else if self.config.record_suppressed_failures {
                        outcome.push_error(AggregatedError::new(
                            rule.name(),
                            result.into_errors(),
                        ));
                    } else {
                        debug!(index, rule = rule.name(), "failure not recorded in RunIfValid");
                    }
                }
                CascadeMode::RunAllPossible => {
                    if is_valid {
                        execute(&**rule, data)?;
                    } else {
                        outcome.push_error(AggregatedError::new(
                            rule.name(),
                            result.into_errors(),
                        ));
                    }
                }
            }
        }

        debug!(
            successful = outcome.is_successful(),
            errors = outcome.error_count(),
            "rules applied"
        );
        Ok(outcome)
    }
}

fn execute<T: ?Sized>(rule: &dyn Rule<T>, data: &mut T) -> Result<(), RuleEngineError> {
    rule.execute(data).map_err(|source| {
        warn!(rule = rule.name(), error = %source, "rule action failed");
        RuleEngineError::RuleFault {
            rule: rule.name().to_string(),
            source,
        }
    })
}

impl<T: ?Sized> Default for RuleEngine<T> {
    fn default() -> Self {
        Self::new(CascadeMode::default())
    }
}

impl<T: ?Sized> std::fmt::Debug for RuleEngine<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("config", &self.config)
            .field("rules", &self.rule_names())
            .finish()
    }
}
