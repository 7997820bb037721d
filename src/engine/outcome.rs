//! Evaluation results.

use std::fmt;

/// Failure record for one rule: its name and the messages it reported.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregatedError {
    name: String,
    errors: Vec<String>,
}

impl AggregatedError {
    pub fn new(name: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            name: name.into(),
            errors,
        }
    }

    /// Name the rule had when it failed.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl fmt::Display for AggregatedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.errors.join("; "))
    }
}

/// Aggregate result of one evaluation run.
///
/// `is_successful` is `false` exactly when some rule failed validation
/// during the run, whatever the cascade mode. `errors` lists recorded
/// failures in rule order; see [`CascadeMode`](super::CascadeMode) for which
/// failures are recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineOutcome {
    is_successful: bool,
    errors: Vec<AggregatedError>,
}

impl EngineOutcome {
    pub(crate) fn new() -> Self {
        Self {
            is_successful: true,
            errors: Vec::new(),
        }
    }

    /// Once cleared, the flag stays cleared for the rest of the run.
    pub(crate) fn mark_failed(&mut self) {
        self.is_successful = false;
    }

    pub(crate) fn push_error(&mut self, error: AggregatedError) {
        self.errors.push(error);
    }

    pub fn is_successful(&self) -> bool {
        self.is_successful
    }

    pub fn errors(&self) -> &[AggregatedError] {
        &self.errors
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Iterates `(rule name, message)` pairs across all recorded failures.
    pub fn error_messages(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.errors.iter().flat_map(|e| {
            e.errors
                .iter()
                .map(move |msg| (e.name.as_str(), msg.as_str()))
        })
    }

    pub fn into_errors(self) -> Vec<AggregatedError> {
        self.errors
    }
}

impl fmt::Display for EngineOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_successful {
            return f.write_str("all rules passed");
        }
        write!(f, "rules failed ({} recorded)", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  {error}")?;
        }
        Ok(())
    }
}
