//! Engine configuration and cascade modes.

use std::fmt;
use std::str::FromStr;

/// Policy deciding whether a failing rule halts evaluation and whether
/// passing rules trigger their action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CascadeMode {
    /// Record the first failure and stop. No action is ever executed.
    #[default]
    StopOnFirstFailure,

    /// Visit every rule. Failures are recorded; passing rules execute.
    RunAllPossible,

    /// Visit every rule. Passing rules execute; failures are not recorded
    /// unless [`EngineConfig::record_suppressed_failures`] is set.
    RunIfValid,
}

impl CascadeMode {
    /// All modes, in declaration order.
    pub const ALL: [CascadeMode; 3] = [
        CascadeMode::StopOnFirstFailure,
        CascadeMode::RunAllPossible,
        CascadeMode::RunIfValid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CascadeMode::StopOnFirstFailure => "StopOnFirstFailure",
            CascadeMode::RunAllPossible => "RunAllPossible",
            CascadeMode::RunIfValid => "RunIfValid",
        }
    }

    /// Whether passing rules have their action executed in this mode.
    pub fn executes_actions(&self) -> bool {
        !matches!(self, CascadeMode::StopOnFirstFailure)
    }
}

impl fmt::Display for CascadeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CascadeMode {
    type Err = String;

    /// Accepts `StopOnFirstFailure`, `stop-on-first-failure` and
    /// `stop_on_first_failure` style spellings, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "stoponfirstfailure" => Ok(CascadeMode::StopOnFirstFailure),
            "runallpossible" => Ok(CascadeMode::RunAllPossible),
            "runifvalid" => Ok(CascadeMode::RunIfValid),
            _ => Err(format!("unknown cascade mode: {s}")),
        }
    }
}

/// Configuration for [`RuleEngine`](super::RuleEngine).
///
/// Fixed once the engine is constructed.
///
/// # Examples
///
/// ```
/// use rule_cascade::engine::{CascadeMode, EngineConfig};
///
/// let config = EngineConfig::default()
///     .with_cascade_mode(CascadeMode::RunIfValid)
///     .with_record_suppressed_failures(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Cascade policy applied on every evaluation run.
    pub cascade_mode: CascadeMode,

    /// In [`CascadeMode::RunIfValid`], also record failing rules in the
    /// outcome's error list.
    ///
    /// Off by default: the classic `RunIfValid` behavior marks the run as
    /// unsuccessful but leaves `errors` empty for failing rules.
    pub record_suppressed_failures: bool,
}

impl EngineConfig {
    pub fn new(cascade_mode: CascadeMode) -> Self {
        Self {
            cascade_mode,
            ..Self::default()
        }
    }

    pub fn with_cascade_mode(mut self, mode: CascadeMode) -> Self {
        self.cascade_mode = mode;
        self
    }

    pub fn with_record_suppressed_failures(mut self, record: bool) -> Self {
        self.record_suppressed_failures = record;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.record_suppressed_failures && self.cascade_mode != CascadeMode::RunIfValid {
            return Err(format!(
                "record_suppressed_failures only applies to RunIfValid, got {}",
                self.cascade_mode
            ));
        }
        Ok(())
    }
}

impl From<CascadeMode> for EngineConfig {
    fn from(mode: CascadeMode) -> Self {
        Self::new(mode)
    }
}
