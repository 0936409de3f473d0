//! Evaluation configuration.

use crate::{CoreError, CoreResult};

/// Settings for one evaluation session over a behavior variable.
///
/// Built by the application (or deserialized with the `serde` feature) and
/// handed to `saom_eval::EvaluatorBuilder`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvalConfig {
    /// Observation whose values seed the current behavior state.  Also the
    /// period whose structural flags and trend restrictions apply to
    /// candidate moves.
    pub period: usize,

    /// When `true`, candidate moves against an up-only or down-only period
    /// are reported as not permitted.
    pub respect_trends: bool,
}

impl EvalConfig {
    /// Configuration starting at `period` with trend restrictions enabled.
    pub fn new(period: usize) -> Self {
        Self { period, respect_trends: true }
    }

    /// Check the configuration against a variable with `observation_count`
    /// observations.
    pub fn validate(&self, observation_count: usize) -> CoreResult<()> {
        if self.period >= observation_count {
            return Err(CoreError::Config(format!(
                "period {} out of range for {observation_count} observations",
                self.period
            )));
        }
        Ok(())
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self::new(0)
    }
}
