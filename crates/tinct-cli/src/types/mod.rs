//! Shared CLI output types.

use serde::Serialize;
use tinct_core::SolveResult;

/// One color's outcome in a batch run.
///
/// Invalid inputs carry an `error` instead of a `result` so a single bad
/// color never fails the whole batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    /// Color exactly as given on the command line
    pub input: String,

    /// Normalized `#rrggbb` form, when the input parsed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,

    /// Seed this entry's solver ran with
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<SolveResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchEntry {
    pub fn is_ok(&self) -> bool {
        self.result.is_some()
    }

    pub fn is_converged(&self) -> bool {
        self.result.as_ref().is_some_and(|r| r.converged)
    }
}
