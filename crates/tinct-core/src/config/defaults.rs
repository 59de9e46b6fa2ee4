//! Default solver parameter values and their validation/sanitization.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::solver::SolverSettings;

/// Solver defaults that can be overridden from `tinct.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverDefaults {
    /// SPSA iterations per wide-phase run
    pub wide_iterations: usize,
    /// SPSA iterations of the narrow refinement
    pub narrow_iterations: usize,
    /// Independent wide-phase runs per round
    pub wide_attempts: usize,
    /// Wide phase stops early once its best loss is at or below this
    pub wide_early_exit_loss: f64,
    /// A round whose narrow loss is at or below this ends the solve
    pub target_loss: f64,
    /// Maximum number of wide/narrow rounds (None = unbounded)
    pub max_attempts: Option<usize>,
    /// Wall-clock budget for one solve in milliseconds
    pub time_budget_ms: Option<u64>,
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for SolverDefaults {
    fn default() -> Self {
        Self {
            wide_iterations: 1000,
            narrow_iterations: 500,
            wide_attempts: 3,
            wide_early_exit_loss: 25.0,
            target_loss: 30.0,
            max_attempts: Some(20),
            time_budget_ms: None,
            seed: None,
        }
    }
}

impl SolverDefaults {
    /// Replace values that would stall or break the search with defaults.
    pub fn sanitize(&mut self) {
        let fallback = Self::default();

        if self.wide_iterations == 0 {
            self.wide_iterations = fallback.wide_iterations;
        }
        if self.narrow_iterations == 0 {
            self.narrow_iterations = fallback.narrow_iterations;
        }
        if self.wide_attempts == 0 {
            self.wide_attempts = fallback.wide_attempts;
        }
        if !self.wide_early_exit_loss.is_finite() || self.wide_early_exit_loss < 0.0 {
            self.wide_early_exit_loss = fallback.wide_early_exit_loss;
        }
        if !self.target_loss.is_finite() || self.target_loss < 0.0 {
            self.target_loss = fallback.target_loss;
        }
        if self.max_attempts == Some(0) {
            self.max_attempts = fallback.max_attempts;
        }
        if self.time_budget_ms == Some(0) {
            self.time_budget_ms = None;
        }
    }

    /// Runtime settings for a solver built from these defaults.
    pub fn to_settings(&self) -> SolverSettings {
        SolverSettings {
            wide_iterations: self.wide_iterations,
            narrow_iterations: self.narrow_iterations,
            wide_attempts: self.wide_attempts,
            wide_early_exit_loss: self.wide_early_exit_loss,
            target_loss: self.target_loss,
            max_attempts: self.max_attempts,
            time_budget: self.time_budget_ms.map(Duration::from_millis),
        }
    }
}
