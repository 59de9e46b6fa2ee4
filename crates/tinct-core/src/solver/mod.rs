//! Color-to-filter solver
//!
//! Finds a `filter:` chain that turns a black element into a target color.
//! The search runs in rounds: a wide SPSA phase from a fixed starting point
//! (up to a few independent runs), then a narrow SPSA refinement seeded at
//! the wide result with gains scaled by the wide loss. Rounds repeat until
//! the narrow loss reaches the target loss or the attempt/time budget or a
//! [`CancelToken`] stops the loop; the best round is returned either way.

mod cancel;
mod loss;
mod spsa;
mod worker;


pub use cancel::CancelToken;
pub use loss::TargetLoss;
pub use spsa::{spsa, PhaseResult, SpsaParams};
pub use worker::{spawn_solve, SolveHandle, SolveProgress};

use std::time::{Duration, Instant};

use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::color::Color;
use crate::config::SolverDefaults;
use crate::error::TinctResult;
use crate::models::{FilterValues, SolveResult, StopReason};
use crate::verbose_println;

/// Wide phase gain schedule.
const WIDE_STABILITY: f64 = 5.0;
const WIDE_PERTURBATION: f64 = 15.0;
const WIDE_GAINS: [f64; 6] = [60.0, 180.0, 18000.0, 600.0, 1.2, 1.2];

/// Narrow phase perturbation size; its gains derive from the wide loss.
const NARROW_PERTURBATION: f64 = 2.0;

/// Runtime knobs of a solve.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverSettings {
    pub wide_iterations: usize,
    pub narrow_iterations: usize,
    pub wide_attempts: usize,
    pub wide_early_exit_loss: f64,
    pub target_loss: f64,
    /// None keeps retrying until converged, the time budget, or cancellation
    pub max_attempts: Option<usize>,
    pub time_budget: Option<Duration>,
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverDefaults::default().to_settings()
    }
}

impl SolverSettings {
    /// Copy with values that would stall the search or poison the narrow
    /// gains repaired: counts become at least 1, NaN or negative loss
    /// thresholds fall back to the defaults. Infinite thresholds are kept.
    pub fn sanitized(mut self) -> Self {
        let fallback = SolverDefaults::default();

        self.wide_attempts = self.wide_attempts.max(1);
        self.max_attempts = self.max_attempts.map(|max| max.max(1));
        if self.wide_early_exit_loss.is_nan() || self.wide_early_exit_loss < 0.0 {
            self.wide_early_exit_loss = fallback.wide_early_exit_loss;
        }
        if self.target_loss.is_nan() || self.target_loss < 0.0 {
            self.target_loss = fallback.target_loss;
        }
        self
    }
}

/// Solver for a single target color.
///
/// Generic over the random source so tests can pin a seed; [`Solver::new`]
/// uses the thread-local generator.
pub struct Solver<R = ThreadRng> {
    loss: TargetLoss,
    rng: R,
    settings: SolverSettings,
}

impl Solver<ThreadRng> {
    pub fn new(target: Color) -> Self {
        Self::with_rng(target, rand::rng())
    }
}

impl Solver<Pcg32> {
    /// Reproducible solver driven by a PCG generator.
    pub fn seeded(target: Color, seed: u64) -> Self {
        Self::with_rng(target, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Solver<R> {
    pub fn with_rng(target: Color, rng: R) -> Self {
        Self {
            loss: TargetLoss::new(target),
            rng,
            settings: SolverSettings::default(),
        }
    }

    /// Replace the settings; degenerate values are repaired on the way in.
    pub fn with_settings(mut self, settings: SolverSettings) -> Self {
        self.settings = settings.sanitized();
        self
    }

    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    pub fn target(&self) -> Color {
        self.loss.target()
    }

    /// Loss of an arbitrary parameter vector against the target.
    pub fn loss(&mut self, values: &FilterValues) -> f64 {
        self.loss.eval(values)
    }

    /// Solve until converged or out of attempts/time.
    pub fn solve(&mut self) -> SolveResult {
        self.solve_with(None, |_, _| {})
    }

    /// Solve, stopping early once `cancel` is triggered.
    pub fn solve_cancellable(&mut self, cancel: &CancelToken) -> SolveResult {
        self.solve_with(Some(cancel), |_, _| {})
    }

    /// Full solve loop. `on_round` receives the round number (1-based) and
    /// the narrow-phase result after every completed round.
    pub fn solve_with<F>(&mut self, cancel: Option<&CancelToken>, mut on_round: F) -> SolveResult
    where
        F: FnMut(usize, &PhaseResult),
    {
        let started = Instant::now();
        let is_cancelled = || cancel.is_some_and(CancelToken::is_cancelled);

        let mut best: Option<PhaseResult> = None;
        let mut attempts = 0usize;

        let stop_reason = loop {
            if is_cancelled() {
                break StopReason::Cancelled;
            }
            if let Some(max) = self.settings.max_attempts {
                if attempts >= max {
                    break StopReason::AttemptsExhausted;
                }
            }
            if let Some(budget) = self.settings.time_budget {
                if attempts > 0 && started.elapsed() >= budget {
                    break StopReason::TimeBudgetExceeded;
                }
            }

            let wide = self.solve_wide();
            if is_cancelled() {
                keep_best(&mut best, wide);
                break StopReason::Cancelled;
            }

            let narrow = self.solve_narrow(&wide);
            attempts += 1;
            verbose_println!(
                "round {}: wide loss {:.2}, narrow loss {:.2}",
                attempts,
                wide.loss,
                narrow.loss
            );
            on_round(attempts, &narrow);

            keep_best(&mut best, narrow);
            if narrow.loss <= self.settings.target_loss {
                break StopReason::Converged;
            }
        };

        let best = match best {
            Some(best) => best,
            None => {
                // Stopped before any search ran; report the starting point
                let values = FilterValues::INITIAL;
                PhaseResult {
                    values,
                    loss: self.loss.eval(&values),
                }
            }
        };

        verbose_println!(
            "solve finished after {} round(s) in {:.2?}: loss {:.2} ({})",
            attempts,
            started.elapsed(),
            best.loss,
            stop_reason
        );

        SolveResult {
            values: best.values,
            loss: best.loss,
            filter: best.values.to_css(),
            converged: stop_reason == StopReason::Converged,
            attempts,
            stop_reason,
        }
    }

    /// Coarse search: independent SPSA runs from the fixed starting point,
    /// stopping as soon as one is good enough.
    pub fn solve_wide(&mut self) -> PhaseResult {
        let params = SpsaParams {
            stability: WIDE_STABILITY,
            gains: WIDE_GAINS,
            perturbation: WIDE_PERTURBATION,
            iterations: self.settings.wide_iterations,
        };

        let mut best = PhaseResult {
            values: FilterValues::INITIAL,
            loss: f64::INFINITY,
        };
        for _ in 0..self.settings.wide_attempts {
            let loss = &mut self.loss;
            let result = spsa(&params, FilterValues::INITIAL, &mut self.rng, |v| loss.eval(v));
            if result.loss < best.loss {
                best = result;
            }
            if best.loss <= self.settings.wide_early_exit_loss {
                break;
            }
        }
        best
    }

    /// Refinement around a wide-phase result; gains shrink with its loss.
    pub fn solve_narrow(&mut self, wide: &PhaseResult) -> PhaseResult {
        let stability = wide.loss;
        let a1 = stability + 1.0;
        let params = SpsaParams {
            stability,
            gains: [0.25 * a1, 0.25 * a1, a1, 0.25 * a1, 0.2 * a1, 0.2 * a1],
            perturbation: NARROW_PERTURBATION,
            iterations: self.settings.narrow_iterations,
        };

        let loss = &mut self.loss;
        spsa(&params, wide.values, &mut self.rng, |v| loss.eval(v))
    }
}

fn keep_best(best: &mut Option<PhaseResult>, candidate: PhaseResult) {
    if best.map_or(true, |b| candidate.loss < b.loss) {
        *best = Some(candidate);
    }
}

/// Validate a hex color and solve it with default settings.
pub fn solve_hex(hex: &str) -> TinctResult<SolveResult> {
    solve_hex_with(hex, SolverSettings::default(), None)
}

/// Validate a hex color and solve it, optionally with a fixed seed.
pub fn solve_hex_with(
    hex: &str,
    settings: SolverSettings,
    seed: Option<u64>,
) -> TinctResult<SolveResult> {
    let target = Color::from_hex(hex)?;
    let result = match seed {
        Some(seed) => Solver::seeded(target, seed).with_settings(settings).solve(),
        None => Solver::new(target).with_settings(settings).solve(),
    };
    Ok(result)
}
