//! Simultaneous perturbation stochastic approximation over the filter chain.
//!
//! Each iteration perturbs all six parameters at once by a random +/-1
//! direction, estimates the gradient from two loss evaluations, and steps
//! with decaying gains. The best iterate seen is returned, not the last.

use rand::Rng;

use crate::models::{FilterParam, FilterValues, PARAM_COUNT};

/// Step-size decay exponent.
const ALPHA: f64 = 1.0;

/// Perturbation-size decay exponent.
const GAMMA: f64 = 1.0 / 6.0;

/// Gain schedule of one SPSA run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpsaParams {
    /// Stability constant `A` added to the iteration count in the step gain
    pub stability: f64,
    /// Per-parameter step gains `a`
    pub gains: [f64; PARAM_COUNT],
    /// Initial perturbation size `c`
    pub perturbation: f64,
    pub iterations: usize,
}

/// Best point found by a search phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseResult {
    pub values: FilterValues,
    pub loss: f64,
}

/// Run SPSA from `initial`, minimizing `loss`.
///
/// Every update is wrapped/clamped into the parameter domains; the probe
/// points `values +/- ck * delta` are evaluated as-is.
pub fn spsa<R, L>(
    params: &SpsaParams,
    initial: FilterValues,
    rng: &mut R,
    mut loss: L,
) -> PhaseResult
where
    R: Rng + ?Sized,
    L: FnMut(&FilterValues) -> f64,
{
    let mut values = initial.0;
    let mut best = initial;
    let mut best_loss = f64::INFINITY;

    let mut deltas = [0.0; PARAM_COUNT];
    let mut high = [0.0; PARAM_COUNT];
    let mut low = [0.0; PARAM_COUNT];

    for k in 0..params.iterations {
        let ck = params.perturbation / ((k + 1) as f64).powf(GAMMA);
        for i in 0..PARAM_COUNT {
            deltas[i] = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
            high[i] = values[i] + ck * deltas[i];
            low[i] = values[i] - ck * deltas[i];
        }

        let loss_diff = loss(&FilterValues(high)) - loss(&FilterValues(low));
        for (i, param) in FilterParam::ALL.iter().enumerate() {
            let g = loss_diff / (2.0 * ck) * deltas[i];
            let ak = params.gains[i] / (params.stability + k as f64 + 1.0).powf(ALPHA);
            values[i] = param.fix(values[i] - ak * g);
        }

        let current = loss(&FilterValues(values));
        if current < best_loss {
            best = FilterValues(values);
            best_loss = current;
        }
    }

    // Zero iterations: report the starting point's real loss instead of +inf
    if params.iterations == 0 {
        best_loss = loss(&best);
    }

    PhaseResult {
        values: best,
        loss: best_loss,
    }
}
