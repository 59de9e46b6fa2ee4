//! Background solve thread with progress reporting and cancellation.

use std::sync::mpsc;
use std::thread;

use rand::Rng;

use super::{CancelToken, Solver, SolverSettings};
use crate::color::Color;
use crate::error::{TinctError, TinctResult};
use crate::models::{FilterValues, SolveResult};

/// Progress event sent after every completed round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveProgress {
    pub attempt: usize,
    pub loss: f64,
    pub values: FilterValues,
}

/// Handle to a solve running on its own thread.
pub struct SolveHandle {
    cancel: CancelToken,
    progress: mpsc::Receiver<SolveProgress>,
    thread: thread::JoinHandle<SolveResult>,
    seed: u64,
}

/// Start solving `target` on a background thread.
///
/// The thread owns its solver, scratch color and PCG generator. Without an
/// explicit seed one is drawn from the thread-local generator; the seed in
/// use is available from [`SolveHandle::seed`] to replay the run.
pub fn spawn_solve(
    target: Color,
    settings: SolverSettings,
    seed: Option<u64>,
) -> TinctResult<SolveHandle> {
    let cancel = CancelToken::new();
    let token = cancel.clone();
    let (progress_tx, progress_rx) = mpsc::channel();
    let seed = seed.unwrap_or_else(|| rand::rng().random());

    let thread = thread::Builder::new()
        .name("tinct-solve".to_owned())
        .spawn(move || {
            let mut solver = Solver::seeded(target, seed).with_settings(settings);
            solver.solve_with(Some(&token), |attempt, round| {
                // receiver may be gone if the caller only joins
                let _ = progress_tx.send(SolveProgress {
                    attempt,
                    loss: round.loss,
                    values: round.values,
                });
            })
        })
        .map_err(|e| TinctError::Worker {
            details: format!("failed to spawn solve thread: {}", e),
        })?;

    Ok(SolveHandle {
        cancel,
        progress: progress_rx,
        thread,
        seed,
    })
}

impl SolveHandle {
    /// Ask the solve to stop at the next phase boundary.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Per-round progress events; disconnects when the solve ends.
    pub fn progress(&self) -> &mpsc::Receiver<SolveProgress> {
        &self.progress
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Wait for the solve to finish.
    pub fn join(self) -> TinctResult<SolveResult> {
        self.thread.join().map_err(|_| TinctError::Worker {
            details: "solve thread panicked".to_string(),
        })
    }
}
