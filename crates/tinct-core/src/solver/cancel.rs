//! Cooperative cancellation for running solves.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag used to stop a running solve between search phases.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
