//! Data models for tinct
//!
//! Core data structures for filter parameter vectors and solver results.

mod filter_values;
mod result;

// Re-export all public types at the models root
pub use filter_values::{FilterParam, FilterValues, PARAM_COUNT};

pub use result::{LossQuality, SolveResult, StopReason};
