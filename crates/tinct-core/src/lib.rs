//! Tinct Core Library
//!
//! Color model, CSS filter chain, and the SPSA solver that finds a filter
//! chain turning a black element into a target color.

pub mod color;
pub mod config;
pub mod error;
pub mod models;
pub mod solver;

// Re-export commonly used types
pub use color::{is_valid_hex, parse_hex, Color, Hsl};
pub use error::{TinctError, TinctResult};
pub use models::{FilterParam, FilterValues, LossQuality, SolveResult, StopReason};
pub use solver::{
    solve_hex, solve_hex_with, spawn_solve, CancelToken, SolveHandle, SolveProgress, Solver,
    SolverSettings,
};
