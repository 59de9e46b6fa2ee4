//! Shared utilities for tinct-cli
//!
//! Argument parsing, settings builders and report formatting used by the
//! `tinct` binary's commands.

pub mod builders;
pub mod parsers;
pub mod processing;
pub mod types;

// Re-export commonly used items at the crate root for convenience
pub use builders::{build_solver_settings, SolveOverrides};
pub use parsers::{parse_color, parse_filter_values};
pub use processing::{batch_seed, format_apply_report, format_solve_report, solve_entry};
pub use types::BatchEntry;
