//! Builders that merge config-file defaults with command line overrides.

mod settings;

pub use settings::{build_solver_settings, SolveOverrides};
