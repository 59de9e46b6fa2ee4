//! Command implementations for the tinct CLI.

mod apply;
mod batch;
mod config;
mod solve;

// Re-export all command functions
pub use apply::cmd_apply;
pub use batch::cmd_batch;
pub use config::{cmd_config_init, cmd_config_show};
pub use solve::cmd_solve;

use std::path::Path;

use tinct_core::config::{log_config_usage, set_verbose, solver_config_handle, SolverDefaults};

/// Enable verbose output and load the solver config for a command.
fn load_defaults(config: Option<&Path>, verbose: bool) -> SolverDefaults {
    set_verbose(verbose);
    let handle = solver_config_handle(config);
    if verbose {
        log_config_usage();
    }
    handle.config.solver.clone()
}
