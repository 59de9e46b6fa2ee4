//! Solving and reporting helpers shared by the commands.

mod report;
mod single;

pub use report::{format_apply_report, format_solve_report};
pub use single::{batch_seed, solve_entry};
