use std::path::PathBuf;

use tinct_cli::{build_solver_settings, format_solve_report, parse_color, SolveOverrides};
use tinct_core::spawn_solve;

use super::load_defaults;

pub fn cmd_solve(
    color: String,
    overrides: SolveOverrides,
    json: bool,
    strict: bool,
    config: Option<PathBuf>,
    verbose: bool,
) -> Result<(), String> {
    let defaults = load_defaults(config.as_deref(), verbose);
    let target = parse_color(&color)?;
    let (settings, seed) = build_solver_settings(&defaults, &overrides)?;

    let handle = spawn_solve(target, settings, seed).map_err(|e| e.to_string())?;
    let seed = handle.seed();

    // Drains until the worker drops its sender at the end of the solve
    for progress in handle.progress().iter() {
        if verbose && !json {
            eprintln!(
                "  round {}: loss {:.2} -> {}",
                progress.attempt,
                progress.loss,
                progress.values.to_css()
            );
        }
    }

    let result = handle.join().map_err(|e| e.to_string())?;

    if json {
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| format!("Failed to serialize result: {}", e))?;
        println!("{}", json);
    } else {
        print!("{}", format_solve_report(target, &result, Some(seed)));
    }

    if strict {
        result.into_converged().map_err(|e| e.to_string())?;
    }
    Ok(())
}
