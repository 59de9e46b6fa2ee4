use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use tinct_cli::{batch_seed, build_solver_settings, solve_entry, BatchEntry, SolveOverrides};

use super::load_defaults;

#[allow(clippy::too_many_arguments)]
pub fn cmd_batch(
    colors: Vec<String>,
    overrides: SolveOverrides,
    threads: Option<usize>,
    output: Option<PathBuf>,
    json: bool,
    silent: bool,
    config: Option<PathBuf>,
    verbose: bool,
) -> Result<(), String> {
    let batch_start = Instant::now();

    let defaults = load_defaults(config.as_deref(), verbose);

    if colors.is_empty() {
        return Err("No colors specified".to_string());
    }

    let (settings, base_seed) = build_solver_settings(&defaults, &overrides)?;

    // Configure thread pool if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        if !silent && !json {
            println!("Using {} threads for parallel solving", num_threads);
        }
    }

    if !silent && !json {
        println!("Solving {} colors in parallel...\n", colors.len());
    }

    // Progress tracking
    let processed_count = AtomicUsize::new(0);
    let total = colors.len();

    // Each color gets its own solver; with a base seed the i-th color uses seed + i
    let entries: Vec<BatchEntry> = colors
        .par_iter()
        .enumerate()
        .map(|(index, color)| {
            let seed = base_seed.map(|base| batch_seed(base, index));
            let entry = solve_entry(color, &settings, seed);

            let done = processed_count.fetch_add(1, Ordering::SeqCst) + 1;
            if !silent && !json {
                match (&entry.result, &entry.error) {
                    (Some(result), _) => println!(
                        "[{}/{}] {} -> loss {:.1} ({})",
                        done, total, color, result.loss, result.stop_reason
                    ),
                    (None, Some(error)) => println!("[{}/{}] {} -> {}", done, total, color, error),
                    (None, None) => {}
                }
            }
            entry
        })
        .collect();

    if json || output.is_some() {
        let json_text = serde_json::to_string_pretty(&entries)
            .map_err(|e| format!("Failed to serialize results: {}", e))?;
        match &output {
            Some(path) => {
                std::fs::write(path, json_text)
                    .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
                if !silent && !json {
                    println!("\nResults written to {}", path.display());
                }
            }
            None => println!("{}", json_text),
        }
    }

    if !json && output.is_none() {
        println!();
        for entry in entries.iter().filter(|e| e.is_ok()) {
            if let (Some(hex), Some(result)) = (&entry.hex, &entry.result) {
                println!("{}: filter: {};", hex, result.filter);
            }
        }
    }

    let failed = entries.iter().filter(|e| !e.is_ok()).count();
    let converged = entries.iter().filter(|e| e.is_converged()).count();

    if !silent && !json {
        println!(
            "\nBatch complete: {} converged, {} best-effort, {} invalid in {:.2}s",
            converged,
            total - converged - failed,
            failed,
            batch_start.elapsed().as_secs_f64()
        );
    }

    if failed > 0 {
        return Err(format!("{} of {} colors could not be parsed", failed, total));
    }
    Ok(())
}
