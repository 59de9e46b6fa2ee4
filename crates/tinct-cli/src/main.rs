use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tinct_cli::SolveOverrides;

mod commands;

use commands::{cmd_apply, cmd_batch, cmd_config_init, cmd_config_show, cmd_solve};

#[derive(Parser)]
#[command(name = "tinct")]
#[command(
    version,
    about = "Find a CSS filter chain that turns a black element into a target color",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Solver options shared by `solve` and `batch`.
#[derive(Args)]
struct SolverArgs {
    /// RNG seed for reproducible results (batch: color i uses SEED + i)
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Maximum number of wide/narrow rounds
    #[arg(long, value_name = "N")]
    max_attempts: Option<usize>,

    /// Retry until converged (or until the time budget runs out)
    #[arg(long)]
    unbounded: bool,

    /// Wall-clock budget per solve in milliseconds (0 = none)
    #[arg(long, value_name = "MS")]
    time_budget_ms: Option<u64>,

    /// Solver config file (overrides TINCT_CONFIG and the search path)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print per-round diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl SolverArgs {
    fn overrides(&self) -> SolveOverrides {
        SolveOverrides {
            seed: self.seed,
            max_attempts: self.max_attempts,
            time_budget_ms: self.time_budget_ms,
            unbounded: self.unbounded,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a filter chain for one color
    Solve {
        /// Target color (#rgb or #rrggbb, '#' optional)
        #[arg(value_name = "COLOR")]
        color: String,

        #[command(flatten)]
        solver: SolverArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Exit with an error when the solve did not converge
        #[arg(long)]
        strict: bool,
    },

    /// Solve many colors in parallel
    Batch {
        /// Target colors
        #[arg(value_name = "COLORS", required = true)]
        colors: Vec<String>,

        #[command(flatten)]
        solver: SolverArgs,

        /// Number of parallel threads
        #[arg(short = 'j', long, value_name = "N")]
        threads: Option<usize>,

        /// Write results as a JSON array to FILE
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print results as a JSON array
        #[arg(long)]
        json: bool,

        /// Suppress progress output
        #[arg(short, long)]
        silent: bool,
    },

    /// Apply a filter vector to black and show the resulting color
    Apply {
        /// Filter values: invert,sepia,saturate,hue-rotate,brightness,contrast
        /// (hue-rotate in 0-100 units, x3.6 = degrees)
        #[arg(value_name = "I,S,SAT,H,B,C", allow_hyphen_values = true)]
        values: String,

        /// Compare against a target color and print the loss
        #[arg(short, long, value_name = "COLOR")]
        target: Option<String>,
    },

    /// Inspect or create solver config files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective solver configuration
    Show {
        /// Config file to load instead of searching
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Print where the config came from and any warnings
        #[arg(short, long)]
        verbose: bool,
    },

    /// Write a config file with the built-in defaults
    Init {
        /// Output file path
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Solve {
            color,
            solver,
            json,
            strict,
        } => cmd_solve(
            color,
            solver.overrides(),
            json,
            strict,
            solver.config,
            solver.verbose,
        ),

        Commands::Batch {
            colors,
            solver,
            threads,
            output,
            json,
            silent,
        } => cmd_batch(
            colors,
            solver.overrides(),
            threads,
            output,
            json,
            silent,
            solver.config,
            solver.verbose,
        ),

        Commands::Apply { values, target } => cmd_apply(values, target),

        Commands::Config { action } => match action {
            ConfigAction::Show { config, verbose } => cmd_config_show(config, verbose),
            ConfigAction::Init { path, force } => cmd_config_init(path, force),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
