//! Solver configuration management.
//!
//! This module provides configuration loading, global verbose flag management,
//! and the solver configuration types.

mod defaults;

// Re-export public types
pub use defaults::SolverDefaults;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Once, OnceLock};

use serde::{Deserialize, Serialize};

// Global verbose flag for controlling debug output
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbose flag. When true, debug messages will be printed.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

/// Check if verbose mode is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::config::is_verbose() {
            eprintln!("[tinct] {}", format_args!($($arg)*));
        }
    };
}

/// Candidate config file names searched on disk.
const CONFIG_FILENAMES: &[&str] = &["tinct.yml", "tinct.yaml"];

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "TINCT_CONFIG";

/// Loaded configuration together with its source path and warnings.
pub struct SolverConfigHandle {
    pub config: SolverConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl SolverConfigHandle {
    fn with_config(config: SolverConfig, source: Option<PathBuf>, warnings: Vec<String>) -> Self {
        Self {
            config,
            source,
            warnings,
        }
    }
}

/// Complete configuration file structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SolverConfig {
    pub solver: SolverDefaults,
}

impl SolverConfig {
    fn sanitize(mut self) -> Self {
        self.solver.sanitize();
        self
    }

    /// Serialize in the on-disk YAML layout.
    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml::to_string(self).map_err(|e| format!("Failed to serialize config: {}", e))
    }
}

/// Load configuration from disk, optionally forcing a specific path.
///
/// Unreadable or unparsable candidates are recorded as warnings and the
/// search continues; built-in defaults are used when nothing loads.
pub fn load_solver_config(custom_path: Option<&Path>) -> SolverConfigHandle {
    let mut warnings = Vec::new();

    for candidate in get_config_candidates(custom_path) {
        if !candidate.is_file() {
            continue;
        }

        match fs::read_to_string(&candidate) {
            Ok(contents) => match serde_yaml::from_str::<SolverConfig>(&contents) {
                Ok(config) => {
                    let source = fs::canonicalize(&candidate).unwrap_or(candidate);
                    return SolverConfigHandle::with_config(
                        config.sanitize(),
                        Some(source),
                        warnings,
                    );
                }
                Err(err) => warnings.push(format!(
                    "Failed to parse solver config {}: {}",
                    candidate.display(),
                    err
                )),
            },
            Err(err) => warnings.push(format!(
                "Failed to read solver config {}: {}",
                candidate.display(),
                err
            )),
        }
    }

    warnings.push("No solver config found; using built-in defaults.".to_string());
    SolverConfigHandle::with_config(SolverConfig::default(), None, warnings)
}

/// Get list of config file candidates to try
fn get_config_candidates(custom_path: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = custom_path {
        candidates.push(path.to_path_buf());
        // An explicit path wins outright; don't fall through to other files.
        return candidates;
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        candidates.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(cwd.join("config").join(name));
            candidates.push(cwd.join(name));
        }
    }

    if let Some(home_dir) = dirs::home_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(home_dir.join("tinct").join(name));
        }
    }

    candidates
}

/// Write solver defaults to a YAML file.
pub fn save_solver_config<P: AsRef<Path>>(config: &SolverConfig, path: P) -> Result<(), String> {
    let yaml = config.to_yaml()?;
    fs::write(path.as_ref(), yaml).map_err(|e| format!("Failed to write config file: {}", e))
}

static SOLVER_CONFIG_HANDLE: OnceLock<SolverConfigHandle> = OnceLock::new();
static PRINT_CONFIG_ONCE: Once = Once::new();

/// Access the global solver configuration (loaded once per process).
///
/// The first caller decides the custom path; later paths are ignored.
pub fn solver_config_handle(custom_path: Option<&Path>) -> &'static SolverConfigHandle {
    SOLVER_CONFIG_HANDLE.get_or_init(|| load_solver_config(custom_path))
}

/// Print config source and warnings the first time it is requested (only in verbose mode).
pub fn log_config_usage() {
    PRINT_CONFIG_ONCE.call_once(|| {
        if !is_verbose() {
            return;
        }
        let handle = solver_config_handle(None);
        if let Some(source) = &handle.source {
            eprintln!("[tinct] Loaded solver config from {}", source.display());
        } else {
            eprintln!("[tinct] Using built-in solver defaults");
        }

        for warning in &handle.warnings {
            eprintln!("[tinct] Config warning: {}", warning);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_from_explicit_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tinct.yml");
        fs::write(
            &path,
            "solver:\n  wide_iterations: 200\n  max_attempts: 5\n  seed: 42\n",
        )
        .unwrap();

        let handle = load_solver_config(Some(&path));
        assert!(handle.source.is_some());
        assert!(handle.warnings.is_empty());

        let solver = &handle.config.solver;
        assert_eq!(solver.wide_iterations, 200);
        assert_eq!(solver.max_attempts, Some(5));
        assert_eq!(solver.seed, Some(42));
        // Unspecified fields keep their defaults
        assert_eq!(solver.narrow_iterations, 500);
        assert_eq!(solver.target_loss, 30.0);
    }

    #[test]
    fn test_load_sanitizes_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tinct.yml");
        fs::write(&path, "solver:\n  wide_attempts: 0\n  target_loss: -4.0\n").unwrap();

        let handle = load_solver_config(Some(&path));
        assert_eq!(handle.config.solver.wide_attempts, 3);
        assert_eq!(handle.config.solver.target_loss, 30.0);
    }

    #[test]
    fn test_invalid_yaml_falls_back_with_warning() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tinct.yml");
        fs::write(&path, "solver: [this is not a map").unwrap();

        let handle = load_solver_config(Some(&path));
        assert!(handle.source.is_none());
        assert_eq!(handle.config, SolverConfig::default());
        assert!(handle
            .warnings
            .iter()
            .any(|w| w.contains("Failed to parse solver config")));
    }

    #[test]
    fn test_missing_explicit_path_uses_defaults() {
        let dir = tempdir().unwrap();
        let handle = load_solver_config(Some(&dir.path().join("absent.yml")));
        assert!(handle.source.is_none());
        assert_eq!(handle.config, SolverConfig::default());
        assert!(handle
            .warnings
            .iter()
            .any(|w| w.contains("built-in defaults")));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tinct.yml");

        let mut config = SolverConfig::default();
        config.solver.narrow_iterations = 250;
        config.solver.time_budget_ms = Some(2000);
        save_solver_config(&config, &path).unwrap();

        let handle = load_solver_config(Some(&path));
        assert_eq!(handle.config, config);
    }
}
