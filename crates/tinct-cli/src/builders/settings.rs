use std::time::Duration;

use tinct_core::config::SolverDefaults;
use tinct_core::SolverSettings;

/// Solver knobs that can be set on the command line.
///
/// `None` keeps the value from the loaded config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolveOverrides {
    pub seed: Option<u64>,
    pub max_attempts: Option<usize>,
    pub time_budget_ms: Option<u64>,
    /// Drop the attempt limit entirely (retry until converged or timed out)
    pub unbounded: bool,
}

/// Build solver settings and the seed to use from config defaults and overrides.
///
/// Priority: command line > config file > built-in defaults. A zero
/// `--max-attempts` is rejected rather than silently replaced.
pub fn build_solver_settings(
    defaults: &SolverDefaults,
    overrides: &SolveOverrides,
) -> Result<(SolverSettings, Option<u64>), String> {
    let mut settings = defaults.to_settings();

    if let Some(max_attempts) = overrides.max_attempts {
        if max_attempts == 0 {
            return Err("--max-attempts must be at least 1".to_string());
        }
        settings.max_attempts = Some(max_attempts);
    }
    if overrides.unbounded {
        if overrides.max_attempts.is_some() {
            return Err("--max-attempts and --unbounded cannot be combined".to_string());
        }
        settings.max_attempts = None;
    }

    if let Some(ms) = overrides.time_budget_ms {
        settings.time_budget = (ms > 0).then(|| Duration::from_millis(ms));
    }

    if settings.max_attempts.is_none() && settings.time_budget.is_none() {
        tinct_core::verbose_println!(
            "no attempt limit or time budget; the solve runs until it converges"
        );
    }

    Ok((settings, overrides.seed.or(defaults.seed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_pass_through() {
        let defaults = SolverDefaults::default();
        let (settings, seed) =
            build_solver_settings(&defaults, &SolveOverrides::default()).unwrap();
        assert_eq!(settings, defaults.to_settings());
        assert_eq!(seed, None);
    }

    #[test]
    fn test_overrides_win_over_config() {
        let defaults = SolverDefaults {
            max_attempts: Some(7),
            seed: Some(1),
            ..SolverDefaults::default()
        };
        let overrides = SolveOverrides {
            seed: Some(99),
            max_attempts: Some(3),
            time_budget_ms: Some(1500),
            unbounded: false,
        };

        let (settings, seed) = build_solver_settings(&defaults, &overrides).unwrap();
        assert_eq!(settings.max_attempts, Some(3));
        assert_eq!(settings.time_budget, Some(Duration::from_millis(1500)));
        assert_eq!(seed, Some(99));
    }

    #[test]
    fn test_config_seed_used_without_override() {
        let defaults = SolverDefaults {
            seed: Some(5),
            ..SolverDefaults::default()
        };
        let (_, seed) = build_solver_settings(&defaults, &SolveOverrides::default()).unwrap();
        assert_eq!(seed, Some(5));
    }

    #[test]
    fn test_zero_time_budget_disables_budget() {
        let defaults = SolverDefaults {
            time_budget_ms: Some(300),
            ..SolverDefaults::default()
        };
        let overrides = SolveOverrides {
            time_budget_ms: Some(0),
            ..SolveOverrides::default()
        };
        let (settings, _) = build_solver_settings(&defaults, &overrides).unwrap();
        assert_eq!(settings.time_budget, None);
    }

    #[test]
    fn test_unbounded_and_limits() {
        let defaults = SolverDefaults::default();
        let unbounded = SolveOverrides {
            unbounded: true,
            ..SolveOverrides::default()
        };
        let (settings, _) = build_solver_settings(&defaults, &unbounded).unwrap();
        assert_eq!(settings.max_attempts, None);

        let conflicting = SolveOverrides {
            max_attempts: Some(4),
            unbounded: true,
            ..SolveOverrides::default()
        };
        assert!(build_solver_settings(&defaults, &conflicting).is_err());

        let zero = SolveOverrides {
            max_attempts: Some(0),
            ..SolveOverrides::default()
        };
        assert!(build_solver_settings(&defaults, &zero).is_err());
    }
}
