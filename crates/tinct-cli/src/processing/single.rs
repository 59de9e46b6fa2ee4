use tinct_core::{Solver, SolverSettings};

use crate::parsers::parse_color;
use crate::types::BatchEntry;

/// Seed for the `index`-th color of a batch with base seed `base`.
pub fn batch_seed(base: u64, index: usize) -> u64 {
    base.wrapping_add(index as u64)
}

/// Solve one batch input with its own solver and generator.
///
/// Parse failures are recorded on the entry rather than returned.
pub fn solve_entry(input: &str, settings: &SolverSettings, seed: Option<u64>) -> BatchEntry {
    let target = match parse_color(input) {
        Ok(target) => target,
        Err(e) => {
            return BatchEntry {
                input: input.to_string(),
                hex: None,
                seed: None,
                result: None,
                error: Some(e),
            }
        }
    };

    let result = match seed {
        Some(seed) => Solver::seeded(target, seed)
            .with_settings(settings.clone())
            .solve(),
        None => Solver::new(target).with_settings(settings.clone()).solve(),
    };

    BatchEntry {
        input: input.to_string(),
        hex: Some(target.to_hex()),
        seed,
        result: Some(result),
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_settings() -> SolverSettings {
        SolverSettings {
            wide_iterations: 40,
            narrow_iterations: 20,
            max_attempts: Some(1),
            ..SolverSettings::default()
        }
    }

    #[test]
    fn test_batch_seed_offsets_by_index() {
        assert_eq!(batch_seed(10, 0), 10);
        assert_eq!(batch_seed(10, 3), 13);
        assert_eq!(batch_seed(u64::MAX, 1), 0);
    }

    #[test]
    fn test_invalid_entry_keeps_error() {
        let entry = solve_entry("#zzz", &quick_settings(), Some(1));
        assert!(!entry.is_ok());
        assert!(entry.hex.is_none());
        assert!(entry.error.unwrap().contains("#zzz"));
    }

    #[test]
    fn test_seeded_entries_are_reproducible() {
        let a = solve_entry("#336699", &quick_settings(), Some(4));
        let b = solve_entry("#336699", &quick_settings(), Some(4));
        assert_eq!(a.hex.as_deref(), Some("#336699"));
        assert_eq!(a.result, b.result);
        assert_eq!(a.result.unwrap().attempts, 1);
    }
}
