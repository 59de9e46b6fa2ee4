//! Human-readable output for solve and apply.

use std::fmt::Write;

use tinct_core::models::{FilterParam, FilterValues, LossQuality};
use tinct_core::solver::TargetLoss;
use tinct_core::{Color, SolveResult};

fn write_values(out: &mut String, values: &FilterValues) {
    let parts: Vec<String> = FilterParam::ALL
        .iter()
        .map(|param| format!("{} {:.2}", param.as_str(), values.get(*param)))
        .collect();
    let _ = writeln!(out, "Values:   {}", parts.join(", "));
}

/// Multi-line report for a finished solve.
pub fn format_solve_report(target: Color, result: &SolveResult, seed: Option<u64>) -> String {
    let mut out = String::new();
    let rendered = result.values.apply_to_black();

    let _ = writeln!(out, "Target:   {} ({})", target.to_hex(), target);
    let _ = writeln!(out, "Result:   {} ({})", rendered.to_hex(), rendered);
    let _ = writeln!(
        out,
        "Loss:     {:.1}. {}",
        result.loss,
        result.quality().message()
    );
    write_values(&mut out, &result.values);
    let _ = writeln!(out, "Rounds:   {} ({})", result.attempts, result.stop_reason);
    if let Some(seed) = seed {
        let _ = writeln!(out, "Seed:     {}", seed);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "filter: {};", result.filter);

    out
}

/// Report for applying a fixed vector, with the loss when a target is given.
pub fn format_apply_report(values: &FilterValues, target: Option<Color>) -> String {
    let mut out = String::new();
    let rendered = values.apply_to_black();

    let _ = writeln!(out, "Result:   {} ({})", rendered.to_hex(), rendered);
    write_values(&mut out, values);
    if let Some(target) = target {
        let loss = TargetLoss::new(target).eval(values);
        let _ = writeln!(out, "Target:   {} ({})", target.to_hex(), target);
        let _ = writeln!(
            out,
            "Loss:     {:.1}. {}",
            loss,
            LossQuality::from_loss(loss).message()
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "filter: {};", values.to_css());

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_core::StopReason;

    #[test]
    fn test_solve_report_lines() {
        let values = FilterValues::NEUTRAL;
        let result = SolveResult {
            values,
            loss: 0.4,
            filter: values.to_css(),
            converged: true,
            attempts: 1,
            stop_reason: StopReason::Converged,
        };
        let report = format_solve_report(Color::black(), &result, Some(7));

        assert!(report.contains("Target:   #000000 (rgb(0, 0, 0))"));
        assert!(report.contains("Loss:     0.4. Perfect result, no visible difference."));
        assert!(report.contains("Rounds:   1 (converged)"));
        assert!(report.contains("Seed:     7"));
        assert!(report.ends_with(&format!("filter: {};\n", values.to_css())));
    }

    #[test]
    fn test_apply_report_with_target() {
        let white = Color::from_rgb8([255, 255, 255]);
        let report = format_apply_report(&FilterValues::NEUTRAL, Some(white));
        assert!(report.contains("Result:   #000000"));
        assert!(report.contains("Loss:     865.0. Result is off, consider trying again."));
        assert!(report.contains("hue-rotate 0.00"));
    }

    #[test]
    fn test_apply_report_without_target_has_no_loss() {
        let report = format_apply_report(&FilterValues::INITIAL, None);
        assert!(!report.contains("Loss:"));
        assert!(report.contains("filter: brightness(0) saturate(100%) invert(50%)"));
    }
}
