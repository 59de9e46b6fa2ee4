//! Distance between a candidate filter chain and the target color.

use crate::color::{Color, Hsl};
use crate::models::FilterValues;

/// Loss evaluator bound to one target color.
///
/// Owns the scratch color every evaluation renders into, so each solve (or
/// each parallel solve) must hold its own evaluator.
#[derive(Debug, Clone)]
pub struct TargetLoss {
    target: Color,
    target_hsl: Hsl,
    scratch: Color,
}

impl TargetLoss {
    pub fn new(target: Color) -> Self {
        Self {
            target,
            target_hsl: target.to_hsl(),
            scratch: Color::black(),
        }
    }

    pub fn target(&self) -> Color {
        self.target
    }

    /// Run the chain over black and sum the absolute RGB and HSL differences.
    ///
    /// The terms are unweighted (hue spans 0-360, S/L 0-100,
    /// channels 0-255); the convergence thresholds assume this exact sum.
    pub fn eval(&mut self, values: &FilterValues) -> f64 {
        let color = &mut self.scratch;
        color.set(0.0, 0.0, 0.0);
        values.apply_to(color);

        let hsl = color.to_hsl();
        let target = &self.target;
        let target_hsl = &self.target_hsl;

        (color.r - target.r).abs()
            + (color.g - target.g).abs()
            + (color.b - target.b).abs()
            + (hsl.h - target_hsl.h).abs()
            + (hsl.s - target_hsl.s).abs()
            + (hsl.l - target_hsl.l).abs()
    }
}
