//! HSL (Hue-Saturation-Lightness) projection used by the solver's loss

use super::rgb::{Color, CHANNEL_MAX};

/// HSL color representation
/// - H (hue): 0.0-360.0 degrees
/// - S (saturation): 0.0-100.0 percent
/// - L (lightness): 0.0-100.0 percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Convert RGB to HSL
///
/// Input: RGB channels in range 0.0-255.0
/// Output: HSL where H is 0.0-360.0, S and L are 0.0-100.0
///
/// The hue branch is picked by exact equality of the maximum with red, then
/// green, then blue. The solver's convergence threshold was tuned against
/// this exact formulation.
#[inline]
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> Hsl {
    let r = r / CHANNEL_MAX;
    let g = g / CHANNEL_MAX;
    let b = b / CHANNEL_MAX;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    // Lightness
    let l = (max + min) / 2.0;

    // Achromatic case
    if max == min {
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: l * 100.0,
        };
    }

    let delta = max - min;

    // Saturation
    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    // Hue
    let h = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl {
        h: h / 6.0 * 360.0,
        s: s * 100.0,
        l: l * 100.0,
    }
}

impl Color {
    /// Project the current channels into HSL.
    pub fn to_hsl(&self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }
}
