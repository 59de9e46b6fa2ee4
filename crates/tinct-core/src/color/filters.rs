//! CSS filter primitives applied to a [`Color`] in place
//!
//! The matrix coefficients are the ones from the W3C Filter Effects module that
//! browsers use for `hue-rotate()`, `sepia()`, `saturate()` and
//! `grayscale()`. They must stay bit-for-bit identical so a solved filter
//! renders the same color in a browser.

use super::rgb::{clamp_channel, Color, CHANNEL_MAX};

/// Row-major 3x3 color matrix.
pub type Matrix3 = [f64; 9];

/// Hue rotation matrix for an angle in degrees.
pub fn hue_rotate_matrix(angle_deg: f64) -> Matrix3 {
    let angle = angle_deg / 180.0 * std::f64::consts::PI;
    let sin = angle.sin();
    let cos = angle.cos();

    [
        0.213 + cos * 0.787 - sin * 0.213,
        0.715 - cos * 0.715 - sin * 0.715,
        0.072 - cos * 0.072 + sin * 0.928,
        0.213 - cos * 0.213 + sin * 0.143,
        0.715 + cos * 0.285 + sin * 0.140,
        0.072 - cos * 0.072 - sin * 0.283,
        0.213 - cos * 0.213 - sin * 0.787,
        0.715 - cos * 0.715 + sin * 0.715,
        0.072 + cos * 0.928 + sin * 0.072,
    ]
}

/// Grayscale matrix; `amount` 0.0 is identity, 1.0 full grayscale.
pub fn grayscale_matrix(amount: f64) -> Matrix3 {
    let inv = 1.0 - amount;
    [
        0.2126 + 0.7874 * inv,
        0.7152 - 0.7152 * inv,
        0.0722 - 0.0722 * inv,
        0.2126 - 0.2126 * inv,
        0.7152 + 0.2848 * inv,
        0.0722 - 0.0722 * inv,
        0.2126 - 0.2126 * inv,
        0.7152 - 0.7152 * inv,
        0.0722 + 0.9278 * inv,
    ]
}

/// Sepia matrix; `amount` 0.0 is identity, 1.0 full sepia.
pub fn sepia_matrix(amount: f64) -> Matrix3 {
    let inv = 1.0 - amount;
    [
        0.393 + 0.607 * inv,
        0.769 - 0.769 * inv,
        0.189 - 0.189 * inv,
        0.349 - 0.349 * inv,
        0.686 + 0.314 * inv,
        0.168 - 0.168 * inv,
        0.272 - 0.272 * inv,
        0.534 - 0.534 * inv,
        0.131 + 0.869 * inv,
    ]
}

/// Saturation matrix; `amount` 1.0 is identity, 0.0 fully desaturated.
pub fn saturate_matrix(amount: f64) -> Matrix3 {
    [
        0.213 + 0.787 * amount,
        0.715 - 0.715 * amount,
        0.072 - 0.072 * amount,
        0.213 - 0.213 * amount,
        0.715 + 0.285 * amount,
        0.072 - 0.072 * amount,
        0.213 - 0.213 * amount,
        0.715 - 0.715 * amount,
        0.072 + 0.928 * amount,
    ]
}

impl Color {
    /// `hue-rotate(angle_deg)`
    pub fn hue_rotate(&mut self, angle_deg: f64) {
        self.multiply(&hue_rotate_matrix(angle_deg));
    }

    /// `grayscale(amount)`
    pub fn grayscale(&mut self, amount: f64) {
        self.multiply(&grayscale_matrix(amount));
    }

    /// `sepia(amount)`
    pub fn sepia(&mut self, amount: f64) {
        self.multiply(&sepia_matrix(amount));
    }

    /// `saturate(amount)`
    pub fn saturate(&mut self, amount: f64) {
        self.multiply(&saturate_matrix(amount));
    }

    /// Apply a general 3x3 transform. All three outputs are computed from the
    /// channels as they were before the call.
    pub fn multiply(&mut self, m: &Matrix3) {
        let (r, g, b) = (self.r, self.g, self.b);
        self.r = clamp_channel(r * m[0] + g * m[1] + b * m[2]);
        self.g = clamp_channel(r * m[3] + g * m[4] + b * m[5]);
        self.b = clamp_channel(r * m[6] + g * m[7] + b * m[8]);
    }

    /// `brightness(value)`: scale all channels.
    pub fn brightness(&mut self, value: f64) {
        self.linear(value, 0.0);
    }

    /// `contrast(value)`: scale around mid-gray.
    pub fn contrast(&mut self, value: f64) {
        self.linear(value, -(0.5 * value) + 0.5);
    }

    /// Affine transform `channel * slope + intercept * 255`.
    pub fn linear(&mut self, slope: f64, intercept: f64) {
        let offset = intercept * CHANNEL_MAX;
        self.r = clamp_channel(self.r * slope + offset);
        self.g = clamp_channel(self.g * slope + offset);
        self.b = clamp_channel(self.b * slope + offset);
    }

    /// `invert(value)`: 0.0 leaves the color unchanged, 1.0 fully inverts it.
    pub fn invert(&mut self, value: f64) {
        let scale = 1.0 - 2.0 * value;
        self.r = clamp_channel((value + self.r / CHANNEL_MAX * scale) * CHANNEL_MAX);
        self.g = clamp_channel((value + self.g / CHANNEL_MAX * scale) * CHANNEL_MAX);
        self.b = clamp_channel((value + self.b / CHANNEL_MAX * scale) * CHANNEL_MAX);
    }
}
