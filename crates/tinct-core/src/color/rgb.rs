//! Clamped RGB color used as the filter evaluation surface

use std::fmt;

/// Upper bound of every channel.
pub(crate) const CHANNEL_MAX: f64 = 255.0;

/// RGB color with channels in the 0.0-255.0 range.
///
/// Channels are stored unrounded so successive filter operations compose the
/// same way a browser's filter pipeline does; rounding only happens when the
/// color is formatted. Every mutation clamps each channel back into range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub(crate) r: f64,
    pub(crate) g: f64,
    pub(crate) b: f64,
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl Color {
    /// Create a color, clamping each channel into 0-255.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        let mut color = Self::black();
        color.set(r, g, b);
        color
    }

    /// Pure black, the starting point of every filter evaluation.
    pub const fn black() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
        }
    }

    /// Create a color from 8-bit channels.
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0] as f64, rgb[1] as f64, rgb[2] as f64)
    }

    /// Overwrite all channels. Out-of-range inputs are clamped, never rejected.
    pub fn set(&mut self, r: f64, g: f64, b: f64) {
        self.r = clamp_channel(r);
        self.g = clamp_channel(g);
        self.b = clamp_channel(b);
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    /// Channels as an array, unrounded.
    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels rounded to the nearest integer.
    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            self.r.round() as u8,
            self.g.round() as u8,
            self.b.round() as u8,
        ]
    }

    /// Format as `rgb(r, g, b)` with rounded channels.
    pub fn to_rgb_string(&self) -> String {
        self.to_string()
    }

    /// Format as lowercase `#rrggbb` with rounded channels.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb8();
        write!(f, "rgb({}, {}, {})", r, g, b)
    }
}

/// Clamp a channel value into 0-255.
#[inline]
pub(crate) fn clamp_channel(value: f64) -> f64 {
    value.clamp(0.0, CHANNEL_MAX)
}
