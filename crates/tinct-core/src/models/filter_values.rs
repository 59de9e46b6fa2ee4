//! The six-parameter filter chain searched by the solver.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Number of filter parameters in the chain.
pub const PARAM_COUNT: usize = 6;

/// One slot of the filter chain, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterParam {
    /// `invert()` percent, 0-100
    Invert,

    /// `sepia()` percent, 0-100
    Sepia,

    /// `saturate()` percent, 0-7500
    Saturate,

    /// `hue-rotate()` in 0-100 units, 3.6 degrees each
    HueRotate,

    /// `brightness()` percent, 0-200
    Brightness,

    /// `contrast()` percent, 0-200
    Contrast,
}

impl FilterParam {
    /// All parameters in chain order.
    pub const ALL: [FilterParam; PARAM_COUNT] = [
        FilterParam::Invert,
        FilterParam::Sepia,
        FilterParam::Saturate,
        FilterParam::HueRotate,
        FilterParam::Brightness,
        FilterParam::Contrast,
    ];

    /// Position of the parameter inside a [`FilterValues`] vector.
    pub fn index(self) -> usize {
        self as usize
    }

    /// CSS function name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Invert => "invert",
            Self::Sepia => "sepia",
            Self::Saturate => "saturate",
            Self::HueRotate => "hue-rotate",
            Self::Brightness => "brightness",
            Self::Contrast => "contrast",
        }
    }

    /// Upper bound of the parameter's domain (lower bound is always 0).
    pub fn max(self) -> f64 {
        match self {
            Self::Saturate => 7500.0,
            Self::Brightness | Self::Contrast => 200.0,
            Self::Invert | Self::Sepia | Self::HueRotate => 100.0,
        }
    }

    /// Bring a value back into the parameter's domain.
    ///
    /// Hue rotation is periodic and wraps; everything else clamps.
    pub fn fix(self, value: f64) -> f64 {
        let max = self.max();
        match self {
            Self::HueRotate => {
                if value > max {
                    value % max
                } else if value < 0.0 {
                    max + value % max
                } else {
                    value
                }
            }
            _ => value.clamp(0.0, max),
        }
    }
}

/// Filter parameter vector:
/// `[invert%, sepia%, saturate%, hue-rotate unit, brightness%, contrast%]`.
///
/// Serializes as a plain six-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterValues(pub [f64; PARAM_COUNT]);

impl Default for FilterValues {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl FilterValues {
    /// Starting point of the wide search.
    pub const INITIAL: FilterValues = FilterValues([50.0, 20.0, 3750.0, 50.0, 100.0, 100.0]);

    /// Values that leave a color untouched (apart from the black reset).
    pub const NEUTRAL: FilterValues = FilterValues([0.0, 0.0, 100.0, 0.0, 100.0, 100.0]);

    pub fn new(values: [f64; PARAM_COUNT]) -> Self {
        Self(values)
    }

    pub fn get(&self, param: FilterParam) -> f64 {
        self.0[param.index()]
    }

    pub fn as_array(&self) -> &[f64; PARAM_COUNT] {
        &self.0
    }

    /// Copy with every component wrapped or clamped into its domain.
    pub fn normalized(&self) -> Self {
        let mut values = self.0;
        for (value, param) in values.iter_mut().zip(FilterParam::ALL) {
            *value = param.fix(*value);
        }
        Self(values)
    }

    /// Run the filter chain over `color` in place.
    pub fn apply_to(&self, color: &mut Color) {
        let v = &self.0;
        color.invert(v[0] / 100.0);
        color.sepia(v[1] / 100.0);
        color.saturate(v[2] / 100.0);
        color.hue_rotate(v[3] * 3.6);
        color.brightness(v[4] / 100.0);
        color.contrast(v[5] / 100.0);
    }

    /// Color produced by running the filter chain over black.
    pub fn apply_to_black(&self) -> Color {
        let mut color = Color::black();
        self.apply_to(&mut color);
        color
    }

    /// CSS `filter` value.
    ///
    /// The leading `brightness(0) saturate(100%)` forces the element to black
    /// first, since the chain is solved starting from black.
    pub fn to_css(&self) -> String {
        let fmt = |idx: usize, multiplier: f64| (self.0[idx] * multiplier).round();
        format!(
            "brightness(0) saturate(100%) invert({}%) sepia({}%) saturate({}%) hue-rotate({}deg) brightness({}%) contrast({}%)",
            fmt(0, 1.0),
            fmt(1, 1.0),
            fmt(2, 1.0),
            fmt(3, 3.6),
            fmt(4, 1.0),
            fmt(5, 1.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_clamps_linear_params() {
        assert_eq!(FilterParam::Invert.fix(-5.0), 0.0);
        assert_eq!(FilterParam::Invert.fix(105.0), 100.0);
        assert_eq!(FilterParam::Sepia.fix(42.0), 42.0);
        assert_eq!(FilterParam::Saturate.fix(9000.0), 7500.0);
        assert_eq!(FilterParam::Brightness.fix(250.0), 200.0);
        assert_eq!(FilterParam::Contrast.fix(-0.1), 0.0);
    }

    #[test]
    fn test_fix_wraps_hue() {
        assert!((FilterParam::HueRotate.fix(130.0) - 30.0).abs() < 1e-9);
        assert!((FilterParam::HueRotate.fix(-30.0) - 70.0).abs() < 1e-9);
        assert!((FilterParam::HueRotate.fix(-250.0) - 50.0).abs() < 1e-9);
        assert_eq!(FilterParam::HueRotate.fix(100.0), 100.0);
        assert_eq!(FilterParam::HueRotate.fix(0.0), 0.0);
    }

    #[test]
    fn test_param_order_matches_indices() {
        for (i, param) in FilterParam::ALL.iter().enumerate() {
            assert_eq!(param.index(), i);
        }
        assert_eq!(FilterParam::HueRotate.as_str(), "hue-rotate");
    }

    #[test]
    fn test_normalized() {
        let values = FilterValues::new([120.0, -3.0, 8000.0, -10.0, 201.0, 50.0]).normalized();
        assert_eq!(values.get(FilterParam::Invert), 100.0);
        assert_eq!(values.get(FilterParam::Sepia), 0.0);
        assert_eq!(values.get(FilterParam::Saturate), 7500.0);
        assert!((values.get(FilterParam::HueRotate) - 90.0).abs() < 1e-9);
        assert_eq!(values.get(FilterParam::Brightness), 200.0);
        assert_eq!(values.get(FilterParam::Contrast), 50.0);
    }

    #[test]
    fn test_to_css_rounds_and_scales_hue() {
        let values = FilterValues::new([49.6, 20.2, 3750.5, 50.0, 99.4, 100.0]);
        assert_eq!(
            values.to_css(),
            "brightness(0) saturate(100%) invert(50%) sepia(20%) saturate(3751%) hue-rotate(180deg) brightness(99%) contrast(100%)"
        );
    }

    #[test]
    fn test_neutral_chain_keeps_black() {
        let color = FilterValues::NEUTRAL.apply_to_black();
        assert_eq!(color.to_rgb_string(), "rgb(0, 0, 0)");
    }

    #[test]
    fn test_full_invert_chain_yields_white() {
        let mut values = FilterValues::NEUTRAL;
        values.0[FilterParam::Invert.index()] = 100.0;
        assert_eq!(values.apply_to_black().to_rgb_string(), "rgb(255, 255, 255)");
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let json = serde_json::to_string(&FilterValues::NEUTRAL).unwrap();
        assert_eq!(json, "[0.0,0.0,100.0,0.0,100.0,100.0]");
        let back: FilterValues = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FilterValues::NEUTRAL);
    }
}
