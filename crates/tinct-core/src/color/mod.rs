//! Color model and CSS filter emulation
//!
//! Provides the clamped RGB [`Color`] used by the solver, the CSS filter
//! primitives (invert, sepia, saturate, hue-rotate, brightness, contrast,
//! grayscale), the RGB -> HSL projection and strict hex color parsing.

mod filters;
mod hex;
mod hsl;
mod rgb;


// Re-export primary types
pub use hsl::Hsl;
pub use rgb::Color;

// Re-export conversion helpers
pub use hex::{is_valid_hex, parse_hex};
pub use hsl::rgb_to_hsl;

// Re-export filter matrices
pub use filters::{grayscale_matrix, hue_rotate_matrix, saturate_matrix, sepia_matrix, Matrix3};
