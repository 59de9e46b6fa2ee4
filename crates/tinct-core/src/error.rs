//! Error types for color parsing and solving
//!
//! Numeric domain problems (out-of-range channels, filter values past their
//! bounds) are never errors; they are clamped or wrapped where they occur.

use std::fmt;

use crate::models::StopReason;

/// Result type alias for tinct operations
pub type TinctResult<T> = Result<T, TinctError>;

/// Error type for tinct operations
#[derive(Debug, Clone, PartialEq)]
pub enum TinctError {
    /// Input is not a `#rgb` / `#rrggbb` hex color
    InvalidHex { input: String },

    /// The solve stopped before reaching the target loss
    NotConverged {
        loss: f64,
        attempts: usize,
        reason: StopReason,
    },

    /// The background solve thread could not be started or panicked
    Worker { details: String },
}

impl fmt::Display for TinctError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TinctError::InvalidHex { input } => {
                write!(
                    f,
                    "Invalid HEX color format: '{}' (expected #rgb or #rrggbb)",
                    input
                )
            }
            TinctError::NotConverged {
                loss,
                attempts,
                reason,
            } => {
                write!(
                    f,
                    "Solver did not converge: best loss {:.1} after {} attempt(s) ({})",
                    loss, attempts, reason
                )
            }
            TinctError::Worker { details } => {
                write!(f, "Solver worker failed: {}", details)
            }
        }
    }
}

impl std::error::Error for TinctError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = TinctError::InvalidHex {
            input: "#12".to_string(),
        };
        assert!(err.to_string().contains("'#12'"));

        let err = TinctError::NotConverged {
            loss: 42.25,
            attempts: 20,
            reason: StopReason::AttemptsExhausted,
        };
        let msg = err.to_string();
        assert!(msg.contains("42.2") || msg.contains("42.3"));
        assert!(msg.contains("20 attempt(s)"));
        assert!(msg.contains("attempt limit reached"));

        let err = TinctError::Worker {
            details: "thread panicked".to_string(),
        };
        assert_eq!(err.to_string(), "Solver worker failed: thread panicked");
    }
}
