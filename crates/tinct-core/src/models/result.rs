//! Solver output types.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::FilterValues;
use crate::error::{TinctError, TinctResult};

/// Why the outer wide/narrow loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// A round reached the target loss
    Converged,

    /// The maximum number of rounds ran without reaching the target loss
    AttemptsExhausted,

    /// The wall-clock budget ran out
    TimeBudgetExceeded,

    /// The caller cancelled the solve
    Cancelled,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Converged => "converged",
            Self::AttemptsExhausted => "attempt limit reached",
            Self::TimeBudgetExceeded => "time budget exceeded",
            Self::Cancelled => "cancelled",
        };
        f.write_str(text)
    }
}

/// Result of one solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    /// Best filter parameters found
    pub values: FilterValues,

    /// Loss of `values` against the target
    pub loss: f64,

    /// CSS `filter` value for `values`
    pub filter: String,

    /// Whether `loss` reached the target loss
    pub converged: bool,

    /// Number of wide/narrow rounds that ran
    pub attempts: usize,

    pub stop_reason: StopReason,
}

impl SolveResult {
    /// Human-readable grade of the loss.
    pub fn quality(&self) -> LossQuality {
        LossQuality::from_loss(self.loss)
    }

    /// Turn a best-effort result into an error when it did not converge.
    pub fn into_converged(self) -> TinctResult<Self> {
        if self.converged {
            Ok(self)
        } else {
            Err(TinctError::NotConverged {
                loss: self.loss,
                attempts: self.attempts,
                reason: self.stop_reason,
            })
        }
    }
}

/// How visible the difference between the filtered and target color is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossQuality {
    /// Loss < 1
    Perfect,

    /// Loss < 5
    VeryClose,

    /// Loss < 15
    Acceptable,

    /// Everything else
    Off,
}

impl LossQuality {
    pub fn from_loss(loss: f64) -> Self {
        if loss < 1.0 {
            Self::Perfect
        } else if loss < 5.0 {
            Self::VeryClose
        } else if loss < 15.0 {
            Self::Acceptable
        } else {
            Self::Off
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect result, no visible difference.",
            Self::VeryClose => "Result is very close to the target color.",
            Self::Acceptable => "Acceptable result, with a slight difference.",
            Self::Off => "Result is off, consider trying again.",
        }
    }
}

impl fmt::Display for LossQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(converged: bool) -> SolveResult {
        let values = FilterValues::NEUTRAL;
        SolveResult {
            values,
            loss: if converged { 3.5 } else { 48.0 },
            filter: values.to_css(),
            converged,
            attempts: 2,
            stop_reason: if converged {
                StopReason::Converged
            } else {
                StopReason::AttemptsExhausted
            },
        }
    }

    #[test]
    fn test_loss_quality_thresholds() {
        assert_eq!(LossQuality::from_loss(0.0), LossQuality::Perfect);
        assert_eq!(LossQuality::from_loss(0.99), LossQuality::Perfect);
        assert_eq!(LossQuality::from_loss(1.0), LossQuality::VeryClose);
        assert_eq!(LossQuality::from_loss(4.99), LossQuality::VeryClose);
        assert_eq!(LossQuality::from_loss(5.0), LossQuality::Acceptable);
        assert_eq!(LossQuality::from_loss(14.9), LossQuality::Acceptable);
        assert_eq!(LossQuality::from_loss(15.0), LossQuality::Off);
        assert_eq!(LossQuality::from_loss(f64::INFINITY), LossQuality::Off);
    }

    #[test]
    fn test_into_converged() {
        let ok = sample(true).into_converged().unwrap();
        assert_eq!(ok.quality(), LossQuality::VeryClose);

        let err = sample(false).into_converged().unwrap_err();
        assert_eq!(
            err,
            TinctError::NotConverged {
                loss: 48.0,
                attempts: 2,
                reason: StopReason::AttemptsExhausted,
            }
        );
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample(true)).unwrap();
        assert_eq!(json["values"].as_array().map(|v| v.len()), Some(6));
        assert_eq!(json["stop_reason"], "converged");
        assert!(json["filter"]
            .as_str()
            .unwrap()
            .starts_with("brightness(0) saturate(100%)"));
    }
}
