//! Error types for simulation and sweep configuration.

use thiserror::Error;

/// Errors raised while validating run or sweep settings.
///
/// Simulation outcomes never error; a run that does not settle is `None`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TuneError {
    /// Time step must be finite and positive.
    #[error("invalid time step: {0} (must be finite and > 0)")]
    InvalidDt(f64),

    /// Ball mass must be finite and positive.
    #[error("invalid ball mass: {0} (must be finite and > 0)")]
    InvalidMass(f64),

    /// Swing travel and rate limits are magnitudes.
    #[error("{name} must not be negative: {value}")]
    NegativeLimit { name: &'static str, value: f64 },

    /// A run needs at least one tick.
    #[error("tick budget must be at least 1")]
    EmptyTickBudget,

    /// The ball has to fit on the swing.
    #[error("ball of size {size} does not fit on a swing of length {length}")]
    BallDoesNotFit { size: f64, length: f64 },

    /// Initial ball position lies beyond the end-stop.
    #[error("initial position {position} is beyond the end-stop at {limit}")]
    StartOutOfRange { position: f64, limit: f64 },

    /// A named parameter is NaN or infinite.
    #[error("{name} is not finite: {value}")]
    NonFinite { name: &'static str, value: f64 },

    /// Sweep range contains no grid points.
    #[error("empty k_p range [{start}, {end})")]
    EmptyRange { start: f64, end: f64 },

    /// Sweep step must be positive.
    #[error("invalid k_p step: {0} (must be > 0)")]
    InvalidStep(f64),

    /// Bracket bounds are reversed.
    #[error("invalid bracket for {name}: low {low} > high {high}")]
    InvalidBracket { name: &'static str, low: f64, high: f64 },
}

/// Result type for configuration validation.
pub type TuneResult<T> = std::result::Result<T, TuneError>;

/// Reject NaN and infinities for a named parameter.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> TuneResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TuneError::NonFinite { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TuneError::EmptyTickBudget;
        assert_eq!(format!("{err}"), "tick budget must be at least 1");

        let err = TuneError::InvalidStep(-1e-7);
        assert!(format!("{err}").contains("-0.0000001"));

        let err = TuneError::BallDoesNotFit {
            size: 300.0,
            length: 200.0,
        };
        assert!(format!("{err}").contains("300"));

        let err = TuneError::NegativeLimit {
            name: "max_delta",
            value: -0.1,
        };
        assert_eq!(format!("{err}"), "max_delta must not be negative: -0.1");
    }

    #[test]
    fn finite_check() {
        assert!(ensure_finite("k_i", 0.01).is_ok());
        assert_eq!(
            ensure_finite("k_i", f64::NAN).unwrap_err().to_string(),
            "k_i is not finite: NaN"
        );
    }
}
