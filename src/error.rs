use thiserror::Error;

/// Errors raised when a rollout or its parameters are malformed.
///
/// Every variant is a form of invalid input; validation happens before
/// any recurrence step runs, so an error never comes with partial output.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EstimatorError {
    #[error("Rollout is empty: at least one timestep is required")]
    EmptyRollout,

    #[error("Length mismatch: {field} has {actual} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Discount factor gamma must lie in [0, 1], got {0}")]
    GammaOutOfRange(f64),

    #[error("GAE lambda must lie in [0, 1], got {0}")]
    LambdaOutOfRange(f64),

    #[error("Mask at index {index} must be 0 or 1, got {value}")]
    InvalidMask { index: usize, value: f64 },

    #[error("Rollout carries no value estimates")]
    MissingValues,

    #[error("Bootstrap value must be finite, got {0}")]
    NonFiniteBootstrap(f64),
}

impl EstimatorError {
    /// All variants belong to the invalid-input class.
    pub fn is_invalid_input(&self) -> bool {
        true
    }
}

/// Checks that `gamma` is a finite value in `[0, 1]`.
pub(crate) fn check_gamma(gamma: f64) -> Result<(), EstimatorError> {
    if (0.0..=1.0).contains(&gamma) {
        Ok(())
    } else {
        Err(EstimatorError::GammaOutOfRange(gamma))
    }
}

/// Checks that `lambda` is a finite value in `[0, 1]`.
pub(crate) fn check_lambda(lambda: f64) -> Result<(), EstimatorError> {
    if (0.0..=1.0).contains(&lambda) {
        Ok(())
    } else {
        Err(EstimatorError::LambdaOutOfRange(lambda))
    }
}

/// Checks that the bootstrap `next_value` is finite.
///
/// A zero mask or zero γ only suppresses a finite bootstrap: `0.0 * inf`
/// is NaN and would spread through the whole rollout.
pub(crate) fn check_next_value(next_value: f64) -> Result<(), EstimatorError> {
    if next_value.is_finite() {
        Ok(())
    } else {
        Err(EstimatorError::NonFiniteBootstrap(next_value))
    }
}
