//! Estimator hyperparameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{check_gamma, check_lambda, EstimatorError};

/// Hyperparameters shared by every rollout an [`Estimator`](crate::Estimator) processes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EstimatorConfig {
    /// Discount factor γ.
    pub gamma: f64,
    /// GAE λ parameter.
    pub gae_lambda: f64,
    /// Normalize advantages to zero mean and unit variance after GAE.
    /// Returns are never normalized.
    pub normalize_advantages: bool,
}

impl EstimatorConfig {
    /// Checks that γ and λ lie in `[0, 1]`.
    pub fn validate(&self) -> Result<(), EstimatorError> {
        check_gamma(self.gamma)?;
        check_lambda(self.gae_lambda)
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            gamma: 0.99,
            gae_lambda: 0.95,
            normalize_advantages: false,
        }
    }
}
