//! Configured front door for computing learning targets.

use crate::config::EstimatorConfig;
use crate::error::EstimatorError;
use crate::gae::GaeOutput;
use crate::normalize::normalize_advantages;
use crate::rollout::Rollout;

/// Computes returns and advantages for rollouts under a fixed [`EstimatorConfig`].
///
/// Holds no state between calls; one estimator can serve any number of
/// rollouts, including from several workers.
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    config: EstimatorConfig,
}

impl Estimator {
    /// Creates an estimator after validating `config`.
    pub fn new(config: EstimatorConfig) -> Result<Self, EstimatorError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Hyperparameters this estimator was built with.
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Discounted return per step of `rollout`.
    pub fn returns(&self, rollout: &Rollout, next_value: f64) -> Result<Vec<f64>, EstimatorError> {
        rollout.discounted_returns(self.config.gamma, next_value)
    }

    /// GAE advantages and value targets for `rollout`.
    ///
    /// With `normalize_advantages` set, the advantages are normalized after
    /// the returns have been derived from the raw ones.
    pub fn advantages(
        &self,
        rollout: &Rollout,
        next_value: f64,
    ) -> Result<GaeOutput, EstimatorError> {
        let mut out = rollout.gae(self.config.gamma, self.config.gae_lambda, next_value)?;
        if self.config.normalize_advantages {
            out.advantages = normalize_advantages(&out.advantages);
        }
        Ok(out)
    }
}
