//! Generalized Advantage Estimation (GAE-λ).
//!
//! Computes advantages and returns from rollout data, bootstrapping the
//! open end of the buffer with an externally supplied value estimate.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{check_gamma, check_lambda, check_next_value, EstimatorError};
use crate::rollout::validate_shape;

/// Per-step advantages and value targets produced by [`compute_gae`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaeOutput {
    /// Policy-gradient weights, one per step.
    pub advantages: Vec<f64>,
    /// Value-function targets: `advantages[t] + values[t]`.
    pub returns: Vec<f64>,
}

impl GaeOutput {
    /// Number of timesteps covered.
    pub fn len(&self) -> usize {
        self.advantages.len()
    }

    /// Returns true if no timesteps are covered.
    pub fn is_empty(&self) -> bool {
        self.advantages.is_empty()
    }
}

/// Computes GAE-λ advantages and the returns derived from them.
///
/// # Arguments
///
/// * `rewards` - Per-step rewards
/// * `masks` - Per-step gates, `0.0` on the terminal step of an episode
/// * `values` - Per-step value estimates from the critic
/// * `gamma` - Discount factor in `[0, 1]`
/// * `gae_lambda` - GAE λ in `[0, 1]` (0 = TD(0), 1 = Monte Carlo)
/// * `next_value` - Finite value estimate of the state after the last step
///
/// # Returns
///
/// A [`GaeOutput`] where `returns = advantages + values`.
pub fn compute_gae(
    rewards: &[f64],
    masks: &[f64],
    values: &[f64],
    gamma: f64,
    gae_lambda: f64,
    next_value: f64,
) -> Result<GaeOutput, EstimatorError> {
    validate_shape(rewards, masks, Some(values))?;
    check_gamma(gamma)?;
    check_lambda(gae_lambda)?;
    check_next_value(next_value)?;

    let n = rewards.len();
    log::trace!("computing GAE over {} steps", n);

    let mut advantages = vec![0.0; n];
    let mut gae = 0.0;

    for t in (0..n).rev() {
        let delta = td_residual(rewards, masks, values, gamma, next_value, t);
        gae = delta + gamma * gae_lambda * masks[t] * gae;
        advantages[t] = gae;
    }

    let returns: Vec<f64> = advantages
        .iter()
        .zip(values.iter())
        .map(|(a, v)| a + v)
        .collect();

    Ok(GaeOutput {
        advantages,
        returns,
    })
}

/// Computes the one-step TD residual `δ_t = r_t + γ·V(t+1)·m_t − V(t)` at every step.
///
/// `V(T)` is `next_value`, which must be finite.
pub fn td_residuals(
    rewards: &[f64],
    masks: &[f64],
    values: &[f64],
    gamma: f64,
    next_value: f64,
) -> Result<Vec<f64>, EstimatorError> {
    validate_shape(rewards, masks, Some(values))?;
    check_gamma(gamma)?;
    check_next_value(next_value)?;

    Ok((0..rewards.len())
        .map(|t| td_residual(rewards, masks, values, gamma, next_value, t))
        .collect())
}

fn td_residual(
    rewards: &[f64],
    masks: &[f64],
    values: &[f64],
    gamma: f64,
    next_value: f64,
    t: usize,
) -> f64 {
    let bootstrap = values.get(t + 1).copied().unwrap_or(next_value);
    rewards[t] + gamma * bootstrap * masks[t] - values[t]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gae_bootstraps_open_episode_and_resets_at_boundary() {
        let rewards = vec![1.0, 1.0, 1.0];
        let values = vec![0.5, 0.5, 0.5];
        let masks = vec![1.0, 0.0, 1.0];
        let out = compute_gae(&rewards, &masks, &values, 0.5, 0.5, 2.0).unwrap();

        // t=2 (open): delta = 1 + 0.5*2.0 - 0.5 = 1.5
        // t=1 (terminal): delta = 1 - 0.5 = 0.5, nothing carried back
        // t=0: delta = 1 + 0.5*0.5 - 0.5 = 0.75, gae = 0.75 + 0.25*0.5 = 0.875
        assert_eq!(out.advantages, vec![0.875, 0.5, 1.5]);
        assert_eq!(out.returns, vec![1.375, 1.0, 2.0]);
    }

    #[test]
    fn non_finite_next_value_is_rejected_even_when_gated() {
        let err = compute_gae(&[1.0, 1.0], &[1.0, 0.0], &[0.0, 0.0], 0.9, 0.95, f64::INFINITY)
            .unwrap_err();
        assert_eq!(err, EstimatorError::NonFiniteBootstrap(f64::INFINITY));

        let err = td_residuals(&[1.0], &[0.0], &[0.0], 0.0, f64::NAN).unwrap_err();
        assert!(matches!(err, EstimatorError::NonFiniteBootstrap(_)));
    }

    #[test]
    fn gae_with_lambda_zero() {
        // λ=0 => TD(0): advantages are just TD errors
        let rewards = vec![1.0, 2.0];
        let values = vec![0.5, 1.0];
        let masks = vec![1.0, 0.0];
        let gamma = 0.99;
        let out = compute_gae(&rewards, &masks, &values, gamma, 0.0, 0.0).unwrap();

        // t=1 (terminal): delta = 2.0 + 0 - 1.0 = 1.0
        assert!((out.advantages[1] - 1.0).abs() < 1e-10);
        // t=0: delta = 1.0 + 0.99*1.0 - 0.5 = 1.49
        assert!((out.advantages[0] - 1.49).abs() < 1e-10);
    }

    #[test]
    fn open_end_bootstraps_with_next_value() {
        let out = compute_gae(&[1.0], &[1.0], &[2.0], 0.5, 0.95, 4.0).unwrap();
        // delta = 1 + 0.5*4 - 2 = 1
        assert!((out.advantages[0] - 1.0).abs() < 1e-10);
        assert!((out.returns[0] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn advantage_does_not_cross_episode_boundary() {
        let rewards = [0.0, 0.0, 10.0];
        let values = [0.0, 0.0, 0.0];
        let masks = [1.0, 0.0, 1.0];
        let out = compute_gae(&rewards, &masks, &values, 1.0, 1.0, 0.0).unwrap();
        assert_eq!(out.advantages, vec![0.0, 0.0, 10.0]);
    }

    #[test]
    fn td_residuals_use_next_value_at_end() {
        let deltas = td_residuals(&[1.0, 1.0], &[1.0, 1.0], &[0.0, 1.0], 1.0, 5.0).unwrap();
        assert_eq!(deltas, vec![2.0, 5.0]);
    }

    #[test]
    fn rejects_lambda_out_of_range() {
        let err = compute_gae(&[1.0], &[1.0], &[0.0], 0.9, 1.1, 0.0).unwrap_err();
        assert_eq!(err, EstimatorError::LambdaOutOfRange(1.1));
    }

    #[test]
    fn rejects_values_length_mismatch() {
        let err = compute_gae(&[1.0, 1.0], &[1.0, 1.0], &[0.0], 0.9, 0.9, 0.0).unwrap_err();
        assert!(matches!(err, EstimatorError::LengthMismatch { .. }));
    }
}
