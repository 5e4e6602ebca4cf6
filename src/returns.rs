//! Discounted returns over a multi-episode rollout.

use crate::error::{check_gamma, check_next_value, EstimatorError};
use crate::rollout::validate_shape;

/// Computes the γ-discounted return at every step of a rollout.
///
/// Runs the backward recurrence
///
/// ```text
/// R_T = next_value
/// R_t = r_t + γ · R_{t+1} · m_t
/// ```
///
/// A zero mask at step `t` drops everything carried back from later
/// steps, so the return of a terminal step is its own reward.
///
/// # Arguments
///
/// * `rewards` - Per-step rewards
/// * `masks` - Per-step gates, `0.0` on the terminal step of an episode
/// * `gamma` - Discount factor in `[0, 1]`
/// * `next_value` - Finite bootstrap value of the state following the last step
///
/// # Returns
///
/// One return per step, in time order.
pub fn compute_discounted_return(
    rewards: &[f64],
    masks: &[f64],
    gamma: f64,
    next_value: f64,
) -> Result<Vec<f64>, EstimatorError> {
    validate_shape(rewards, masks, None)?;
    check_gamma(gamma)?;
    check_next_value(next_value)?;

    let n = rewards.len();
    log::trace!("computing discounted returns over {} steps", n);

    let mut returns = vec![0.0; n];
    let mut running = next_value;

    for t in (0..n).rev() {
        running = rewards[t] + gamma * running * masks[t];
        returns[t] = running;
    }

    Ok(returns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_step_bootstraps() {
        let returns = compute_discounted_return(&[2.0], &[1.0], 0.5, 4.0).unwrap();
        assert!((returns[0] - 4.0).abs() < 1e-10);
    }

    #[test]
    fn terminal_last_step_ignores_next_value() {
        let a = compute_discounted_return(&[1.0, 1.0], &[1.0, 0.0], 0.9, 0.0).unwrap();
        let b = compute_discounted_return(&[1.0, 1.0], &[1.0, 0.0], 0.9, 1e6).unwrap();
        assert_eq!(a, b);
        assert!((a[0] - 1.9).abs() < 1e-10);
    }

    #[test]
    fn non_finite_next_value_is_rejected_even_when_gated() {
        // Terminal last step: the bootstrap would be masked, but 0 * inf is NaN.
        let err = compute_discounted_return(&[1.0, 1.0], &[1.0, 0.0], 0.9, f64::INFINITY)
            .unwrap_err();
        assert_eq!(err, EstimatorError::NonFiniteBootstrap(f64::INFINITY));

        let err = compute_discounted_return(&[1.0, 2.0], &[1.0, 1.0], 0.0, f64::NAN).unwrap_err();
        assert!(matches!(err, EstimatorError::NonFiniteBootstrap(v) if v.is_nan()));
    }

    #[test]
    fn gamma_zero_gives_immediate_rewards() {
        let rewards = [1.0, -2.0, 3.0];
        let returns = compute_discounted_return(&rewards, &[1.0, 1.0, 1.0], 0.0, 100.0).unwrap();
        assert_eq!(returns, rewards.to_vec());
    }

    #[test]
    fn all_terminal_gives_immediate_rewards() {
        let rewards = [0.5, 1.5, 2.5];
        let returns = compute_discounted_return(&rewards, &[0.0, 0.0, 0.0], 0.99, 7.0).unwrap();
        assert_eq!(returns, rewards.to_vec());
    }

    #[test]
    fn discounting_compounds_backwards() {
        // R_2 = 1 + 0.5*8 = 5, R_1 = 1 + 0.5*5 = 3.5, R_0 = 1 + 0.5*3.5 = 2.75
        let returns =
            compute_discounted_return(&[1.0, 1.0, 1.0], &[1.0, 1.0, 1.0], 0.5, 8.0).unwrap();
        assert!((returns[0] - 2.75).abs() < 1e-10);
        assert!((returns[1] - 3.5).abs() < 1e-10);
        assert!((returns[2] - 5.0).abs() < 1e-10);
    }

    #[test]
    fn rejects_gamma_out_of_range() {
        let err = compute_discounted_return(&[1.0], &[1.0], 1.5, 0.0).unwrap_err();
        assert_eq!(err, EstimatorError::GammaOutOfRange(1.5));
    }

    #[test]
    fn rejects_empty_input() {
        let err = compute_discounted_return(&[], &[], 0.9, 0.0).unwrap_err();
        assert_eq!(err, EstimatorError::EmptyRollout);
    }
}
