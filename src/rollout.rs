//! Fixed-length window of collected experience.
//!
//! A rollout may straddle several episodes. Episode boundaries are
//! encoded in `masks`: `0.0` marks the terminal step of an episode,
//! `1.0` means the episode continues past that step.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::EstimatorError;
use crate::gae::{compute_gae, GaeOutput};
use crate::returns::compute_discounted_return;

/// Rewards, termination masks and (optionally) value estimates for T steps.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRollout"))]
pub struct Rollout {
    rewards: Vec<f64>,
    masks: Vec<f64>,
    values: Option<Vec<f64>>,
}

/// Unchecked wire form of a [`Rollout`]; deserialization goes through
/// the validating constructors.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawRollout {
    rewards: Vec<f64>,
    masks: Vec<f64>,
    #[serde(default)]
    values: Option<Vec<f64>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRollout> for Rollout {
    type Error = EstimatorError;

    fn try_from(raw: RawRollout) -> Result<Self, Self::Error> {
        match raw.values {
            Some(values) => Rollout::with_values(raw.rewards, raw.masks, values),
            None => Rollout::new(raw.rewards, raw.masks),
        }
    }
}

impl Rollout {
    /// Creates a rollout without value estimates (discounted returns only).
    pub fn new(rewards: Vec<f64>, masks: Vec<f64>) -> Result<Self, EstimatorError> {
        validate_shape(&rewards, &masks, None)?;
        Ok(Self {
            rewards,
            masks,
            values: None,
        })
    }

    /// Creates a rollout carrying per-step value estimates, as required by GAE.
    pub fn with_values(
        rewards: Vec<f64>,
        masks: Vec<f64>,
        values: Vec<f64>,
    ) -> Result<Self, EstimatorError> {
        validate_shape(&rewards, &masks, Some(&values))?;
        Ok(Self {
            rewards,
            masks,
            values: Some(values),
        })
    }

    /// Number of timesteps T.
    pub fn len(&self) -> usize {
        self.rewards.len()
    }

    /// Returns true if the rollout has no steps.
    ///
    /// Never true for a rollout obtained from [`Rollout::new`],
    /// [`Rollout::with_values`] or deserialization, all of which reject
    /// empty input.
    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }

    /// Per-step rewards.
    pub fn rewards(&self) -> &[f64] {
        &self.rewards
    }

    /// Per-step termination masks (`0.0` on terminal steps).
    pub fn masks(&self) -> &[f64] {
        &self.masks
    }

    /// Value estimates, if the rollout was built with them.
    pub fn values(&self) -> Option<&[f64]> {
        self.values.as_deref()
    }

    /// Discounted return per step, bootstrapped with `next_value`.
    pub fn discounted_returns(
        &self,
        gamma: f64,
        next_value: f64,
    ) -> Result<Vec<f64>, EstimatorError> {
        compute_discounted_return(&self.rewards, &self.masks, gamma, next_value)
    }

    /// GAE(γ, λ) advantages and their derived returns.
    ///
    /// Fails with [`EstimatorError::MissingValues`] if the rollout has no
    /// value estimates.
    pub fn gae(
        &self,
        gamma: f64,
        lambda: f64,
        next_value: f64,
    ) -> Result<GaeOutput, EstimatorError> {
        let values = self.values().ok_or(EstimatorError::MissingValues)?;
        compute_gae(&self.rewards, &self.masks, values, gamma, lambda, next_value)
    }
}

/// Converts episode `done` flags into multiplicative masks.
pub fn masks_from_dones(dones: &[bool]) -> Vec<f64> {
    dones
        .iter()
        .map(|&done| if done { 0.0 } else { 1.0 })
        .collect()
}

/// Checks lengths, emptiness and mask values of a rollout's sequences.
pub(crate) fn validate_shape(
    rewards: &[f64],
    masks: &[f64],
    values: Option<&[f64]>,
) -> Result<(), EstimatorError> {
    let n = rewards.len();
    if n == 0 {
        return Err(EstimatorError::EmptyRollout);
    }
    if masks.len() != n {
        return Err(EstimatorError::LengthMismatch {
            field: "masks",
            expected: n,
            actual: masks.len(),
        });
    }
    if let Some(values) = values {
        if values.len() != n {
            return Err(EstimatorError::LengthMismatch {
                field: "values",
                expected: n,
                actual: values.len(),
            });
        }
    }
    if let Some((index, &value)) = masks
        .iter()
        .enumerate()
        .find(|&(_, &m)| m != 0.0 && m != 1.0)
    {
        return Err(EstimatorError::InvalidMask { index, value });
    }
    Ok(())
}
