//! Rollout buffer filled one step at a time by a collector.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::EstimatorError;
use crate::rollout::{masks_from_dones, Rollout};

/// A single collected step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transition {
    /// Reward received after acting.
    pub reward: f64,
    /// Value estimate of the state the action was taken in.
    pub value: f64,
    /// Whether this was the last step of the episode.
    pub done: bool,
}

/// Accumulates transitions across episodes until they are turned into a [`Rollout`].
#[derive(Debug, Default)]
pub struct RolloutBuffer {
    /// Stored transitions, in time order.
    pub transitions: Vec<Transition>,
}

impl RolloutBuffer {
    /// Creates a new empty buffer.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Creates an empty buffer with room for `steps` transitions.
    pub fn with_capacity(steps: usize) -> Self {
        Self {
            transitions: Vec::with_capacity(steps),
        }
    }

    /// Adds a transition to the buffer.
    pub fn add(&mut self, transition: Transition) {
        self.transitions.push(transition);
    }

    /// Clears all stored data.
    pub fn clear(&mut self) {
        self.transitions.clear();
    }

    /// Returns the number of stored transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Builds a rollout (with values) from the stored transitions.
    pub fn to_rollout(&self) -> Result<Rollout, EstimatorError> {
        let rewards = self.transitions.iter().map(|t| t.reward).collect();
        let values = self.transitions.iter().map(|t| t.value).collect();
        let dones: Vec<bool> = self.transitions.iter().map(|t| t.done).collect();
        let masks = masks_from_dones(&dones);
        Rollout::with_values(rewards, masks, values)
    }
}
