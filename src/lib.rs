//! rollout-targets - learning targets for on-policy reinforcement learning
//!
//! Computes discounted returns and Generalized Advantage Estimates
//! (GAE-λ) over a fixed-length rollout that may span several episodes.
//! Episode boundaries are multiplicative 0/1 masks, and the open end of
//! the rollout is bootstrapped with a caller-supplied value estimate.
//!
//! ```
//! use rollout_targets::compute_discounted_return;
//!
//! let rewards = [1.0; 10];
//! let masks = [1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0];
//! let returns = compute_discounted_return(&rewards, &masks, 1.0, 1.0).unwrap();
//! assert_eq!(returns, vec![6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 5.0, 4.0, 3.0, 2.0]);
//! ```

pub mod buffer;
pub mod config;
pub mod error;
pub mod estimator;
pub mod gae;
pub mod normalize;
pub mod returns;
pub mod rollout;

pub use buffer::{RolloutBuffer, Transition};
pub use config::EstimatorConfig;
pub use error::EstimatorError;
pub use estimator::Estimator;
pub use gae::{compute_gae, td_residuals, GaeOutput};
pub use normalize::normalize_advantages;
pub use returns::compute_discounted_return;
pub use rollout::{masks_from_dones, Rollout};
