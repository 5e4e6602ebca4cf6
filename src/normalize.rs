//! Advantage normalisation.

const VARIANCE_EPS: f64 = 1e-8;

/// Normalizes advantages to zero mean and unit variance.
///
/// Returns the input unchanged (with a warning) when it is empty or its
/// statistics are not finite.
pub fn normalize_advantages(advantages: &[f64]) -> Vec<f64> {
    if advantages.is_empty() {
        log::warn!("Cannot normalize empty advantages batch");
        return Vec::new();
    }

    let n = advantages.len() as f64;
    let mean: f64 = advantages.iter().sum::<f64>() / n;
    let var: f64 = advantages.iter().map(|a| (a - mean).powi(2)).sum::<f64>() / n;
    let std = (var + VARIANCE_EPS).sqrt();

    if !mean.is_finite() || !std.is_finite() {
        log::warn!(
            "Non-finite statistics in advantage normalization: mean={}, std={}. Using raw advantages.",
            mean,
            std
        );
        return advantages.to_vec();
    }

    advantages.iter().map(|a| (a - mean) / std).collect()
}
