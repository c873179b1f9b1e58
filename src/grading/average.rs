use anyhow::{Result, bail};

/// Computes the arithmetic mean of a slice of scores.
///
/// # Errors
///
/// Returns an error if `scores` is empty, since the mean of zero scores
/// is undefined.
pub fn average(scores: &[f64]) -> Result<f64> {
    if scores.is_empty() {
        bail!("cannot average an empty score list");
    }
    Ok(scores.iter().sum::<f64>() / scores.len() as f64)
}
