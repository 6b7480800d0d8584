//! Complexity relative to random sequences of the same length.
//!
//! A ratio near 1 means the input is about as complex as random data, below
//! 1 means more structured. Lengths the baseline does not cover yield
//! `None`.

use crate::baseline::BaselineTable;
use crate::error::Result;

/// Divides `running[i]` by the baseline mean at length `i + 1`.
pub fn normalize(running: &[usize], table: &BaselineTable) -> Vec<Option<f64>> {
    let means = table.means();
    running
        .iter()
        .enumerate()
        .map(|(i, &c)| ratio(c, means.get(i).copied()))
        .collect()
}

/// Normalizes a single complexity value observed at `length`.
pub fn normalize_at(complexity: usize, length: usize, table: &BaselineTable) -> Result<Option<f64>> {
    Ok(ratio(complexity, table.lookup(length)?))
}

/// A mean that is not a positive finite number cannot scale anything.
fn ratio(complexity: usize, mean: Option<f64>) -> Option<f64> {
    mean.filter(|m| m.is_finite() && *m > 0.0)
        .map(|m| complexity as f64 / m)
}
