use crate::types::result::ScoreBreakdown;
use crate::types::weights::WeightVector;

/// Weighted sum of the eight sub-scores, rounded to 2 decimals. With
/// sub-scores in [0, 100] and weights summing to 1 the result is already
/// in [0, 100]; the clamp only absorbs float round-off at the edges.
pub fn aggregate(breakdown: &ScoreBreakdown, weights: &WeightVector) -> f64 {
    let total: f64 = breakdown
        .as_array()
        .iter()
        .zip(weights.as_array())
        .map(|(score, weight)| score * weight)
        .sum();
    debug_assert!(
        (-1e-6..=100.0 + 1e-6).contains(&total),
        "weighted total out of bounds: {total}"
    );
    round2(total.clamp(0.0, 100.0))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
