/// Average rating rescaled from the 1-5 scale to 0-100, plus a confidence
/// bonus that grows with the review count and caps at 15. No reviews at
/// all gets the neutral 50.
pub fn reviews_score(ratings: &[f32]) -> f64 {
    if ratings.is_empty() {
        return 50.0;
    }
    let sum: f64 = ratings.iter().map(|r| f64::from(*r)).sum();
    let average = sum / ratings.len() as f64;
    let base = (average - 1.0) * 25.0;
    let confidence = (ratings.len() as f64 * 0.5).min(15.0);
    (base + confidence).clamp(0.0, 100.0)
}
