use serde::Serialize;

/// The eight per-category sub-scores for one device, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub performance: f64,
    pub battery: f64,
    pub camera: f64,
    pub display: f64,
    pub build: f64,
    pub price: f64,
    pub reviews: f64,
    pub recency: f64,
}

impl ScoreBreakdown {
    /// Sub-scores in the same category order as `WeightVector::as_array`.
    pub fn as_array(&self) -> [f64; 8] {
        [
            self.performance,
            self.battery,
            self.camera,
            self.display,
            self.build,
            self.price,
            self.reviews,
            self.recency,
        ]
    }
}

/// One entry of the ranked output. `rank` is dense and 1-based: tied
/// totals get consecutive distinct ranks, input order breaking the tie.
#[derive(Debug, Clone, Serialize)]
pub struct RankedResult {
    pub device_id: String,
    pub device_name: String,
    pub total_score: f64,
    pub breakdown: ScoreBreakdown,
    pub rank: u32,
}
