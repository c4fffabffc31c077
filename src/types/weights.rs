use serde::{Deserialize, Serialize};

pub const WEIGHT_EPSILON: f64 = 1e-9;

/// Names of the eight scoring categories, in breakdown order.
pub const CATEGORY_NAMES: [&str; 8] = [
    "performance",
    "battery",
    "camera",
    "display",
    "build",
    "price",
    "reviews",
    "recency",
];

/// The eight normalized coefficients controlling how much each scoring
/// category contributes to the total. Immutable once constructed; every
/// vector handed out by the resolver sums to 1.0 within `WEIGHT_EPSILON`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    pub performance: f64,
    pub battery: f64,
    pub camera: f64,
    pub display: f64,
    pub build: f64,
    pub price: f64,
    pub reviews: f64,
    pub recency: f64,
}

impl WeightVector {
    /// Build a normalized vector from raw non-negative tuning coefficients.
    /// Returns `None` when the raw sum is zero, which would make the result
    /// undefined; callers fall back to a known-good default instead.
    pub fn normalized(raw: [f64; 8]) -> Option<Self> {
        let sum: f64 = raw.iter().sum();
        if sum <= 0.0 || !sum.is_finite() {
            return None;
        }
        Some(Self {
            performance: raw[0] / sum,
            battery: raw[1] / sum,
            camera: raw[2] / sum,
            display: raw[3] / sum,
            build: raw[4] / sum,
            price: raw[5] / sum,
            reviews: raw[6] / sum,
            recency: raw[7] / sum,
        })
    }

    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }

    /// Coefficients in `CATEGORY_NAMES` order.
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

    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() < WEIGHT_EPSILON
    }
}

/// Partial per-category overrides from the caller. `None` means the
/// coefficient was not supplied; non-finite or negative values are treated
/// the same way at resolve time rather than rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct WeightOverrides {
    pub performance: Option<f64>,
    pub battery: Option<f64>,
    pub camera: Option<f64>,
    pub display: Option<f64>,
    pub build: Option<f64>,
    pub price: Option<f64>,
    pub reviews: Option<f64>,
    pub recency: Option<f64>,
}

impl WeightOverrides {
    pub fn as_array(&self) -> [Option<f64>; 8] {
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

    /// Whether any override survives the finite/non-negative filter.
    /// A request carrying only NaN or negative values counts as empty.
    pub fn any_usable(&self) -> bool {
        self.as_array()
            .iter()
            .any(|v| v.map(|x| x.is_finite() && x >= 0.0).unwrap_or(false))
    }

    pub fn set(&mut self, name: &str, value: f64) -> bool {
        let slot = match name {
            "performance" => &mut self.performance,
            "battery" => &mut self.battery,
            "camera" => &mut self.camera,
            "display" => &mut self.display,
            "build" => &mut self.build,
            "price" => &mut self.price,
            "reviews" => &mut self.reviews,
            "recency" => &mut self.recency,
            _ => return false,
        };
        *slot = Some(value);
        true
    }
}

/// What the caller asked for: a preset name, explicit overrides, or both.
/// Usable overrides always win over a simultaneously supplied preset name.
#[derive(Debug, Clone, Default)]
pub struct WeightRequest {
    pub preset: Option<String>,
    pub overrides: WeightOverrides,
}
