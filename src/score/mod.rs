pub mod battery;
pub mod build;
pub mod camera;
pub mod display;
pub mod performance;
pub mod price;
pub mod recency;
pub mod reviews;

use crate::types::device::DeviceRecord;
use crate::types::result::ScoreBreakdown;
use chrono::NaiveDate;

/// One ordered chipset matching rule: the first rule whose `contains`
/// fragment appears in the (lowercased) chipset label wins its points.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ChipsetRule {
    pub contains: String,
    pub points: f64,
}

impl ChipsetRule {
    pub fn new(contains: &str, points: f64) -> Self {
        Self {
            contains: contains.to_string(),
            points,
        }
    }
}

/// Built-in chipset tier table, most specific fragments first.
pub fn default_chipset_rules() -> Vec<ChipsetRule> {
    [
        ("snapdragon 8", 50.0),
        ("apple a17", 50.0),
        ("apple a16", 50.0),
        ("dimensity 9", 50.0),
        ("snapdragon 7", 40.0),
        ("apple a15", 40.0),
        ("dimensity 8", 40.0),
        ("exynos 2", 40.0),
        ("snapdragon 6", 30.0),
        ("apple a14", 30.0),
        ("dimensity 7", 30.0),
        ("exynos 1", 30.0),
        ("snapdragon 4", 25.0),
        ("dimensity 6", 25.0),
        ("helio g", 25.0),
    ]
    .into_iter()
    .map(|(fragment, points)| ChipsetRule::new(fragment, points))
    .collect()
}

pub const DEFAULT_NPR_PER_UNIT: f64 = 130.0;

/// Injected scoring configuration. The reference date is captured once per
/// engine so a ranking run is a deterministic function of its inputs.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub npr_per_unit: f64,
    pub chipset_rules: Vec<ChipsetRule>,
    pub reference_date: NaiveDate,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            npr_per_unit: DEFAULT_NPR_PER_UNIT,
            chipset_rules: default_chipset_rules(),
            reference_date: chrono::Utc::now().date_naive(),
        }
    }
}

/// Computes the eight sub-scores for a device. Pure and total: missing
/// input degrades to the documented zero/neutral value, never to an error.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    settings: EngineSettings,
}

impl ScoringEngine {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    pub fn breakdown(&self, device: &DeviceRecord) -> ScoreBreakdown {
        ScoreBreakdown {
            performance: performance::performance_score(
                &device.ram_gb,
                device.chipset.as_deref(),
                &self.settings.chipset_rules,
            ),
            battery: battery::battery_score(device.battery_mah),
            camera: camera::camera_score(device.main_camera_mp, device.front_camera_mp),
            display: display::display_score(device.display_inches),
            build: build::build_score(
                device.water_resistance.as_deref(),
                device.weight_grams,
                &device.security_features,
                device.wireless_charging_watts,
            ),
            price: price::price_score(
                device.current_price,
                device.launch_price,
                device.currency.as_deref(),
                self.settings.npr_per_unit,
            ),
            reviews: reviews::reviews_score(&device.ratings),
            recency: recency::recency_score(device.release_date, self.settings.reference_date),
        }
    }
}
