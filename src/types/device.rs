use chrono::NaiveDate;
use serde::Deserialize;

/// One catalog entry as supplied by the storage layer. Everything beyond
/// `id` and `name` is optional; a missing attribute degrades the matching
/// sub-score to its documented zero/neutral value, never to an error.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceRecord {
    pub id: String,
    pub name: String,

    /// Available RAM configurations in GB; the highest tier scores.
    #[serde(default)]
    pub ram_gb: Vec<u32>,
    pub chipset: Option<String>,
    pub battery_mah: Option<u32>,
    pub main_camera_mp: Option<f64>,
    pub front_camera_mp: Option<f64>,
    pub display_inches: Option<f64>,
    /// Free-form label, e.g. "IP68 dust/water resistant".
    pub water_resistance: Option<String>,
    pub weight_grams: Option<f64>,
    /// Free-form labels, e.g. "Under-display fingerprint", "Face unlock".
    #[serde(default)]
    pub security_features: Vec<String>,
    /// Zero or absent both mean no wireless charging.
    pub wireless_charging_watts: Option<f64>,
    pub current_price: Option<f64>,
    pub launch_price: Option<f64>,
    /// ISO currency code for the prices above; anything but "NPR" is
    /// treated as already being in the common unit.
    pub currency: Option<String>,
    pub release_date: Option<NaiveDate>,
    /// Individual review ratings on a 1-5 scale.
    #[serde(default)]
    pub ratings: Vec<f32>,
}

#[cfg(test)]
impl DeviceRecord {
    /// Minimal record for unit tests.
    pub fn bare(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            ram_gb: Vec::new(),
            chipset: None,
            battery_mah: None,
            main_camera_mp: None,
            front_camera_mp: None,
            display_inches: None,
            water_resistance: None,
            weight_grams: None,
            security_features: Vec::new(),
            wireless_charging_watts: None,
            current_price: None,
            launch_price: None,
            currency: None,
            release_date: None,
            ratings: Vec::new(),
        }
    }
}
