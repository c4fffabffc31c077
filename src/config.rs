use crate::error::{DevrankError, Result};
use crate::score::{default_chipset_rules, ChipsetRule, EngineSettings, DEFAULT_NPR_PER_UNIT};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Optional `devrank.toml`. Every section has a documented default, so an
/// absent file (or an absent section) configures nothing away from stock.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DevrankConfig {
    pub fx: Option<FxConfig>,
    pub chipset: Option<ChipsetConfig>,
    #[serde(default)]
    pub presets: BTreeMap<String, PresetTable>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FxConfig {
    /// NPR per common unit; defaults to 130.0 when absent.
    pub npr_per_unit: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChipsetConfig {
    /// Ordered tier rules replacing the built-in table when non-empty.
    #[serde(default)]
    pub rules: Vec<ChipsetRule>,
}

/// Raw tuning coefficients for one configured preset. Missing categories
/// default to zero; the table is normalized when it enters the registry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PresetTable {
    #[serde(default)]
    pub performance: f64,
    #[serde(default)]
    pub battery: f64,
    #[serde(default)]
    pub camera: f64,
    #[serde(default)]
    pub display: f64,
    #[serde(default)]
    pub build: f64,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub reviews: f64,
    #[serde(default)]
    pub recency: f64,
}

impl PresetTable {
    pub fn as_raw(&self) -> [f64; 8] {
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

pub fn load_config(path: Option<&Path>) -> Result<Option<DevrankConfig>> {
    let path = match path {
        Some(path) => path,
        None => return Ok(None),
    };
    let content = std::fs::read_to_string(path).map_err(|e| {
        DevrankError::ConfigParse(format!("{}: {}", path.display(), e))
    })?;
    let config: DevrankConfig = toml::from_str(&content)
        .map_err(|e| DevrankError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    config.validate()?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(Some(config))
}

impl DevrankConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(fx) = &self.fx {
            if let Some(rate) = fx.npr_per_unit {
                if !rate.is_finite() || rate <= 0.0 {
                    return Err(DevrankError::ConfigParse(
                        "fx.npr_per_unit must be a positive finite number".to_string(),
                    ));
                }
            }
        }

        if let Some(chipset) = &self.chipset {
            for rule in &chipset.rules {
                if rule.contains.trim().is_empty() {
                    return Err(DevrankError::ConfigParse(
                        "chipset.rules entries must have a non-empty match fragment".to_string(),
                    ));
                }
                if !(0.0..=100.0).contains(&rule.points) {
                    return Err(DevrankError::ConfigParse(format!(
                        "chipset.rules points must be between 0 and 100 (found {} for '{}')",
                        rule.points, rule.contains
                    )));
                }
            }
        }

        for (name, table) in &self.presets {
            let raw = table.as_raw();
            if raw.iter().any(|v| !v.is_finite() || *v < 0.0) {
                return Err(DevrankError::ConfigParse(format!(
                    "presets.{name} coefficients must be finite and non-negative"
                )));
            }
            if raw.iter().sum::<f64>() <= 0.0 {
                return Err(DevrankError::ConfigParse(format!(
                    "presets.{name} must have at least one positive coefficient"
                )));
            }
        }

        Ok(())
    }

    /// Engine settings with config overrides applied over the defaults.
    pub fn engine_settings(&self) -> EngineSettings {
        let npr_per_unit = self
            .fx
            .as_ref()
            .and_then(|fx| fx.npr_per_unit)
            .unwrap_or(DEFAULT_NPR_PER_UNIT);
        let chipset_rules = match &self.chipset {
            Some(chipset) if !chipset.rules.is_empty() => chipset.rules.clone(),
            _ => default_chipset_rules(),
        };
        EngineSettings {
            npr_per_unit,
            chipset_rules,
            ..EngineSettings::default()
        }
    }

    pub fn preset_overrides(&self) -> Vec<(String, [f64; 8])> {
        self.presets
            .iter()
            .map(|(name, table)| (name.clone(), table.as_raw()))
            .collect()
    }
}
