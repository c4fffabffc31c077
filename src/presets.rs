use crate::types::weights::WeightVector;
use std::collections::BTreeMap;

pub const DEFAULT_PRESET: &str = "balanced";

/// Raw tuning table for the balanced profile, in category order. This is
/// also the overlay base for custom overrides, so the documented override
/// arithmetic stays stable even though registry vectors are normalized.
pub const BALANCED_RAW: [f64; 8] = [0.25, 0.15, 0.20, 0.15, 0.10, 0.10, 0.15, 0.05];

const BUILTIN_PRESETS: [(&str, [f64; 8]); 5] = [
    ("balanced", BALANCED_RAW),
    // Over-weights performance and battery for sustained play.
    ("gaming", [0.35, 0.20, 0.05, 0.15, 0.05, 0.05, 0.10, 0.05]),
    // Camera dominates; the rest split the remainder.
    ("photography", [0.15, 0.10, 0.40, 0.15, 0.05, 0.05, 0.05, 0.05]),
    // Price dominates.
    ("budget", [0.10, 0.15, 0.10, 0.05, 0.05, 0.40, 0.10, 0.05]),
    // Performance, battery and build quality for fleet purchases.
    ("enterprise", [0.25, 0.20, 0.05, 0.10, 0.20, 0.05, 0.10, 0.05]),
];

/// Immutable name -> WeightVector table. Tuning tables are normalized once
/// here, so every vector the registry hands out sums to 1.0.
#[derive(Debug, Clone)]
pub struct PresetRegistry {
    presets: BTreeMap<String, WeightVector>,
}

impl PresetRegistry {
    pub fn builtin() -> Self {
        let mut presets = BTreeMap::new();
        for (name, raw) in BUILTIN_PRESETS {
            if let Some(vector) = WeightVector::normalized(raw) {
                presets.insert(name.to_string(), vector);
            }
        }
        Self { presets }
    }

    /// Builtin table with extra or overriding presets merged on top,
    /// normalized the same way. Tables that normalize to nothing (zero or
    /// non-finite sum) are skipped rather than poisoning the registry.
    pub fn with_overrides<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, [f64; 8])>,
    {
        let mut registry = Self::builtin();
        for (name, raw) in overrides {
            match WeightVector::normalized(raw) {
                Some(vector) => {
                    registry.presets.insert(name, vector);
                }
                None => {
                    tracing::warn!(preset = %name, "skipping preset with degenerate weight table");
                }
            }
        }
        registry
    }

    pub fn get(&self, name: &str) -> Option<&WeightVector> {
        self.presets.get(name)
    }

    pub fn balanced(&self) -> WeightVector {
        // The builtin table always contains the default preset.
        self.presets
            .get(DEFAULT_PRESET)
            .copied()
            .unwrap_or_else(|| {
                WeightVector::normalized(BALANCED_RAW).expect("balanced table has positive sum")
            })
    }

    /// Preset names in stable (sorted) order, for the CLI listing.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WeightVector)> {
        self.presets.iter().map(|(name, vector)| (name.as_str(), vector))
    }
}
