use crate::presets::PresetRegistry;
use crate::types::weights::{WeightRequest, WeightVector};

/// Turns a weight request into a normalized WeightVector. Never fails:
/// unknown preset names, missing input, and unusable overrides all resolve
/// to the balanced default instead of an error.
#[derive(Debug, Clone)]
pub struct WeightResolver {
    registry: PresetRegistry,
}

impl WeightResolver {
    pub fn new(registry: PresetRegistry) -> Self {
        Self { registry }
    }

    pub fn resolve(&self, request: &WeightRequest) -> WeightVector {
        // Usable overrides beat a simultaneously supplied preset name.
        let resolved = if request.overrides.any_usable() {
            self.resolve_overrides(request)
        } else {
            match &request.preset {
                Some(name) => self.resolve_preset(name),
                None => self.registry.balanced(),
            }
        };
        debug_assert!(resolved.is_normalized());
        resolved
    }

    fn resolve_preset(&self, name: &str) -> WeightVector {
        match self.registry.get(name) {
            Some(vector) => *vector,
            None => {
                let available = self.registry.names().collect::<Vec<_>>().join(", ");
                tracing::warn!(
                    preset = %name,
                    %available,
                    "unknown preset, falling back to balanced"
                );
                self.registry.balanced()
            }
        }
    }

    /// Overlay the supplied coefficients on the raw balanced tuning table,
    /// then renormalize. Non-finite and negative values keep the default.
    fn resolve_overrides(&self, request: &WeightRequest) -> WeightVector {
        let mut raw = crate::presets::BALANCED_RAW;
        for (slot, supplied) in raw.iter_mut().zip(request.overrides.as_array()) {
            if let Some(value) = supplied {
                if value.is_finite() && value >= 0.0 {
                    *slot = value;
                }
            }
        }
        // Zero-sum guard: all defaults are positive so this cannot happen
        // unless every coefficient was explicitly overridden to zero.
        WeightVector::normalized(raw).unwrap_or_else(|| self.registry.balanced())
    }
}
