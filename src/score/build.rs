/// Base 50, plus bonuses for ingress protection, low weight, security
/// features and wireless charging. Clamped to 100.
pub fn build_score(
    water_resistance: Option<&str>,
    weight_grams: Option<f64>,
    security_features: &[String],
    wireless_charging_watts: Option<f64>,
) -> f64 {
    let mut score = 50.0;
    score += ingress_bonus(water_resistance);
    score += weight_bonus(weight_grams);
    if has_feature(security_features, "fingerprint") {
        score += 5.0;
    }
    if has_feature(security_features, "face") {
        score += 5.0;
    }
    if wireless_charging_watts.map(|w| w > 0.0).unwrap_or(false) {
        score += 5.0;
    }
    score.clamp(0.0, 100.0)
}

fn ingress_bonus(water_resistance: Option<&str>) -> f64 {
    let label = match water_resistance {
        Some(label) => label.to_uppercase(),
        None => return 0.0,
    };
    if label.contains("IP68") {
        20.0
    } else if label.contains("IP67") {
        15.0
    } else if label.contains("IP") {
        10.0
    } else {
        0.0
    }
}

fn weight_bonus(weight_grams: Option<f64>) -> f64 {
    let grams = match weight_grams {
        Some(grams) => grams,
        None => return 0.0,
    };
    match grams {
        g if g <= 150.0 => 15.0,
        g if g <= 180.0 => 10.0,
        g if g <= 200.0 => 5.0,
        _ => 0.0,
    }
}

fn has_feature(features: &[String], fragment: &str) -> bool {
    features
        .iter()
        .any(|feature| feature.to_lowercase().contains(fragment))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_device_scores_base_fifty() {
        assert_eq!(build_score(None, None, &[], None), 50.0);
    }

    #[test]
    fn ingress_protection_bonuses() {
        assert_eq!(build_score(Some("IP68"), None, &[], None), 70.0);
        assert_eq!(build_score(Some("ip67 rated"), None, &[], None), 65.0);
        assert_eq!(build_score(Some("IP54 splash"), None, &[], None), 60.0);
        assert_eq!(build_score(Some("none"), None, &[], None), 50.0);
    }

    #[test]
    fn weight_bonuses() {
        assert_eq!(build_score(None, Some(150.0), &[], None), 65.0);
        assert_eq!(build_score(None, Some(180.0), &[], None), 60.0);
        assert_eq!(build_score(None, Some(200.0), &[], None), 55.0);
        assert_eq!(build_score(None, Some(230.0), &[], None), 50.0);
    }

    #[test]
    fn security_and_charging_bonuses() {
        let features = vec![
            "Side-mounted Fingerprint".to_string(),
            "Face Unlock".to_string(),
        ];
        assert_eq!(build_score(None, None, &features, Some(15.0)), 65.0);
        // Zero wattage means the radio is absent.
        assert_eq!(build_score(None, None, &[], Some(0.0)), 50.0);
    }

    #[test]
    fn full_stack_is_clamped_to_one_hundred() {
        let features = vec!["Fingerprint".to_string(), "Face unlock".to_string()];
        assert_eq!(
            build_score(Some("IP68"), Some(140.0), &features, Some(50.0)),
            100.0
        );
    }
}
