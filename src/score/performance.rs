use super::ChipsetRule;

/// RAM tier (max 50) plus chipset tier (max 50). The highest listed RAM
/// configuration counts; chipset tiers come from the injected rule list,
/// first match wins.
pub fn performance_score(ram_gb: &[u32], chipset: Option<&str>, rules: &[ChipsetRule]) -> f64 {
    (ram_points(ram_gb) + chipset_points(chipset, rules)).clamp(0.0, 100.0)
}

fn ram_points(ram_gb: &[u32]) -> f64 {
    let top = match ram_gb.iter().max() {
        Some(gb) => *gb,
        None => return 0.0,
    };
    match top {
        gb if gb >= 16 => 50.0,
        gb if gb >= 12 => 40.0,
        gb if gb >= 8 => 30.0,
        gb if gb >= 6 => 20.0,
        gb if gb >= 4 => 10.0,
        _ => 0.0,
    }
}

fn chipset_points(chipset: Option<&str>, rules: &[ChipsetRule]) -> f64 {
    let label = match chipset {
        Some(label) if !label.trim().is_empty() => label.to_lowercase(),
        _ => return 0.0,
    };
    for rule in rules {
        if label.contains(&rule.contains.to_lowercase()) {
            return rule.points;
        }
    }
    // Known chipset label that matches no tier still beats an absent one.
    15.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::default_chipset_rules;

    #[test]
    fn ram_tiers_use_highest_configuration() {
        let rules = default_chipset_rules();
        assert_eq!(performance_score(&[4, 16], None, &rules), 50.0);
        assert_eq!(performance_score(&[12], None, &rules), 40.0);
        assert_eq!(performance_score(&[8], None, &rules), 30.0);
        assert_eq!(performance_score(&[6], None, &rules), 20.0);
        assert_eq!(performance_score(&[4], None, &rules), 10.0);
        assert_eq!(performance_score(&[2], None, &rules), 0.0);
        assert_eq!(performance_score(&[], None, &rules), 0.0);
    }

    #[test]
    fn chipset_tiers_match_case_insensitively() {
        let rules = default_chipset_rules();
        assert_eq!(
            performance_score(&[], Some("Snapdragon 8 Gen 2"), &rules),
            50.0
        );
        assert_eq!(performance_score(&[], Some("DIMENSITY 8200"), &rules), 40.0);
        assert_eq!(performance_score(&[], Some("Exynos 1380"), &rules), 30.0);
        assert_eq!(performance_score(&[], Some("Helio G99"), &rules), 25.0);
    }

    #[test]
    fn unmatched_label_scores_fifteen_and_empty_scores_zero() {
        let rules = default_chipset_rules();
        assert_eq!(performance_score(&[], Some("Kirin 9000"), &rules), 15.0);
        assert_eq!(performance_score(&[], Some("   "), &rules), 0.0);
        assert_eq!(performance_score(&[], None, &rules), 0.0);
    }

    #[test]
    fn rule_order_decides_overlapping_fragments() {
        let rules = vec![
            ChipsetRule::new("alpha plus", 50.0),
            ChipsetRule::new("alpha", 30.0),
        ];
        assert_eq!(performance_score(&[], Some("Alpha Plus X"), &rules), 50.0);
        assert_eq!(performance_score(&[], Some("Alpha X"), &rules), 30.0);
    }

    #[test]
    fn combined_score_is_clamped() {
        let rules = vec![ChipsetRule::new("mega", 90.0)];
        assert_eq!(performance_score(&[16], Some("Mega"), &rules), 100.0);
    }
}
