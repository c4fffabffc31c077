/// Inverse price buckets: cheaper devices score higher. Current price is
/// preferred over launch price; NPR amounts are converted to the common
/// unit with the injected rate, everything else is taken as-is.
pub fn price_score(
    current_price: Option<f64>,
    launch_price: Option<f64>,
    currency: Option<&str>,
    npr_per_unit: f64,
) -> f64 {
    let amount = match current_price.or(launch_price) {
        Some(amount) if amount.is_finite() => amount,
        _ => return 0.0,
    };
    let common = to_common_unit(amount, currency, npr_per_unit);
    match common {
        p if p <= 200.0 => 100.0,
        p if p <= 400.0 => 85.0,
        p if p <= 600.0 => 70.0,
        p if p <= 800.0 => 55.0,
        p if p <= 1000.0 => 40.0,
        p if p <= 1200.0 => 25.0,
        _ => 10.0,
    }
}

fn to_common_unit(amount: f64, currency: Option<&str>, npr_per_unit: f64) -> f64 {
    let is_npr = currency
        .map(|code| code.eq_ignore_ascii_case("NPR"))
        .unwrap_or(false);
    if is_npr && npr_per_unit.is_finite() && npr_per_unit > 0.0 {
        amount / npr_per_unit
    } else {
        amount
    }
}
