/// Diagonal size in inches. Unknown size gets the neutral 50, not zero.
pub fn display_score(display_inches: Option<f64>) -> f64 {
    let inches = match display_inches {
        Some(inches) => inches,
        None => return 50.0,
    };
    match inches {
        d if d >= 6.7 => 95.0,
        d if d >= 6.5 => 90.0,
        d if d >= 6.3 => 85.0,
        d if d >= 6.1 => 80.0,
        d if d >= 5.8 => 75.0,
        d if d >= 5.5 => 70.0,
        d if d >= 5.0 => 65.0,
        _ => 50.0,
    }
}
