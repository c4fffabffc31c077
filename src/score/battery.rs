/// Capacity buckets in mAh, descending; absent capacity scores zero.
pub fn battery_score(battery_mah: Option<u32>) -> f64 {
    let capacity = match battery_mah {
        Some(capacity) => capacity,
        None => return 0.0,
    };
    match capacity {
        c if c >= 5000 => 100.0,
        c if c >= 4500 => 85.0,
        c if c >= 4000 => 70.0,
        c if c >= 3500 => 55.0,
        c if c >= 3000 => 40.0,
        c if c >= 2500 => 25.0,
        _ => 10.0,
    }
}
