use chrono::{Datelike, NaiveDate};

/// Months elapsed since release, bucketed. An unknown release date gets a
/// below-average neutral 25 instead of zero.
pub fn recency_score(release_date: Option<NaiveDate>, reference: NaiveDate) -> f64 {
    let released = match release_date {
        Some(date) => date,
        None => return 25.0,
    };
    match months_between(released, reference) {
        m if m <= 3 => 100.0,
        m if m <= 6 => 90.0,
        m if m <= 12 => 80.0,
        m if m <= 18 => 70.0,
        m if m <= 24 => 60.0,
        m if m <= 36 => 45.0,
        m if m <= 48 => 30.0,
        _ => 15.0,
    }
}

/// Whole calendar months from `from` to `to`; a not-yet-reached day of
/// month does not count as a full month. Future dates clamp to zero.
fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut months =
        (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32);
    if to.day() < from.day() {
        months -= 1;
    }
    months.max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn absent_release_date_is_neutral() {
        assert_eq!(recency_score(None, date(2026, 8, 25)), 25.0);
    }

    #[test]
    fn age_buckets() {
        let now = date(2026, 8, 25);
        assert_eq!(recency_score(Some(date(2026, 7, 1)), now), 100.0);
        assert_eq!(recency_score(Some(date(2026, 3, 25)), now), 90.0);
        assert_eq!(recency_score(Some(date(2025, 9, 25)), now), 80.0);
        assert_eq!(recency_score(Some(date(2025, 3, 25)), now), 70.0);
        assert_eq!(recency_score(Some(date(2024, 9, 25)), now), 60.0);
        assert_eq!(recency_score(Some(date(2023, 9, 25)), now), 45.0);
        assert_eq!(recency_score(Some(date(2022, 9, 25)), now), 30.0);
        assert_eq!(recency_score(Some(date(2021, 1, 1)), now), 15.0);
    }

    #[test]
    fn partial_month_does_not_count() {
        // Released on the 26th, checked on the 25th three months later:
        // only 2 full months have elapsed.
        assert_eq!(months_between(date(2026, 5, 26), date(2026, 8, 25)), 2);
        assert_eq!(months_between(date(2026, 5, 25), date(2026, 8, 25)), 3);
    }

    #[test]
    fn future_release_counts_as_brand_new() {
        let now = date(2026, 8, 25);
        assert_eq!(recency_score(Some(date(2027, 1, 1)), now), 100.0);
    }
}
