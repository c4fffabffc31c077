/// Main camera contributes up to 70 points, front camera up to 30.
pub fn camera_score(main_mp: Option<f64>, front_mp: Option<f64>) -> f64 {
    (main_points(main_mp) + front_points(front_mp)).clamp(0.0, 100.0)
}

fn main_points(main_mp: Option<f64>) -> f64 {
    let mp = match main_mp {
        Some(mp) => mp,
        None => return 0.0,
    };
    match mp {
        mp if mp >= 200.0 => 70.0,
        mp if mp >= 108.0 => 60.0,
        mp if mp >= 64.0 => 50.0,
        mp if mp >= 48.0 => 40.0,
        mp if mp >= 24.0 => 30.0,
        _ => 20.0,
    }
}

fn front_points(front_mp: Option<f64>) -> f64 {
    let mp = match front_mp {
        Some(mp) => mp,
        None => return 0.0,
    };
    match mp {
        mp if mp >= 50.0 => 30.0,
        mp if mp >= 32.0 => 25.0,
        mp if mp >= 24.0 => 20.0,
        mp if mp >= 16.0 => 15.0,
        mp if mp >= 8.0 => 10.0,
        _ => 5.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_camera_buckets() {
        assert_eq!(camera_score(Some(200.0), None), 70.0);
        assert_eq!(camera_score(Some(108.0), None), 60.0);
        assert_eq!(camera_score(Some(64.0), None), 50.0);
        assert_eq!(camera_score(Some(48.0), None), 40.0);
        assert_eq!(camera_score(Some(24.0), None), 30.0);
        assert_eq!(camera_score(Some(12.0), None), 20.0);
    }

    #[test]
    fn front_camera_buckets() {
        assert_eq!(camera_score(None, Some(50.0)), 30.0);
        assert_eq!(camera_score(None, Some(32.0)), 25.0);
        assert_eq!(camera_score(None, Some(24.0)), 20.0);
        assert_eq!(camera_score(None, Some(16.0)), 15.0);
        assert_eq!(camera_score(None, Some(8.0)), 10.0);
        assert_eq!(camera_score(None, Some(5.0)), 5.0);
    }

    #[test]
    fn both_cameras_sum_to_at_most_one_hundred() {
        assert_eq!(camera_score(Some(200.0), Some(50.0)), 100.0);
        assert_eq!(camera_score(None, None), 0.0);
    }
}
