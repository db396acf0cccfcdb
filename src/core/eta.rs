use crate::core::geo::distance_km;
use crate::domain::model::{Coordinate, DistanceResult};

/// City driving speed assumed for every ETA.
pub const DEFAULT_SPEED_KMH: f64 = 40.0;

/// Minutes to cover `distance_km` at `assumed_speed_kmh`, rounded half-up.
///
/// `f64::round` rounds half away from zero, which on the non-negative domain
/// is round-half-up: 0.5 min becomes 1, 2.5 min becomes 3.
///
/// # Panics
///
/// On a negative or non-finite distance, on a speed that is not a positive
/// finite number, or when the rounded result does not fit in `u32` minutes.
pub fn eta_minutes(distance_km: f64, assumed_speed_kmh: f64) -> u32 {
    assert!(
        distance_km.is_finite() && distance_km >= 0.0,
        "distance must be a non-negative finite number, got {}",
        distance_km
    );
    assert!(
        assumed_speed_kmh.is_finite() && assumed_speed_kmh > 0.0,
        "speed must be a positive finite number, got {}",
        assumed_speed_kmh
    );

    let minutes = (distance_km / assumed_speed_kmh * 60.0).round();
    assert!(
        minutes <= u32::MAX as f64,
        "eta of {} minutes does not fit in u32",
        minutes
    );
    minutes as u32
}

pub fn estimate(origin: Coordinate, destination: Coordinate, assumed_speed_kmh: f64) -> DistanceResult {
    let distance_km = distance_km(origin, destination);
    DistanceResult {
        distance_km,
        eta_minutes: eta_minutes(distance_km, assumed_speed_kmh),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::REFERENCE_POINT;

    #[test]
    fn test_zero_distance_is_zero_minutes() {
        for speed in [1.0, DEFAULT_SPEED_KMH, 120.0, 0.001] {
            assert_eq!(eta_minutes(0.0, speed), 0);
        }
    }

    #[test]
    fn test_half_minutes_round_up() {
        // 40 km/h covers 1 km in 1.5 min and 1/3 km in 0.5 min.
        assert_eq!(eta_minutes(1.0, 40.0), 2);
        assert_eq!(eta_minutes(1.0 / 3.0, 40.0), 1);
        assert_eq!(eta_minutes(2.5, 60.0), 3);
        assert_eq!(eta_minutes(0.49, 60.0), 0);
    }

    #[test]
    fn test_monotonic_in_distance() {
        let mut previous = 0;
        for step in 0..5_000 {
            let distance = step as f64 * 0.037;
            let eta = eta_minutes(distance, DEFAULT_SPEED_KMH);
            assert!(eta >= previous, "eta dropped at {} km", distance);
            previous = eta;
        }
    }

    #[test]
    #[should_panic(expected = "speed must be a positive finite number")]
    fn test_zero_speed_panics() {
        eta_minutes(1.0, 0.0);
    }

    #[test]
    #[should_panic(expected = "does not fit in u32")]
    fn test_unrepresentable_eta_panics() {
        eta_minutes(1e12, 1.0);
    }

    #[test]
    fn test_largest_earth_distance_fits() {
        // Half the circumference at walking pace is still a few hundred thousand minutes.
        assert_eq!(eta_minutes(20_015.0868, 5.0), 240_181);
    }

    #[test]
    #[should_panic(expected = "distance must be a non-negative finite number")]
    fn test_negative_distance_panics() {
        eta_minutes(-1.0, DEFAULT_SPEED_KMH);
    }

    #[test]
    fn test_estimate_end_to_end() {
        let cws = estimate(
            REFERENCE_POINT,
            Coordinate::new_unchecked(22.2035, 84.8447),
            DEFAULT_SPEED_KMH,
        );
        assert_eq!(cws.display_km(), "2.5");
        assert_eq!(cws.eta_minutes, 4);

        let hi_tech = estimate(
            REFERENCE_POINT,
            Coordinate::new_unchecked(22.215, 84.83),
            DEFAULT_SPEED_KMH,
        );
        assert_eq!(hi_tech.display_km(), "1.8");
        assert_eq!(hi_tech.eta_minutes, 3);
    }

    #[test]
    fn test_estimate_is_deterministic() {
        let destination = Coordinate::new_unchecked(22.215, 84.83);
        let first = estimate(REFERENCE_POINT, destination, DEFAULT_SPEED_KMH);
        let second = estimate(REFERENCE_POINT, destination, DEFAULT_SPEED_KMH);
        assert_eq!(first, second);
    }
}
