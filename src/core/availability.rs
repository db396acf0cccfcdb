use crate::domain::model::AvailabilityStatus;

/// Beds above this count are shown as freely available.
pub const LIMITED_THRESHOLD: u32 = 20;

pub fn classify(available_beds: u32) -> AvailabilityStatus {
    if available_beds > LIMITED_THRESHOLD {
        AvailabilityStatus::Available
    } else if available_beds > 0 {
        AvailabilityStatus::Limited
    } else {
        AvailabilityStatus::Full
    }
}

/// Same policy for callers holding a raw signed count.
///
/// # Panics
///
/// If `available_beds` is negative or does not fit in `u32`.
pub fn classify_signed(available_beds: i64) -> AvailabilityStatus {
    assert!(
        available_beds >= 0,
        "bed count must be non-negative, got {}",
        available_beds
    );
    let beds = u32::try_from(available_beds)
        .unwrap_or_else(|_| panic!("bed count {} exceeds u32", available_beds));
    classify(beds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(classify(21), AvailabilityStatus::Available);
        assert_eq!(classify(20), AvailabilityStatus::Limited);
        assert_eq!(classify(1), AvailabilityStatus::Limited);
        assert_eq!(classify(0), AvailabilityStatus::Full);
    }

    #[test]
    fn test_large_counts_are_available() {
        assert_eq!(classify(u32::MAX), AvailabilityStatus::Available);
        assert_eq!(classify_signed(500), AvailabilityStatus::Available);
    }

    #[test]
    fn test_signed_matches_unsigned() {
        for beds in 0..=25 {
            assert_eq!(classify_signed(beds as i64), classify(beds));
        }
    }

    #[test]
    #[should_panic(expected = "bed count must be non-negative")]
    fn test_negative_count_fails_fast() {
        classify_signed(-1);
    }
}
