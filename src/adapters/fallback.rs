use crate::domain::model::{Coordinate, HospitalRecord};
use crate::domain::ports::HospitalDirectory;
use crate::utils::error::Result;
use async_trait::async_trait;

struct Seed {
    id: &'static str,
    name: &'static str,
    location: &'static str,
    coordinate: Coordinate,
    rating: f64,
    available_beds: u32,
}

const SEEDS: [Seed; 3] = [
    Seed {
        id: "1",
        name: "CWS Hospital",
        location: "Rourkela",
        coordinate: Coordinate::new_unchecked(22.2035, 84.8447),
        rating: 4.8,
        available_beds: 50,
    },
    Seed {
        id: "2",
        name: "RGH Government Hospital",
        location: "Rourkela",
        coordinate: Coordinate::new_unchecked(22.2258, 84.8436),
        rating: 4.5,
        available_beds: 5,
    },
    Seed {
        id: "3",
        name: "Hi-Tech Medical College",
        location: "Rourkela",
        coordinate: Coordinate::new_unchecked(22.215, 84.83),
        rating: 4.7,
        available_beds: 0,
    },
];

/// The list shown whenever the live directory cannot be read.
pub fn fallback_hospitals() -> Vec<HospitalRecord> {
    SEEDS
        .iter()
        .map(|seed| HospitalRecord {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            location: seed.location.to_string(),
            coordinate: seed.coordinate,
            rating: seed.rating,
            available_beds: seed.available_beds,
        })
        .collect()
}

/// Directory backed only by the seed list; used when no backend is configured.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory;

#[async_trait]
impl HospitalDirectory for StaticDirectory {
    async fn fetch_hospitals(&self) -> Result<Vec<HospitalRecord>> {
        Ok(fallback_hospitals())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_list_literals() {
        let hospitals = fallback_hospitals();
        let names: Vec<&str> = hospitals.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(
            names,
            ["CWS Hospital", "RGH Government Hospital", "Hi-Tech Medical College"]
        );
        let beds: Vec<u32> = hospitals.iter().map(|h| h.available_beds).collect();
        assert_eq!(beds, [50, 5, 0]);
        assert!(hospitals.iter().all(|h| h.location == "Rourkela"));
    }

    #[test]
    fn test_static_directory_serves_seeds() {
        let hospitals = tokio_test::block_on(StaticDirectory.fetch_hospitals()).unwrap();
        assert_eq!(hospitals, fallback_hospitals());
    }
}
