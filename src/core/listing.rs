use crate::adapters::fallback::fallback_hospitals;
use crate::core::availability::classify;
use crate::core::eta::estimate;
use crate::domain::model::{Coordinate, HospitalRecord, Listing, ListingRow, ListingSource};
use crate::domain::ports::HospitalDirectory;
use chrono::Utc;

/// Best-effort read: any directory failure is logged and replaced by the seed list.
pub async fn fetch_or_fallback<D: HospitalDirectory + ?Sized>(
    directory: &D,
) -> (Vec<HospitalRecord>, ListingSource) {
    match directory.fetch_hospitals().await {
        Ok(hospitals) => {
            tracing::debug!("Directory returned {} hospitals", hospitals.len());
            (hospitals, ListingSource::Directory)
        }
        Err(e) => {
            tracing::warn!("Error fetching hospitals, using fallback list: {}", e);
            (fallback_hospitals(), ListingSource::Fallback)
        }
    }
}

pub fn to_row(hospital: HospitalRecord, reference: Coordinate, speed_kmh: f64) -> ListingRow {
    let distance = estimate(reference, hospital.coordinate, speed_kmh);
    let status = classify(hospital.available_beds);
    ListingRow {
        hospital,
        distance,
        status,
    }
}

/// Rows keep directory order. With `radius_km` set, rows farther away are dropped.
pub async fn build_listing<D: HospitalDirectory + ?Sized>(
    directory: &D,
    reference: Coordinate,
    speed_kmh: f64,
    radius_km: Option<f64>,
) -> Listing {
    let (hospitals, source) = fetch_or_fallback(directory).await;
    let total = hospitals.len();

    let rows: Vec<ListingRow> = hospitals
        .into_iter()
        .map(|hospital| to_row(hospital, reference, speed_kmh))
        .filter(|row| radius_km.map_or(true, |radius| row.distance.distance_km <= radius))
        .collect();

    if rows.len() < total {
        tracing::debug!(
            "Radius filter kept {} of {} hospitals",
            rows.len(),
            total
        );
    }

    Listing {
        rows,
        source,
        generated_at: Utc::now(),
    }
}
