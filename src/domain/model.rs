use crate::utils::error::{FinderError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Rejects anything outside latitude [-90, 90] / longitude [-180, 180], including NaN.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(FinderError::contract(format!(
                "latitude {} outside [-90, 90]",
                latitude
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(FinderError::contract(format!(
                "longitude {} outside [-180, 180]",
                longitude
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// For literals known to be in range.
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalRecord {
    pub id: String,
    pub name: String,
    pub location: String,
    pub coordinate: Coordinate,
    pub rating: f64,
    pub available_beds: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceResult {
    pub distance_km: f64,
    pub eta_minutes: u32,
}

impl DistanceResult {
    /// Distance rounded to one decimal, the way the listing shows it.
    pub fn display_km(&self) -> String {
        format!("{:.1}", self.distance_km)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvailabilityStatus {
    Available,
    Limited,
    Full,
}

impl AvailabilityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Limited => "Limited",
            Self::Full => "Full",
        }
    }

    /// Badge colour as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Available => "#10B981",
            Self::Limited => "#F59E0B",
            Self::Full => "#EF4444",
        }
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingSource {
    Directory,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingRow {
    pub hospital: HospitalRecord,
    pub distance: DistanceResult,
    pub status: AvailabilityStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub rows: Vec<ListingRow>,
    pub source: ListingSource,
    pub generated_at: DateTime<Utc>,
}
