pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{BackendConfig, TomlConfig};

pub use crate::adapters::fallback::{fallback_hospitals, StaticDirectory};
pub use crate::adapters::rest::{RestHospitalDirectory, RestSubmissionSink};
pub use crate::core::availability::classify;
pub use crate::core::contact::{ContactForm, FormStatus};
pub use crate::core::eta::{estimate, eta_minutes, DEFAULT_SPEED_KMH};
pub use crate::core::geo::{distance_km, REFERENCE_POINT};
pub use crate::core::listing::build_listing;
pub use crate::domain::model::{
    AvailabilityStatus, ContactSubmission, Coordinate, DistanceResult, HospitalRecord, Listing,
    ListingRow, ListingSource,
};
pub use crate::utils::error::{FinderError, Result};
