pub mod availability;
pub mod contact;
pub mod eta;
pub mod geo;
pub mod listing;

pub use crate::domain::model::{
    AvailabilityStatus, ContactSubmission, Coordinate, DistanceResult, HospitalRecord, Listing,
    ListingRow, ListingSource,
};
pub use crate::domain::ports::{BackendSettings, HospitalDirectory, SubmissionSink};
pub use crate::utils::error::Result;
