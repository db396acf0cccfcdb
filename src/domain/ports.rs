use crate::domain::model::{ContactSubmission, HospitalRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Read side: wherever hospital rows and their bed counts live.
#[async_trait]
pub trait HospitalDirectory: Send + Sync {
    async fn fetch_hospitals(&self) -> Result<Vec<HospitalRecord>>;
}

/// Write side: accepts one contact-form payload per call.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn insert(&self, submission: &ContactSubmission) -> Result<()>;
}

pub trait BackendSettings: Send + Sync {
    fn base_url(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;
    /// Extra directory reads after the first failure. Submissions are never retried.
    fn retry_attempts(&self) -> u32;
    fn retry_delay(&self) -> Duration;
}
