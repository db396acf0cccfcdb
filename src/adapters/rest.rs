//! PostgREST-style backend: `hospitals` is read through `GET /rest/v1/hospitals`,
//! contact submissions are written through `POST /rest/v1/contact_submissions`.

use crate::core::{
    BackendSettings, ContactSubmission, Coordinate, HospitalDirectory, HospitalRecord,
    SubmissionSink,
};
use crate::utils::error::{FinderError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use std::time::Duration;

pub const HOSPITALS_PATH: &str = "/rest/v1/hospitals";
pub const SUBMISSIONS_PATH: &str = "/rest/v1/contact_submissions";
pub const HOSPITAL_COLUMNS: &str =
    "id,name,location,latitude,longitude,rating,bed_availability(available_beds)";

#[derive(Debug, Deserialize)]
struct HospitalRow {
    id: serde_json::Value,
    name: String,
    #[serde(default)]
    location: Option<String>,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    bed_availability: Option<Vec<BedAvailabilityRow>>,
}

#[derive(Debug, Deserialize)]
struct BedAvailabilityRow {
    #[serde(default)]
    available_beds: Option<i64>,
}

impl TryFrom<HospitalRow> for HospitalRecord {
    type Error = FinderError;

    fn try_from(row: HospitalRow) -> Result<Self> {
        let id = match row.id {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };

        // Only the first availability entry counts; no entry means no free beds.
        let raw_beds = row
            .bed_availability
            .as_ref()
            .and_then(|entries| entries.first())
            .and_then(|entry| entry.available_beds)
            .unwrap_or(0);
        let available_beds = u32::try_from(raw_beds).map_err(|_| {
            FinderError::contract(format!(
                "hospital {} reports invalid bed count {}",
                id, raw_beds
            ))
        })?;

        Ok(HospitalRecord {
            coordinate: Coordinate::new(row.latitude, row.longitude)?,
            id,
            name: row.name,
            location: row.location.unwrap_or_default(),
            rating: row.rating.unwrap_or(0.0),
            available_beds,
        })
    }
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

fn with_auth(request: RequestBuilder, api_key: Option<&str>) -> RequestBuilder {
    match api_key {
        Some(key) => request
            .header("apikey", key)
            .header("Authorization", format!("Bearer {}", key)),
        None => request,
    }
}

fn build_client(timeout_seconds: u64) -> Result<Client> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()?)
}

pub struct RestHospitalDirectory<C: BackendSettings> {
    config: C,
    client: Client,
}

impl<C: BackendSettings> RestHospitalDirectory<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = build_client(config.timeout_seconds())?;
        Ok(Self { config, client })
    }

    async fn fetch_once(&self) -> Result<Vec<HospitalRecord>> {
        let url = endpoint(self.config.base_url(), HOSPITALS_PATH);
        tracing::debug!("Making directory request to: {}", url);

        let request = self
            .client
            .get(&url)
            .query(&[("select", HOSPITAL_COLUMNS)]);
        let response = with_auth(request, self.config.api_key())
            .send()
            .await
            .map_err(|e| FinderError::data_fetch(e.to_string()))?;

        let status = response.status();
        tracing::debug!("Directory response status: {}", status);
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FinderError::data_fetch(format!(
                "directory returned {}: {}",
                status, body
            )));
        }

        let rows: Vec<HospitalRow> = response
            .json()
            .await
            .map_err(|e| FinderError::data_fetch(format!("undecodable directory response: {}", e)))?;

        rows.into_iter().map(HospitalRecord::try_from).collect()
    }
}

#[async_trait]
impl<C: BackendSettings> HospitalDirectory for RestHospitalDirectory<C> {
    async fn fetch_hospitals(&self) -> Result<Vec<HospitalRecord>> {
        let attempts = self.config.retry_attempts() + 1;
        let mut attempt = 1;
        loop {
            match self.fetch_once().await {
                Ok(hospitals) => return Ok(hospitals),
                // Bad data will not fix itself on a second read.
                Err(e @ FinderError::ContractViolation { .. }) => return Err(e),
                Err(e) if attempt < attempts => {
                    tracing::warn!(
                        "Directory attempt {}/{} failed: {}",
                        attempt,
                        attempts,
                        e
                    );
                    tokio::time::sleep(self.config.retry_delay()).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

pub struct RestSubmissionSink<C: BackendSettings> {
    config: C,
    client: Client,
}

impl<C: BackendSettings> RestSubmissionSink<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = build_client(config.timeout_seconds())?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl<C: BackendSettings> SubmissionSink for RestSubmissionSink<C> {
    async fn insert(&self, submission: &ContactSubmission) -> Result<()> {
        let url = endpoint(self.config.base_url(), SUBMISSIONS_PATH);
        tracing::debug!("Posting contact submission to: {}", url);

        let request = self
            .client
            .post(&url)
            .header("Prefer", "return=minimal")
            .json(&[submission]);
        let response = with_auth(request, self.config.api_key())
            .send()
            .await
            .map_err(|e| FinderError::submission(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FinderError::submission(format!(
                "sink returned {}: {}",
                status, body
            )));
        }
        Ok(())
    }
}
