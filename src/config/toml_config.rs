use crate::core::eta::DEFAULT_SPEED_KMH;
use crate::core::geo::REFERENCE_POINT;
use crate::core::{BackendSettings, Coordinate};
use crate::utils::error::{FinderError, Result};
use crate::utils::validation::{validate_positive_number, validate_range, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
const DEFAULT_RETRY_ATTEMPTS: u32 = 1;
const DEFAULT_RETRY_DELAY_MILLIS: u64 = 500;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub backend: Option<BackendConfig>,
    #[serde(default)]
    pub estimator: EstimatorConfig,
    #[serde(default)]
    pub listing: ListingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub retry_attempts: Option<u32>,
    pub retry_delay_millis: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstimatorConfig {
    pub speed_kmh: Option<f64>,
    pub reference_latitude: Option<f64>,
    pub reference_longitude: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingConfig {
    pub radius_km: Option<f64>,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout_seconds: None,
            retry_attempts: None,
            retry_delay_millis: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

impl BackendSettings for BackendConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    fn retry_attempts(&self) -> u32 {
        self.retry_attempts.unwrap_or(DEFAULT_RETRY_ATTEMPTS)
    }

    fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_millis.unwrap_or(DEFAULT_RETRY_DELAY_MILLIS))
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FinderError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FinderError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn speed_kmh(&self) -> f64 {
        self.estimator.speed_kmh.unwrap_or(DEFAULT_SPEED_KMH)
    }

    pub fn reference_point(&self) -> Coordinate {
        Coordinate::new_unchecked(
            self.estimator
                .reference_latitude
                .unwrap_or(REFERENCE_POINT.latitude),
            self.estimator
                .reference_longitude
                .unwrap_or(REFERENCE_POINT.longitude),
        )
    }

    pub fn radius_km(&self) -> Option<f64> {
        self.listing.radius_km
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(backend) = &self.backend {
            validate_url("backend.base_url", &backend.base_url)?;
            validate_positive_number("backend.timeout_seconds", backend.timeout_seconds(), 1)?;

            if let Some(key) = &backend.api_key {
                if key.starts_with("${") {
                    return Err(FinderError::MissingConfigError {
                        field: format!("backend.api_key (environment variable {} is not set)", key),
                    });
                }
            }
        }

        validate_range("estimator.speed_kmh", self.speed_kmh(), 0.1, 300.0)?;

        let reference = self.reference_point();
        Coordinate::new(reference.latitude, reference.longitude).map_err(|e| {
            FinderError::InvalidConfigValueError {
                field: "estimator.reference".to_string(),
                value: reference.to_string(),
                reason: e.to_string(),
            }
        })?;

        if let Some(radius) = self.radius_km() {
            validate_range("listing.radius_km", radius, 0.0, 20_100.0)?;
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
