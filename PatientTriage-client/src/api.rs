//! The remote service seam: what the Patient Data Service looks like to the
//! rest of this crate, plus the reqwest-backed implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use patient_triage_domain::entities::{AssessmentResult, PatientRecord};

use crate::config::ApiConfig;
use crate::error::ClientError;

/// Pagination metadata returned alongside each page of patients.
#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    /// Page number this metadata describes
    #[serde(default)]
    pub page: u32,

    /// Page size the service applied
    #[serde(default)]
    pub limit: u32,

    /// Total records across all pages, when the service reports it
    #[serde(default)]
    pub total: Option<u64>,

    /// Whether another page follows
    #[serde(rename = "hasNext", default)]
    pub has_next: bool,
}

/// One page of results from a paginated listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    /// Records on this page
    pub data: Vec<T>,

    /// Pagination metadata; a page without it is treated as the last one
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl<T> Page<T> {
    /// Whether the listing continues past this page.
    pub fn has_next(&self) -> bool {
        self.pagination.as_ref().map_or(false, |p| p.has_next)
    }
}

/// Acknowledgement returned by the submission endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionReceipt {
    /// Whether the service accepted the submission
    #[serde(default)]
    pub success: Option<bool>,

    /// Human-readable acknowledgement, when present
    #[serde(default)]
    pub message: Option<String>,

    /// Everything else the service includes in the acknowledgement
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Remote operations of the Patient Data Service.
///
/// A trait so the fetch loop and submission path can be exercised against
/// test doubles without a live service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PatientDataApi {
    /// Fetch one page of the patient listing.
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<Page<PatientRecord>, ClientError>;

    /// Submit the three assessment lists.
    async fn submit_assessment(
        &self,
        result: &AssessmentResult,
    ) -> Result<SubmissionReceipt, ClientError>;
}

/// reqwest-backed implementation of [`PatientDataApi`].
pub struct PatientApiClient {
    http: Client,
    config: ApiConfig,
}

impl PatientApiClient {
    /// Create a client over the given configuration.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl PatientDataApi for PatientApiClient {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<Page<PatientRecord>, ClientError> {
        let url = format!("{}/patients", self.config.base_url);
        debug!("GET {} page={} limit={}", url, page, limit);

        let response = self
            .http
            .get(&url)
            .query(&[("page", page), ("limit", limit)])
            .header("x-api-key", &self.config.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                context: format!("fetching page {}", page),
            });
        }

        // Deserialization failures are a page-shape problem, not transport,
        // so they get their own error for the fetch loop to skip over
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::MalformedPage(e.to_string()))
    }

    async fn submit_assessment(
        &self,
        result: &AssessmentResult,
    ) -> Result<SubmissionReceipt, ClientError> {
        let url = format!("{}/submit-assessment", self.config.base_url);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .json(result)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                context: "submitting assessment".to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::MalformedPage(e.to_string()))
    }
}
