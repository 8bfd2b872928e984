use std::env;
use std::time::Duration;

use crate::error::ClientError;

/// Default page size when TRIAGE_PAGE_LIMIT is not set.
pub const DEFAULT_PAGE_LIMIT: u32 = 5;

/// Delay between attempts on a transient Patient Data Service failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackoffPolicy {
    /// The same delay before every retry
    Fixed(Duration),

    /// `base * 2^(attempt - 1)`: base before the first retry, doubling after
    Exponential {
        /// Delay before the first retry
        base: Duration,
    },
}

impl BackoffPolicy {
    /// Delay to wait before the given retry attempt (1-based).
    pub fn delay(&self, attempt: u32) -> Duration {
        match self {
            BackoffPolicy::Fixed(delay) => *delay,
            BackoffPolicy::Exponential { base } => {
                base.saturating_mul(2u32.saturating_pow(attempt.saturating_sub(1)))
            }
        }
    }
}

/// Retry behavior for transient fetch failures, carried explicitly rather
/// than as ambient loop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    /// Retries per page beyond the initial attempt
    pub max_retries: u32,

    /// How long to wait between attempts
    pub backoff: BackoffPolicy,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff: BackoffPolicy::Exponential {
                base: Duration::from_millis(500),
            },
        }
    }
}

/// Connection settings for the Patient Data Service.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Service base URL, without a trailing slash
    pub base_url: String,

    /// Value sent in the x-api-key header
    pub api_key: String,

    /// Page size requested from the patient listing
    pub page_limit: u32,

    /// Retry behavior for transient failures
    pub retry: RetryConfig,
}

impl ApiConfig {
    /// Build configuration from the environment.
    ///
    /// TRIAGE_BASE_URL and TRIAGE_API_KEY are required; TRIAGE_PAGE_LIMIT is
    /// optional and falls back to the default page size when missing or
    /// unparseable.
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url = env::var("TRIAGE_BASE_URL")
            .map_err(|_| ClientError::Config("TRIAGE_BASE_URL is not set".to_string()))?;
        let api_key = env::var("TRIAGE_API_KEY")
            .map_err(|_| ClientError::Config("TRIAGE_API_KEY is not set".to_string()))?;
        let page_limit = env::var("TRIAGE_PAGE_LIMIT")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(DEFAULT_PAGE_LIMIT);

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            page_limit,
            retry: RetryConfig::default(),
        })
    }
}
