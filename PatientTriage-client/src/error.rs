use thiserror::Error;

/// Error type for Patient Data Service operations
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status from the service
    #[error("{context} failed with status {status}")]
    Status {
        /// HTTP status code returned by the service
        status: u16,
        /// What was being attempted, e.g. "fetching page 3"
        context: String,
    },

    /// A transient failure persisted past the retry budget
    #[error("Gave up on page {page} after {attempts} attempts")]
    RetriesExhausted {
        /// Page that kept failing
        page: u32,
        /// Total fetch attempts made for that page
        attempts: u32,
    },

    /// Response body did not match the expected shape
    #[error("Malformed response body: {0}")]
    MalformedPage(String),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Statuses worth retrying: rate limiting and transient server faults.
    pub fn is_transient_status(status: u16) -> bool {
        matches!(status, 429 | 500 | 503)
    }

    /// True when this error is a transient status that retry may cure.
    pub fn is_transient(&self) -> bool {
        matches!(self, ClientError::Status { status, .. } if Self::is_transient_status(*status))
    }
}
