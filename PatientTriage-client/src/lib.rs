// PatientTriage Client
// I/O collaborators around the Patient Data Service: configuration, the
// paginated fetch loop with retry/backoff, and assessment submission.
// The risk pipeline itself lives in patient_triage_domain.

// Remote service seam and its reqwest implementation
pub mod api;

// Service configuration
pub mod config;

// Error types
pub mod error;

// Paginated fetch loop
pub mod fetch;

// Assessment submission
pub mod submit;

// Re-export commonly used types
pub use api::{Page, Pagination, PatientApiClient, PatientDataApi, SubmissionReceipt};
pub use config::{ApiConfig, BackoffPolicy, RetryConfig};
pub use error::ClientError;
