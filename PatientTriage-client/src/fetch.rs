//! The paginated fetch loop over the patient listing.

use tracing::{debug, error, warn};

use patient_triage_domain::entities::PatientRecord;

use crate::api::{Page, PatientDataApi};
use crate::config::{ApiConfig, RetryConfig};
use crate::error::ClientError;

/// Walk the paginated listing and accumulate every record in input order.
///
/// Transient statuses (429/500/503) are retried on the same page with the
/// configured backoff. A page whose body cannot be interpreted is logged
/// and skipped, matching the service's occasional habit of serving garbage
/// pages. Any other failure aborts the walk.
pub async fn fetch_all_patients<A: PatientDataApi + Sync>(
    api: &A,
    config: &ApiConfig,
) -> Result<Vec<PatientRecord>, ClientError> {
    let mut patients = Vec::new();
    let mut page = 1;
    let mut has_next = true;

    while has_next {
        match fetch_page_with_retry(api, page, config.page_limit, &config.retry).await {
            Ok(fetched) => {
                debug!("Fetched page {} with {} records", page, fetched.data.len());
                has_next = fetched.has_next();
                patients.extend(fetched.data);
                page += 1;
            }
            Err(ClientError::MalformedPage(reason)) => {
                warn!("Invalid data on page {}, skipping: {}", page, reason);
                page += 1;
            }
            Err(e) => {
                error!("Failed on page {}: {}", page, e);
                return Err(e);
            }
        }
    }

    Ok(patients)
}

/// Fetch a single page, retrying transient statuses per the retry config.
async fn fetch_page_with_retry<A: PatientDataApi + Sync>(
    api: &A,
    page: u32,
    limit: u32,
    retry: &RetryConfig,
) -> Result<Page<PatientRecord>, ClientError> {
    let mut attempt = 0;
    loop {
        match api.fetch_page(page, limit).await {
            Err(e) if e.is_transient() => {
                attempt += 1;
                if attempt > retry.max_retries {
                    error!(
                        "Giving up on page {} after {} attempts: {}",
                        page, attempt, e
                    );
                    return Err(ClientError::RetriesExhausted {
                        page,
                        attempts: attempt,
                    });
                }
                let delay = retry.backoff.delay(attempt);
                warn!(
                    "Retrying page {} due to error: {} (attempt {}/{}, waiting {:?})",
                    page, e, attempt, retry.max_retries, delay
                );
                tokio::time::sleep(delay).await;
            }
            other => return other,
        }
    }
}
