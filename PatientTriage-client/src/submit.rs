//! Assessment submission.

use tracing::{debug, error, info};

use patient_triage_domain::entities::AssessmentResult;

use crate::api::{PatientDataApi, SubmissionReceipt};
use crate::error::ClientError;

/// Submit the three assessment lists and log the service's acknowledgement.
pub async fn submit_assessment<A: PatientDataApi + Sync>(
    api: &A,
    result: &AssessmentResult,
) -> Result<SubmissionReceipt, ClientError> {
    if let Ok(payload) = serde_json::to_string_pretty(result) {
        debug!("Payload to submit:\n{}", payload);
    }

    match api.submit_assessment(result).await {
        Ok(receipt) => {
            info!(
                "Submission successful: {}",
                receipt.message.as_deref().unwrap_or("(no message)")
            );
            Ok(receipt)
        }
        Err(e) => {
            error!("Submission failed: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::api::MockPatientDataApi;

    fn sample_result() -> AssessmentResult {
        AssessmentResult {
            high_risk_patients: vec!["P1".to_string()],
            fever_patients: vec!["P1".to_string(), "P3".to_string()],
            data_quality_issues: vec![],
        }
    }

    #[tokio::test]
    async fn test_submits_result_and_returns_receipt() {
        let mut api = MockPatientDataApi::new();
        let expected = sample_result();
        api.expect_submit_assessment()
            .withf(move |result| *result == expected)
            .times(1)
            .returning(|_| {
                Ok(SubmissionReceipt {
                    success: Some(true),
                    message: Some("Assessment received".to_string()),
                    extra: HashMap::new(),
                })
            });

        let receipt = submit_assessment(&api, &sample_result()).await.unwrap();
        assert_eq!(receipt.success, Some(true));
    }

    #[tokio::test]
    async fn test_submission_error_propagates() {
        let mut api = MockPatientDataApi::new();
        api.expect_submit_assessment().times(1).returning(|_| {
            Err(ClientError::Status {
                status: 500,
                context: "submitting assessment".to_string(),
            })
        });

        let result = submit_assessment(&api, &sample_result()).await;
        assert!(matches!(
            result,
            Err(ClientError::Status { status: 500, .. })
        ));
    }
}
