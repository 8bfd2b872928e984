use anyhow::Context;

use patient_triage_client::api::PatientApiClient;
use patient_triage_client::config::ApiConfig;
use patient_triage_client::{fetch, submit};
use patient_triage_domain::services::evaluate_patients;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with environment settings
    tracing_subscriber::fmt::init();

    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    let config = ApiConfig::from_env().context("loading Patient Data Service configuration")?;
    let client = PatientApiClient::new(config.clone());

    tracing::info!("Fetching patients from {}", config.base_url);
    let patients = fetch::fetch_all_patients(&client, &config)
        .await
        .context("fetching patient listing")?;
    tracing::info!("Fetched {} patients", patients.len());

    let assessment = evaluate_patients(&patients);
    tracing::info!(
        "Assessment complete: {} high-risk, {} feverish, {} with data quality issues",
        assessment.high_risk_patients.len(),
        assessment.fever_patients.len(),
        assessment.data_quality_issues.len()
    );

    let receipt = submit::submit_assessment(&client, &assessment)
        .await
        .context("submitting assessment")?;
    if let Some(message) = receipt.message {
        tracing::info!("Service acknowledged submission: {}", message);
    }

    Ok(())
}
