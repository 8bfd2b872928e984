//! Batch evaluation: the full pipeline over an ordered sequence of records.

use tracing::debug;

use crate::entities::{AssessmentResult, PatientRecord};
use crate::services::parsing::parse_vitals;
use crate::services::risk::classify;

/// Evaluate a batch of patient records into the three category lists.
///
/// Records are processed strictly in input order and each list preserves
/// order of first appearance. Duplicate identifiers in the input are not
/// deduplicated: a second occurrence appends again to whichever categories
/// match it. This never fails; however malformed a record is, parse
/// failures degrade its scores to zero and surface through the
/// data-quality list.
pub fn evaluate_patients(patients: &[PatientRecord]) -> AssessmentResult {
    let mut result = AssessmentResult::default();

    for patient in patients {
        let vitals = parse_vitals(patient);
        let assessment = classify(&vitals);

        if assessment.high_risk {
            result.high_risk_patients.push(patient.patient_id.clone());
        }
        if assessment.feverish {
            result.fever_patients.push(patient.patient_id.clone());
        }
        if assessment.data_quality_issue {
            result.data_quality_issues.push(patient.patient_id.clone());
        }
    }

    debug!(
        "Evaluated {} patients: {} high-risk, {} feverish, {} with data quality issues",
        patients.len(),
        result.high_risk_patients.len(),
        result.fever_patients.len(),
        result.data_quality_issues.len()
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn record(id: &str, bp: Value, temperature: Value, age: Value) -> PatientRecord {
        PatientRecord::new(id, Some(bp), Some(temperature), Some(age))
    }

    fn high_risk_record(id: &str) -> PatientRecord {
        // 150/95 -> 3, 101.0 -> 2, 70 -> 2: total 7
        record(id, json!("150/95"), json!(101.0), json!(70))
    }

    #[test]
    fn test_empty_batch() {
        assert_eq!(evaluate_patients(&[]), AssessmentResult::default());
    }

    #[test]
    fn test_healthy_patient_in_no_lists() {
        let result = evaluate_patients(&[record("P1", json!("119/79"), json!(99.5), json!(39))]);
        assert_eq!(result, AssessmentResult::default());
    }

    #[test]
    fn test_high_risk_and_fever_membership() {
        let result = evaluate_patients(&[record("P1", json!("125/78"), json!(101.0), json!(70))]);
        assert_eq!(result.high_risk_patients, vec!["P1"]);
        assert_eq!(result.fever_patients, vec!["P1"]);
        assert!(result.data_quality_issues.is_empty());
    }

    #[test]
    fn test_malformed_record_only_in_data_quality() {
        let result = evaluate_patients(&[PatientRecord::new(
            "P1",
            Some(json!("abc")),
            Some(json!("N/A")),
            None,
        )]);
        assert!(result.high_risk_patients.is_empty());
        assert!(result.fever_patients.is_empty());
        assert_eq!(result.data_quality_issues, vec!["P1"]);
    }

    #[test]
    fn test_order_matches_input_order() {
        let batch = vec![
            high_risk_record("P1"),
            high_risk_record("P2"),
            high_risk_record("P3"),
        ];
        let result = evaluate_patients(&batch);
        assert_eq!(result.high_risk_patients, vec!["P1", "P2", "P3"]);
        assert_eq!(result.fever_patients, vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn test_duplicate_identifiers_append_again() {
        let batch = vec![high_risk_record("P1"), high_risk_record("P1")];
        let result = evaluate_patients(&batch);
        assert_eq!(result.high_risk_patients, vec!["P1", "P1"]);
    }

    #[test]
    fn test_idempotent_over_same_batch() {
        let batch = vec![
            high_risk_record("P1"),
            record("P2", json!("119/79"), json!(99.5), json!(39)),
            PatientRecord::new("P3", Some(json!("??")), Some(json!(100.2)), Some(json!(50))),
        ];
        let first = evaluate_patients(&batch);
        let second = evaluate_patients(&batch);
        assert_eq!(first, second);
    }

    #[test]
    fn test_mixed_batch_membership() {
        let batch = vec![
            // High-risk and feverish
            high_risk_record("P1"),
            // Data-quality only: bp unparseable, everything else healthy
            PatientRecord::new("P2", Some(json!("n/a")), Some(json!(98.6)), Some(json!(30))),
            // Feverish only
            record("P3", json!("110/70"), json!(99.6), json!(30)),
            // All three: high score despite a missing age
            PatientRecord::new("P4", Some(json!("160/100")), Some(json!(101.5)), None),
        ];
        let result = evaluate_patients(&batch);
        assert_eq!(result.high_risk_patients, vec!["P1", "P4"]);
        assert_eq!(result.fever_patients, vec!["P1", "P3", "P4"]);
        assert_eq!(result.data_quality_issues, vec!["P2", "P4"]);
    }
}
