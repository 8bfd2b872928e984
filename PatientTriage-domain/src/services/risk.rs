//! Risk classification over scored vitals.

use crate::entities::{ParsedVitals, VitalScores};
use crate::services::rubric::{score_age, score_blood_pressure, score_temperature};

/// A patient is high-risk when the total score reaches this value.
pub const HIGH_RISK_THRESHOLD: u8 = 4;

/// Fever threshold in degrees Fahrenheit.
///
/// Deliberately a separate check from the temperature score bands: the
/// score table's middle band starts above 99.5 while the fever flag starts
/// at 99.6, and the two must not be derived from each other.
pub const FEVER_THRESHOLD_F: f64 = 99.6;

/// Classification outcome for a single patient.
///
/// The three flags are independent predicates; any combination can hold at
/// once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskAssessment {
    /// Per-vital sub-scores under the rubric
    pub scores: VitalScores,

    /// Total risk (0-7) reached the high-risk threshold
    pub high_risk: bool,

    /// Temperature parsed and is at or above the fever threshold
    pub feverish: bool,

    /// At least one vital-sign field failed to parse
    pub data_quality_issue: bool,
}

/// Score and classify one patient's parsed vitals.
pub fn classify(vitals: &ParsedVitals) -> RiskAssessment {
    let scores = VitalScores {
        blood_pressure: score_blood_pressure(vitals.blood_pressure),
        temperature: score_temperature(vitals.temperature),
        age: score_age(vitals.age),
    };

    RiskAssessment {
        scores,
        high_risk: scores.total() >= HIGH_RISK_THRESHOLD,
        feverish: vitals
            .temperature
            .map_or(false, |t| t >= FEVER_THRESHOLD_F),
        data_quality_issue: vitals.has_data_quality_issue(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::BloodPressureReading;

    fn vitals(bp: Option<(i64, i64)>, temperature: Option<f64>, age: Option<i64>) -> ParsedVitals {
        ParsedVitals {
            blood_pressure: bp.map(|(systolic, diastolic)| BloodPressureReading {
                systolic,
                diastolic,
            }),
            temperature,
            age,
        }
    }

    #[test]
    fn test_all_boundaries_low_side() {
        // 119/79, 99.5, 39: every sub-score 0, nothing flagged
        let assessment = classify(&vitals(Some((119, 79)), Some(99.5), Some(39)));
        assert_eq!(assessment.scores, VitalScores::default());
        assert!(!assessment.high_risk);
        assert!(!assessment.feverish);
        assert!(!assessment.data_quality_issue);
    }

    #[test]
    fn test_high_risk_and_fever_together() {
        // 125/78 -> 1, 101.0 -> 2, 70 -> 2: total 5
        let assessment = classify(&vitals(Some((125, 78)), Some(101.0), Some(70)));
        assert_eq!(assessment.scores.blood_pressure, 1);
        assert_eq!(assessment.scores.temperature, 2);
        assert_eq!(assessment.scores.age, 2);
        assert_eq!(assessment.scores.total(), 5);
        assert!(assessment.high_risk);
        assert!(assessment.feverish);
        assert!(!assessment.data_quality_issue);
    }

    #[test]
    fn test_total_exactly_at_threshold() {
        // 130/85 -> 2, 100.0 -> 1, 50 -> 1: total 4 is high-risk
        let assessment = classify(&vitals(Some((130, 85)), Some(100.0), Some(50)));
        assert_eq!(assessment.scores.total(), 4);
        assert!(assessment.high_risk);
    }

    #[test]
    fn test_total_just_below_threshold() {
        // 130/85 -> 2, 99.0 -> 0, 50 -> 1: total 3
        let assessment = classify(&vitals(Some((130, 85)), Some(99.0), Some(50)));
        assert_eq!(assessment.scores.total(), 3);
        assert!(!assessment.high_risk);
    }

    #[test]
    fn test_fever_flag_independent_of_score_band() {
        // 99.6 scores only 1 under the rubric but already counts as fever
        let assessment = classify(&vitals(Some((110, 70)), Some(99.6), Some(30)));
        assert_eq!(assessment.scores.temperature, 1);
        assert!(assessment.feverish);

        // 99.55 is above the score table's 99.5 cutoff but below the fever
        // threshold: scored 1, not feverish
        let assessment = classify(&vitals(Some((110, 70)), Some(99.55), Some(30)));
        assert_eq!(assessment.scores.temperature, 1);
        assert!(!assessment.feverish);
    }

    #[test]
    fn test_unparseable_temperature_is_never_feverish() {
        let assessment = classify(&vitals(Some((110, 70)), None, Some(30)));
        assert!(!assessment.feverish);
        assert!(assessment.data_quality_issue);
    }

    #[test]
    fn test_fully_malformed_record_scores_zero() {
        let assessment = classify(&vitals(None, None, None));
        assert_eq!(assessment.scores.total(), 0);
        assert!(!assessment.high_risk);
        assert!(!assessment.feverish);
        assert!(assessment.data_quality_issue);
    }

    #[test]
    fn test_predicates_are_not_mutually_exclusive() {
        // Unparseable age still leaves enough score for high-risk, and the
        // fever flag holds at the same time
        let assessment = classify(&vitals(Some((150, 95)), Some(101.5), None));
        assert!(assessment.high_risk);
        assert!(assessment.feverish);
        assert!(assessment.data_quality_issue);
    }
}
