use serde::{Deserialize, Serialize};

/// A successfully parsed blood pressure pair.
///
/// Only ever constructed with both sides present: if either side of the
/// reading fails to parse, the whole pair is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BloodPressureReading {
    /// Systolic blood pressure (the higher number)
    pub systolic: i64,

    /// Diastolic blood pressure (the lower number)
    pub diastolic: i64,
}

/// Vital signs after field parsing.
///
/// `None` always means "could not parse"; it is never conflated with a
/// valid zero reading.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParsedVitals {
    /// Blood pressure pair, all-or-nothing
    pub blood_pressure: Option<BloodPressureReading>,

    /// Temperature in degrees Fahrenheit
    pub temperature: Option<f64>,

    /// Age in whole years, fractional input truncated toward zero
    pub age: Option<i64>,
}

impl ParsedVitals {
    /// True when at least one vital sign failed to parse.
    pub fn has_data_quality_issue(&self) -> bool {
        self.blood_pressure.is_none() || self.temperature.is_none() || self.age.is_none()
    }
}

/// Per-vital sub-scores under the fixed clinical rubric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VitalScores {
    /// Blood pressure contribution, 0-3
    pub blood_pressure: u8,

    /// Temperature contribution, 0-2
    pub temperature: u8,

    /// Age contribution, 0-2
    pub age: u8,
}

impl VitalScores {
    /// Total risk score, 0-7.
    pub fn total(&self) -> u8 {
        self.blood_pressure + self.temperature + self.age
    }
}

/// The three category lists produced by evaluating a batch, in the exact
/// shape the submission endpoint expects.
///
/// Each list holds identifiers in order of first appearance in the input
/// batch. A patient may appear in zero, one, two, or all three lists;
/// membership in one category never excludes another. Empty categories
/// serialize as empty arrays, never as null or a missing key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Patients with a total risk score of 4 or higher
    pub high_risk_patients: Vec<String>,

    /// Patients whose parsed temperature is 99.6°F or higher
    pub fever_patients: Vec<String>,

    /// Patients with at least one unparseable vital-sign field
    pub data_quality_issues: Vec<String>,
}
