use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A patient record as served by the Patient Data Service.
///
/// Apart from the identifier, fields arrive in whatever shape the upstream
/// system produced: present, null, numeric, or free text. They are carried
/// as raw JSON values here and interpreted by the parsing service, which is
/// where "malformed" becomes a well-defined state instead of a crash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Opaque identifier, unique per batch (uniqueness is not enforced here)
    pub patient_id: String,

    /// Blood pressure reading, expected as "SYSTOLIC/DIASTOLIC" free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<Value>,

    /// Body temperature in degrees Fahrenheit, numeric or numeric-like text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<Value>,

    /// Age in years, numeric or numeric-like text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Value>,
}

impl PatientRecord {
    /// Build a record from raw JSON field values. Mostly useful in tests and
    /// for callers that assemble records by hand rather than deserializing.
    pub fn new(
        patient_id: impl Into<String>,
        blood_pressure: Option<Value>,
        temperature: Option<Value>,
        age: Option<Value>,
    ) -> Self {
        Self {
            patient_id: patient_id.into(),
            blood_pressure,
            temperature,
            age,
        }
    }
}
