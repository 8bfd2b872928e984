// Entities module structure
pub mod assessment;
pub mod patient;

// Re-export commonly used types
pub use assessment::{AssessmentResult, BloodPressureReading, ParsedVitals, VitalScores};
pub use patient::PatientRecord;
