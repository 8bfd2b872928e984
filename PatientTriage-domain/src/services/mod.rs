// Services module structure
pub mod assessment;
pub mod parsing;
pub mod risk;
pub mod rubric;

// Re-export commonly used operations
pub use assessment::evaluate_patients;
pub use parsing::parse_vitals;
pub use risk::{classify, RiskAssessment};
