// PatientTriage Domain
// This crate contains the risk-evaluation pipeline: parsing raw vital-sign
// fields, scoring them under the clinical rubric, and classifying patients.
// Everything here is pure and synchronous; all I/O lives in the client crate.

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;
