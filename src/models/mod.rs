//! Domain models for the family tree
//!
//! This module contains the records held by a `RecordStore`: patients,
//! diseases, parent-child links and patient-disease associations. Each
//! record doubles as a row of one of the four flat tables.

pub mod disease;
pub mod patient;
pub mod relations;

// Re-export commonly used types
pub use disease::Disease;
pub use patient::Patient;
pub use relations::{ParentLink, PatientDiseaseRow, Relationship};
