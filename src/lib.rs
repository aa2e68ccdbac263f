//! A Rust library for modelling family trees of patients and estimating
//! hereditary disease risk from tabular records.
//!
//! The [`RecordStore`] owns patients, diseases, parent links and disease
//! assignments and validates every mutation. The [`graph`] module walks
//! lineages and builds family subgraphs over it, and the [`risk`] module
//! turns carriers among relatives into a verdict or a highlight set.

pub mod collections;
pub mod common;
pub mod config;
pub mod error;
pub mod graph;
pub mod loader;
pub mod models;
pub mod risk;
pub mod store;
pub mod utils;
pub mod view;

// Core types
pub use config::{AncestryConfig, DataSources};
pub use error::{AncestryError, RecordKind, Result};
pub use store::{Parents, RecordStore};

// Records
pub use models::{Disease, ParentLink, Patient, PatientDiseaseRow, Relationship};

// Graph
pub use graph::{FamilyEdge, FamilyGraph, Kin, Lineage, LineageDirection};

// Risk evaluation
pub use risk::{
    CarrierRelative, HighlightMatch, HighlightMode, RiskEvaluator, RiskReport, RiskRule,
    RiskRuleTable,
};

// Views and table I/O
pub use loader::{Tables, read_table, write_table};
pub use view::{NodeAttributes, PatientSummary, TreeView, ViewSelection, summary_table};
