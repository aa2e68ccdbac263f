//! Family graph engine
//!
//! Two views over the parent-child links of a `RecordStore`:
//!
//! - [`Lineage`]: lazy breadth-first walks over ancestors or descendants,
//!   used for cycle checks while editing and for risk assessment.
//! - [`FamilyGraph`]: a directed `petgraph` graph built on request, used
//!   for edge lists, focused subgraphs and whole-graph cycle detection.

pub mod family_graph;
pub mod lineage;

pub use family_graph::{FamilyEdge, FamilyGraph};
pub use lineage::{Kin, Lineage, LineageDirection};
