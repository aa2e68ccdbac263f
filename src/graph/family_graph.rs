//! Directed family graph over the parent-child links.

use log::debug;
use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{AncestryError, Result};
use crate::models::Relationship;
use crate::store::RecordStore;

/// One parent → child edge, as handed to a rendering collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyEdge {
    /// The parent
    pub source: String,
    /// The child
    pub target: String,
    /// Whether the parent is the mother or the father
    pub relationship: Relationship,
}

/// Directed graph of the family, edges pointing parent → child
///
/// Built on request from a `RecordStore` and borrowing it; rebuild after
/// mutating the store.
#[derive(Debug, Clone)]
pub struct FamilyGraph<'a> {
    store: &'a RecordStore,
    graph: DiGraphMap<&'a str, Relationship>,
}

impl<'a> FamilyGraph<'a> {
    /// Build the graph from the store's parent links
    #[must_use]
    pub fn build(store: &'a RecordStore) -> Self {
        let mut graph = DiGraphMap::new();
        for link in store.links() {
            for (parent, relationship) in link.parents() {
                graph.add_edge(parent, link.child.as_str(), relationship);
            }
        }
        debug!(
            "Built family graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Self { store, graph }
    }

    /// Number of edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Every identifier that appears on an edge, in insertion order
    #[must_use]
    pub fn nodes(&self) -> Vec<&'a str> {
        self.graph.nodes().collect()
    }

    /// The full edge set
    ///
    /// Ordered by child insertion order, mother before father.
    #[must_use]
    pub fn edge_list(&self) -> Vec<FamilyEdge> {
        self.graph
            .all_edges()
            .map(|(source, target, relationship)| FamilyEdge {
                source: source.to_string(),
                target: target.to_string(),
                relationship: *relationship,
            })
            .collect()
    }

    /// Edges of the family of one patient
    ///
    /// The core of the family is the patient, their ancestors and their
    /// descendants. With `include_all_relatives` every parent of a core
    /// member is added as well, which brings in the partners of
    /// descendants; without it only edges inside the core are kept.
    ///
    /// Fails with `EmptySubgraph` when no edge remains.
    pub fn subgraph(&self, patient_id: &str, include_all_relatives: bool) -> Result<Vec<FamilyEdge>> {
        let patient = self.store.patient(patient_id)?;

        let mut core: FxHashSet<&str> = FxHashSet::default();
        core.insert(patient.id.as_str());
        core.extend(self.store.ancestors_of(patient_id)?);
        core.extend(self.store.descendants_of(patient_id)?);

        let edges: Vec<FamilyEdge> = self
            .graph
            .all_edges()
            .filter(|(source, target, _)| {
                core.contains(target) && (include_all_relatives || core.contains(source))
            })
            .map(|(source, target, relationship)| FamilyEdge {
                source: source.to_string(),
                target: target.to_string(),
                relationship: *relationship,
            })
            .collect();

        if edges.is_empty() {
            return Err(AncestryError::EmptySubgraph(patient_id.to_string()));
        }

        debug!(
            "Subgraph for {patient_id}: {} core members, {} edges",
            core.len(),
            edges.len()
        );
        Ok(edges)
    }

    /// Lazily walk all descendants of a patient
    pub fn descendants_of(&self, patient_id: &str) -> Result<impl Iterator<Item = &'a str> + use<'a>> {
        self.store.descendants_of(patient_id)
    }

    /// Lazily walk all ancestors of a patient
    pub fn ancestors_of(&self, patient_id: &str) -> Result<impl Iterator<Item = &'a str> + use<'a>> {
        self.store.ancestors_of(patient_id)
    }

    /// Groups of identifiers that form a cycle
    ///
    /// Strongly connected components with more than one member; empty for a
    /// valid family.
    #[must_use]
    pub fn find_cycles(&self) -> Vec<Vec<&'a str>> {
        tarjan_scc(&self.graph)
            .into_iter()
            .filter(|component| component.len() > 1)
            .collect()
    }
}
