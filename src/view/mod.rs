//! Output for rendering and tabular collaborators
//!
//! A [`TreeView`] is the edge list plus a per-node attribute map that a
//! front-end needs to draw the family tree; [`PatientSummary`] rows are
//! the flat patient table shown next to it.

pub mod summary;

pub use summary::{PatientSummary, summary_table};

use std::collections::BTreeMap;

use itertools::Itertools;
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::FamilyEdge;
use crate::risk::HighlightMode;
use crate::store::RecordStore;

/// What the caller has selected in the front-end
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSelection {
    /// Focus the view on this patient's family
    pub patient: Option<String>,
    /// Mark which nodes carry this disease
    pub disease: Option<String>,
    /// Diseases to highlight
    pub highlighted: Vec<String>,
    /// How highlighted diseases are matched
    pub mode: HighlightMode,
}

impl ViewSelection {
    /// Focus on a patient
    #[must_use]
    pub fn focused_on(mut self, patient_id: impl Into<String>) -> Self {
        self.patient = Some(patient_id.into());
        self
    }

    /// Mark carriers of a disease
    #[must_use]
    pub fn with_disease(mut self, disease_id: impl Into<String>) -> Self {
        self.disease = Some(disease_id.into());
        self
    }

    /// Highlight patients carrying any or all of the diseases
    #[must_use]
    pub fn highlighting<I, S>(mut self, diseases: I, mode: HighlightMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.highlighted = diseases.into_iter().map(Into::into).collect();
        self.mode = mode;
        self
    }
}

/// Attributes of one node of the family tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeAttributes {
    /// Patient identifier
    pub id: String,
    /// Patient name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Whether the patient has died
    pub is_dead: bool,
    /// Name of the mother, if recorded
    pub mother: Option<String>,
    /// Name of the father, if recorded
    pub father: Option<String>,
    /// Names of the carried diseases, comma separated
    pub diseases: String,
    /// Whether the node carries the selected disease, when one is selected
    pub carries_selected: Option<bool>,
    /// Whether the node matches the highlighted diseases
    pub highlighted: bool,
    /// Whether the node is the focused patient
    pub selected: bool,
}

/// An edge of the view, flagged when it touches the focused patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewEdge {
    /// The parent → child edge
    #[serde(flatten)]
    pub edge: FamilyEdge,
    /// Whether either end is the focused patient
    pub selected: bool,
}

/// Edge list plus node attributes for one selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeView {
    /// Edges to draw
    pub edges: Vec<ViewEdge>,
    /// Attributes per node identifier
    pub nodes: BTreeMap<String, NodeAttributes>,
    /// Label of the highlight question for this selection
    pub highlight_label: String,
}

impl TreeView {
    /// Build the view for a selection
    ///
    /// Without a focused patient the whole tree is shown. With one, only
    /// their family is shown and `EmptySubgraph` is returned when they have
    /// no recorded relatives.
    pub fn build(store: &RecordStore, selection: &ViewSelection) -> Result<Self> {
        let graph = store.family_graph();
        let edges = match &selection.patient {
            None => graph.edge_list(),
            Some(patient_id) => graph.subgraph(patient_id, true)?,
        };

        if let Some(disease_id) = &selection.disease {
            store.disease(disease_id)?;
        }
        for disease_id in &selection.highlighted {
            store.disease(disease_id)?;
        }

        let focused = selection.patient.as_deref();
        let mut nodes = BTreeMap::new();
        for id in edges.iter().flat_map(|edge| [&edge.source, &edge.target]) {
            if !nodes.contains_key(id) {
                let attributes = Self::node_attributes(store, id, selection)?;
                nodes.insert(id.clone(), attributes);
            }
        }

        let edges: Vec<ViewEdge> = edges
            .into_iter()
            .map(|edge| {
                let selected = focused
                    .is_some_and(|focus| edge.source == focus || edge.target == focus);
                ViewEdge { edge, selected }
            })
            .collect();

        info!(
            "Built tree view with {} nodes and {} edges",
            nodes.len(),
            edges.len()
        );

        Ok(Self {
            edges,
            nodes,
            highlight_label: selection.mode.label().to_string(),
        })
    }

    fn node_attributes(store: &RecordStore, id: &str, selection: &ViewSelection) -> Result<NodeAttributes> {
        let patient = store.patient(id)?;
        let carried = store.diseases_of(id)?;
        let (mother, father) = store.parent_names(id)?;

        Ok(NodeAttributes {
            id: patient.id.clone(),
            name: patient.name.clone(),
            age: patient.age,
            is_dead: patient.is_dead,
            mother: mother.map(str::to_string),
            father: father.map(str::to_string),
            diseases: store.disease_names_of(id)?.into_iter().join(", "),
            carries_selected: selection
                .disease
                .as_ref()
                .map(|disease_id| carried.contains(disease_id)),
            highlighted: selection.mode.matches(carried, selection.highlighted.as_slice()),
            selected: selection.patient.as_deref() == Some(id),
        })
    }

    /// Identifiers of the highlighted nodes
    #[must_use]
    pub fn highlighted_nodes(&self) -> Vec<&str> {
        self.nodes
            .values()
            .filter(|node| node.highlighted)
            .map(|node| node.id.as_str())
            .collect()
    }

    /// Serialize the view as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
