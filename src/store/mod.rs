//! In-memory record store
//!
//! The `RecordStore` holds the four relations of a family tree: patients,
//! parent-child links, diseases and patient-disease associations. Every
//! mutation is validated before it is applied, so a failed call leaves the
//! store unchanged and the parent-child graph stays acyclic.

mod lifecycle;

use log::{debug, warn};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::collections::GenericCollection;
use crate::common::traits::RecordCollection;
use crate::config::{AncestryConfig, DataSources};
use crate::error::{AncestryError, Result};
use crate::graph::{FamilyGraph, Lineage, LineageDirection};
use crate::models::{Disease, ParentLink, Patient, Relationship};

/// The recorded parents of a patient
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parents<'a> {
    /// Mother identifier, if recorded
    pub mother: Option<&'a str>,
    /// Father identifier, if recorded
    pub father: Option<&'a str>,
}

impl<'a> Parents<'a> {
    /// Whether neither parent is recorded
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.mother.is_none() && self.father.is_none()
    }

    /// Recorded parent identifiers, mother first
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.mother.into_iter().chain(self.father)
    }
}

/// Caller-owned store of patients, diseases and their relations
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    config: AncestryConfig,
    sources: Option<DataSources>,
    patients: GenericCollection<Patient>,
    diseases: GenericCollection<Disease>,
    /// Parent link per child
    parents: FxHashMap<String, ParentLink>,
    /// Children per parent, in link order
    children: FxHashMap<String, SmallVec<[String; 4]>>,
    /// Disease set per patient, in assignment order
    patient_diseases: FxHashMap<String, Vec<String>>,
}

impl RecordStore {
    /// Create an empty store
    #[must_use]
    pub fn new(config: AncestryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The configuration this store validates against
    #[must_use]
    pub const fn config(&self) -> &AncestryConfig {
        &self.config
    }

    /// The tables this store was loaded from or saves to
    #[must_use]
    pub const fn sources(&self) -> Option<&DataSources> {
        self.sources.as_ref()
    }

    // ---------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------

    /// Insert or update a patient
    ///
    /// Changing the age of a patient that already has parents or children
    /// re-checks the age gap of those links; a violation is rejected with
    /// `InvalidRelation`.
    pub fn upsert_patient(
        &mut self,
        id: &str,
        name: &str,
        age: u32,
        is_dead: bool,
    ) -> Result<()> {
        let patient = Patient::new(id, name, age, is_dead)?;

        if self
            .patients
            .get(id)
            .is_some_and(|existing| existing.age != age)
        {
            self.check_age_change(&patient)?;
        }

        debug!("Upserting patient {id}");
        self.patients.upsert(patient);
        Ok(())
    }

    /// Insert or update a disease
    pub fn upsert_disease(&mut self, id: &str, name: &str) -> Result<()> {
        let disease = Disease::new(id, name)?;
        debug!("Upserting disease {id}");
        self.diseases.upsert(disease);
        Ok(())
    }

    /// Record the parents of a child, replacing any previous link
    ///
    /// Passing no parents removes the link. A parent must exist, must not be
    /// the child or one of its descendants, and must be more than the
    /// configured gap older than the child; mother and father must differ.
    pub fn set_parents(
        &mut self,
        child_id: &str,
        mother_id: Option<&str>,
        father_id: Option<&str>,
    ) -> Result<()> {
        let link = ParentLink::new(child_id, mother_id, father_id);
        if let Err(err) = self.validate_link(&link) {
            warn!("Rejected parents for {child_id}: {err}");
            return Err(err);
        }

        self.apply_link(link);
        Ok(())
    }

    /// Replace the disease set of a patient
    ///
    /// Duplicates are dropped; an empty set clears the patient's diseases.
    pub fn set_diseases<I, S>(&mut self, patient_id: &str, disease_ids: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.patient(patient_id)?;

        let mut set: Vec<String> = Vec::new();
        for disease_id in disease_ids {
            let disease_id = disease_id.as_ref();
            self.disease(disease_id)?;
            if !set.iter().any(|known| known == disease_id) {
                set.push(disease_id.to_string());
            }
        }

        debug!("Assigning {} diseases to {patient_id}", set.len());
        if set.is_empty() {
            self.patient_diseases.remove(patient_id);
        } else {
            self.patient_diseases.insert(patient_id.to_string(), set);
        }
        Ok(())
    }

    fn validate_link(&self, link: &ParentLink) -> Result<()> {
        let child = self.patient(&link.child)?;
        let gap = self.config.min_parent_age_gap;

        if let (Some(mother), Some(father)) = (link.mother(), link.father()) {
            if mother == father {
                return Err(AncestryError::invalid_relation(
                    &child.id,
                    format!("mother and father are the same patient '{mother}'"),
                ));
            }
        }

        for (parent_id, relationship) in link.parents() {
            let parent = self.patient(parent_id)?;

            if parent.id == child.id {
                return Err(AncestryError::invalid_relation(
                    &child.id,
                    format!("a patient cannot be their own {relationship}"),
                ));
            }

            // Adding parent -> child closes a cycle iff the parent is already
            // reachable from the child.
            if self.is_descendant(&child.id, parent_id) {
                return Err(AncestryError::invalid_relation(
                    &child.id,
                    format!("{relationship} '{parent_id}' is a descendant of the child"),
                ));
            }

            if !parent.can_parent(child, gap) {
                return Err(AncestryError::invalid_relation(
                    &child.id,
                    format!(
                        "{relationship} '{parent_id}' (age {}) must be more than {gap} years older than the child (age {})",
                        parent.age, child.age
                    ),
                ));
            }
        }

        Ok(())
    }

    fn apply_link(&mut self, link: ParentLink) {
        let child_id = link.child.clone();

        if let Some(previous) = self.parents.remove(&child_id) {
            for (parent_id, _) in previous.parents() {
                if let Some(children) = self.children.get_mut(parent_id) {
                    children.retain(|child| child != &child_id);
                    if children.is_empty() {
                        self.children.remove(parent_id);
                    }
                }
            }
        }

        if link.is_empty() {
            debug!("Cleared parents of {child_id}");
            return;
        }

        for (parent_id, _) in link.parents() {
            self.children
                .entry(parent_id.to_string())
                .or_default()
                .push(child_id.clone());
        }
        debug!("Linked {child_id} to {} parents", link.parents().len());
        self.parents.insert(child_id, link);
    }

    fn check_age_change(&self, patient: &Patient) -> Result<()> {
        let gap = self.config.min_parent_age_gap;

        if let Some(link) = self.parents.get(&patient.id) {
            for (parent_id, relationship) in link.parents() {
                let parent = self.patient(parent_id)?;
                if !parent.can_parent(patient, gap) {
                    return Err(AncestryError::invalid_relation(
                        &patient.id,
                        format!(
                            "age {} would leave {relationship} '{parent_id}' (age {}) no more than {gap} years older",
                            patient.age, parent.age
                        ),
                    ));
                }
            }
        }

        for child_id in self.child_ids(&patient.id) {
            let child = self.patient(child_id)?;
            if !patient.can_parent(child, gap) {
                return Err(AncestryError::invalid_relation(
                    child_id,
                    format!(
                        "age {} would leave parent '{}' no more than {gap} years older than the child (age {})",
                        patient.age, patient.id, child.age
                    ),
                ));
            }
        }

        Ok(())
    }

    // ---------------------------------------------------------------------
    // Lookups
    // ---------------------------------------------------------------------

    /// Get a patient by identifier
    pub fn patient(&self, id: &str) -> Result<&Patient> {
        self.patients
            .get(id)
            .ok_or_else(|| AncestryError::patient_not_found(id))
    }

    /// Get a disease by identifier
    pub fn disease(&self, id: &str) -> Result<&Disease> {
        self.diseases
            .get(id)
            .ok_or_else(|| AncestryError::disease_not_found(id))
    }

    /// All patients in insertion order
    pub fn all_patients(&self) -> impl Iterator<Item = &Patient> {
        self.patients.iter()
    }

    /// All diseases in insertion order
    pub fn all_diseases(&self) -> impl Iterator<Item = &Disease> {
        self.diseases.iter()
    }

    /// Number of patients
    #[must_use]
    pub fn patient_count(&self) -> usize {
        self.patients.count()
    }

    /// Number of diseases
    #[must_use]
    pub fn disease_count(&self) -> usize {
        self.diseases.count()
    }

    /// Disease identifiers carried by a patient, in assignment order
    pub fn diseases_of(&self, patient_id: &str) -> Result<&[String]> {
        self.patient(patient_id)?;
        Ok(self
            .patient_diseases
            .get(patient_id)
            .map_or(&[][..], Vec::as_slice))
    }

    /// Disease names carried by a patient, in assignment order
    pub fn disease_names_of(&self, patient_id: &str) -> Result<Vec<&str>> {
        self.diseases_of(patient_id)?
            .iter()
            .map(|disease_id| self.disease_name(disease_id))
            .collect()
    }

    /// Whether a patient carries a disease
    pub fn carries(&self, patient_id: &str, disease_id: &str) -> Result<bool> {
        Ok(self
            .diseases_of(patient_id)?
            .iter()
            .any(|carried| carried == disease_id))
    }

    /// The recorded parents of a patient
    pub fn parents_of(&self, patient_id: &str) -> Result<Parents<'_>> {
        self.patient(patient_id)?;
        Ok(self
            .parents
            .get(patient_id)
            .map_or_else(Parents::default, |link| Parents {
                mother: link.mother(),
                father: link.father(),
            }))
    }

    /// The recorded mother of a patient
    pub fn mother_of(&self, patient_id: &str) -> Result<Option<&str>> {
        Ok(self.parents_of(patient_id)?.mother)
    }

    /// The recorded father of a patient
    pub fn father_of(&self, patient_id: &str) -> Result<Option<&str>> {
        Ok(self.parents_of(patient_id)?.father)
    }

    /// The recorded children of a patient, in link order
    pub fn children_of(&self, patient_id: &str) -> Result<&[String]> {
        self.patient(patient_id)?;
        Ok(self.child_ids(patient_id))
    }

    /// Name of a patient
    pub fn name_of(&self, patient_id: &str) -> Result<&str> {
        Ok(&self.patient(patient_id)?.name)
    }

    /// Name of a patient, or `fallback` for unknown identifiers
    #[must_use]
    pub fn name_or<'a>(&'a self, patient_id: &str, fallback: &'a str) -> &'a str {
        self.patients
            .get(patient_id)
            .map_or(fallback, |patient| patient.name.as_str())
    }

    /// Name of a disease
    pub fn disease_name(&self, disease_id: &str) -> Result<&str> {
        Ok(&self.disease(disease_id)?.name)
    }

    /// Names of the recorded mother and father of a patient
    pub fn parent_names(&self, patient_id: &str) -> Result<(Option<&str>, Option<&str>)> {
        let parents = self.parents_of(patient_id)?;
        let name = |id: Option<&str>| id.map(|id| self.name_or(id, &self.config.unknown_name));
        Ok((name(parents.mother), name(parents.father)))
    }

    /// Patients that `set_parents` would accept as a parent of the child
    ///
    /// Excludes the child, its descendants and anyone not more than the
    /// configured gap older.
    pub fn eligible_parents(&self, child_id: &str) -> Result<Vec<&Patient>> {
        let child = self.patient(child_id)?;
        let descendants: rustc_hash::FxHashSet<&str> = self.descendants_of(child_id)?.collect();
        let gap = self.config.min_parent_age_gap;

        Ok(self
            .all_patients()
            .filter(|candidate| {
                candidate.id != child.id
                    && candidate.can_parent(child, gap)
                    && !descendants.contains(candidate.id.as_str())
            })
            .collect())
    }

    /// Parent links in child insertion order
    pub fn links(&self) -> impl Iterator<Item = &ParentLink> {
        self.patients
            .iter()
            .filter_map(|patient| self.parents.get(&patient.id))
    }

    // ---------------------------------------------------------------------
    // Graph access
    // ---------------------------------------------------------------------

    /// Lazily walk all descendants of a patient
    pub fn descendants_of<'a>(
        &'a self,
        patient_id: &str,
    ) -> Result<impl Iterator<Item = &'a str> + use<'a>> {
        Ok(self.lineage(patient_id, LineageDirection::Descendants)?.ids())
    }

    /// Lazily walk all ancestors of a patient
    pub fn ancestors_of<'a>(
        &'a self,
        patient_id: &str,
    ) -> Result<impl Iterator<Item = &'a str> + use<'a>> {
        Ok(self.lineage(patient_id, LineageDirection::Ancestors)?.ids())
    }

    /// Lazily walk relatives in one direction, with generation distances
    pub fn lineage(&self, patient_id: &str, direction: LineageDirection) -> Result<Lineage<'_>> {
        let patient = self.patient(patient_id)?;
        Ok(Lineage::new(self, &patient.id, direction))
    }

    /// Build the directed family graph over the current links
    #[must_use]
    pub fn family_graph(&self) -> FamilyGraph<'_> {
        FamilyGraph::build(self)
    }

    /// Check the whole link graph for cycles
    ///
    /// Mutations keep the graph acyclic; this is used after bulk loads.
    pub fn verify_acyclic(&self) -> Result<()> {
        let cycles = self.family_graph().find_cycles();
        match cycles.first() {
            None => Ok(()),
            Some(cycle) => Err(AncestryError::invalid_relation(
                cycle[0],
                format!("parent links form a cycle through {}", cycle.join(", ")),
            )),
        }
    }

    pub(crate) fn parent_ids(&self, patient_id: &str) -> SmallVec<[(&str, Relationship); 2]> {
        self.parents
            .get(patient_id)
            .map(ParentLink::parents)
            .unwrap_or_default()
    }

    pub(crate) fn child_ids(&self, patient_id: &str) -> &[String] {
        self.children
            .get(patient_id)
            .map_or(&[][..], SmallVec::as_slice)
    }

    fn is_descendant(&self, ancestor_id: &str, candidate_id: &str) -> bool {
        Lineage::new(self, ancestor_id, LineageDirection::Descendants)
            .any(|kin| kin.id == candidate_id)
    }
}
