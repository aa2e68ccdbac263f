//! Parent-child links and patient-disease associations

use arrow::datatypes::{DataType, Field, Schema};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::common::traits::TabularRecord;

/// Kind of a parent → child edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    /// The parent is the child's mother
    Mother,
    /// The parent is the child's father
    Father,
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mother => write!(f, "mother"),
            Self::Father => write!(f, "father"),
        }
    }
}

/// The recorded parents of one child
///
/// One row of the `child` table. Empty identifiers are treated as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentLink {
    /// The child
    #[serde(rename = "Patient_ID")]
    pub child: String,
    /// The mother, if recorded
    #[serde(rename = "Mother_ID")]
    pub mother: Option<String>,
    /// The father, if recorded
    #[serde(rename = "Father_ID")]
    pub father: Option<String>,
}

impl ParentLink {
    /// Create a link, dropping blank parent identifiers
    #[must_use]
    pub fn new(child: impl Into<String>, mother: Option<&str>, father: Option<&str>) -> Self {
        Self {
            child: child.into(),
            mother: non_blank(mother),
            father: non_blank(father),
        }
    }

    /// Mother identifier, ignoring blanks
    #[must_use]
    pub fn mother(&self) -> Option<&str> {
        non_blank_ref(self.mother.as_deref())
    }

    /// Father identifier, ignoring blanks
    #[must_use]
    pub fn father(&self) -> Option<&str> {
        non_blank_ref(self.father.as_deref())
    }

    /// Whether neither parent is recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mother().is_none() && self.father().is_none()
    }

    /// Recorded parents with their relationship, mother first
    #[must_use]
    pub fn parents(&self) -> SmallVec<[(&str, Relationship); 2]> {
        let mut parents = SmallVec::new();
        if let Some(mother) = self.mother() {
            parents.push((mother, Relationship::Mother));
        }
        if let Some(father) = self.father() {
            parents.push((father, Relationship::Father));
        }
        parents
    }
}

fn non_blank(id: Option<&str>) -> Option<String> {
    non_blank_ref(id).map(str::to_string)
}

fn non_blank_ref(id: Option<&str>) -> Option<&str> {
    id.map(str::trim).filter(|id| !id.is_empty())
}

impl TabularRecord for ParentLink {
    const TABLE: &'static str = "child";

    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("Patient_ID", DataType::Utf8, false),
            Field::new("Mother_ID", DataType::Utf8, true),
            Field::new("Father_ID", DataType::Utf8, true),
        ])
    }
}

/// One patient-disease association
///
/// One row of the `patient_disease` table; a patient with several diseases
/// has several rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientDiseaseRow {
    /// The patient
    #[serde(rename = "Patient_ID")]
    pub patient_id: String,
    /// The disease carried
    #[serde(rename = "Disease_ID")]
    pub disease_id: String,
}

impl PatientDiseaseRow {
    #[must_use]
    pub fn new(patient_id: impl Into<String>, disease_id: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
            disease_id: disease_id.into(),
        }
    }
}

impl TabularRecord for PatientDiseaseRow {
    const TABLE: &'static str = "patient_disease";

    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("Patient_ID", DataType::Utf8, false),
            Field::new("Disease_ID", DataType::Utf8, false),
        ])
    }
}
