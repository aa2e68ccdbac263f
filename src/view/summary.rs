//! Flat per-patient summary table.

use arrow::datatypes::{DataType, Field, Schema};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::common::traits::TabularRecord;
use crate::error::Result;
use crate::store::RecordStore;

/// One row of the patient summary table
///
/// Parent and disease columns are resolved to names next to their
/// identifiers; multiple diseases are comma separated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientSummary {
    #[serde(rename = "Patient_ID")]
    pub patient_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Is_Dead")]
    pub is_dead: bool,
    #[serde(rename = "Mother_ID")]
    pub mother_id: Option<String>,
    #[serde(rename = "Mother_name")]
    pub mother_name: Option<String>,
    #[serde(rename = "Father_ID")]
    pub father_id: Option<String>,
    #[serde(rename = "Father_name")]
    pub father_name: Option<String>,
    #[serde(rename = "Diseases")]
    pub diseases: String,
    #[serde(rename = "Diseases_names")]
    pub disease_names: String,
}

impl TabularRecord for PatientSummary {
    const TABLE: &'static str = "patient_summary";

    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("Patient_ID", DataType::Utf8, false),
            Field::new("Name", DataType::Utf8, false),
            Field::new("Age", DataType::UInt32, false),
            Field::new("Is_Dead", DataType::Boolean, false),
            Field::new("Mother_ID", DataType::Utf8, true),
            Field::new("Mother_name", DataType::Utf8, true),
            Field::new("Father_ID", DataType::Utf8, true),
            Field::new("Father_name", DataType::Utf8, true),
            Field::new("Diseases", DataType::Utf8, false),
            Field::new("Diseases_names", DataType::Utf8, false),
        ])
    }
}

/// Build the summary table, one row per patient in insertion order
pub fn summary_table(store: &RecordStore) -> Result<Vec<PatientSummary>> {
    store
        .all_patients()
        .map(|patient| {
            let parents = store.parents_of(&patient.id)?;
            let (mother_name, father_name) = store.parent_names(&patient.id)?;

            Ok(PatientSummary {
                patient_id: patient.id.clone(),
                name: patient.name.clone(),
                age: patient.age,
                is_dead: patient.is_dead,
                mother_id: parents.mother.map(str::to_string),
                mother_name: mother_name.map(str::to_string),
                father_id: parents.father.map(str::to_string),
                father_name: father_name.map(str::to_string),
                diseases: store.diseases_of(&patient.id)?.iter().join(", "),
                disease_names: store.disease_names_of(&patient.id)?.into_iter().join(", "),
            })
        })
        .collect()
}
