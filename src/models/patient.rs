//! Patient representation
//!
//! A patient is a person in the family tree. Patients are created and
//! updated by upsert and are never removed.

use arrow::datatypes::{DataType, Field, Schema};
use serde::{Deserialize, Serialize};

use crate::common::traits::{Record, TabularRecord};
use crate::error::{AncestryError, RecordKind, Result};

/// A person in the family tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Stable unique identifier (e.g. NHS number)
    #[serde(rename = "Patient_ID")]
    pub id: String,
    /// Display name
    #[serde(rename = "Name")]
    pub name: String,
    /// Age in whole years; the age at death for dead patients
    #[serde(rename = "Age")]
    pub age: u32,
    /// Whether the patient has died
    #[serde(rename = "Is_Dead")]
    pub is_dead: bool,
}

impl Patient {
    /// Create a new patient, validating identifier and name
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: u32, is_dead: bool) -> Result<Self> {
        let patient = Self {
            id: id.into(),
            name: name.into(),
            age,
            is_dead,
        };
        patient.validate()?;
        Ok(patient)
    }

    /// Check that identifier and name are present
    ///
    /// All problems are reported at once, separated by `"; "`.
    pub fn validate(&self) -> Result<()> {
        let mut messages = Vec::new();
        if self.id.trim().is_empty() {
            messages.push("Missing ID");
        }
        if self.name.trim().is_empty() {
            messages.push("Missing name");
        }

        if messages.is_empty() {
            Ok(())
        } else {
            Err(AncestryError::InvalidRecord {
                kind: RecordKind::Patient,
                message: messages.join("; "),
            })
        }
    }

    /// Whether the patient is alive
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        !self.is_dead
    }

    /// Whether this patient is old enough to be a parent of `child`
    ///
    /// The parent must be strictly more than `min_gap` years older.
    #[must_use]
    pub const fn can_parent(&self, child: &Self, min_gap: u32) -> bool {
        self.age > child.age.saturating_add(min_gap)
    }
}

impl Record for Patient {
    fn id(&self) -> &str {
        &self.id
    }
}

impl TabularRecord for Patient {
    const TABLE: &'static str = "patients";

    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("Patient_ID", DataType::Utf8, false),
            Field::new("Name", DataType::Utf8, false),
            Field::new("Age", DataType::UInt32, false),
            Field::new("Is_Dead", DataType::Boolean, false),
        ])
    }
}
