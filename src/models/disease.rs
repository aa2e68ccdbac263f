//! Disease representation

use arrow::datatypes::{DataType, Field, Schema};
use serde::{Deserialize, Serialize};

use crate::common::traits::{Record, TabularRecord};
use crate::error::{AncestryError, RecordKind, Result};

/// A disease that patients can carry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disease {
    /// Disease code
    #[serde(rename = "Disease_ID")]
    pub id: String,
    /// Display name
    #[serde(rename = "Disease_name")]
    pub name: String,
}

impl Disease {
    /// Create a new disease, validating code and name
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let disease = Self {
            id: id.into(),
            name: name.into(),
        };
        disease.validate()?;
        Ok(disease)
    }

    /// Check that code and name are present
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
                kind: RecordKind::Disease,
                message: messages.join("; "),
            })
        }
    }
}

impl Record for Disease {
    fn id(&self) -> &str {
        &self.id
    }
}

impl TabularRecord for Disease {
    const TABLE: &'static str = "disease";

    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("Disease_ID", DataType::Utf8, false),
            Field::new("Disease_name", DataType::Utf8, false),
        ])
    }
}
