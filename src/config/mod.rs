//! Configuration for the family tree store.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::error::util::safe_read_to_string;
use crate::risk::RiskRuleTable;

/// Minimum age difference between a parent and a child, in years
pub const DEFAULT_MIN_PARENT_AGE_GAP: u32 = 10;

/// Name shown for identifiers without a patient record
pub const DEFAULT_UNKNOWN_NAME: &str = "Unknown";

/// Configuration for a `RecordStore`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AncestryConfig {
    /// Minimum number of years a parent must be older than the child
    pub min_parent_age_gap: u32,
    /// Display name used when a node has no patient record
    pub unknown_name: String,
    /// Rules turning carrier counts into a risk verdict
    pub risk_rules: RiskRuleTable,
}

impl Default for AncestryConfig {
    fn default() -> Self {
        Self {
            min_parent_age_gap: DEFAULT_MIN_PARENT_AGE_GAP,
            unknown_name: DEFAULT_UNKNOWN_NAME.to_string(),
            risk_rules: RiskRuleTable::default(),
        }
    }
}

impl AncestryConfig {
    /// Read a configuration from a JSON file
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = safe_read_to_string(path, "reading configuration")?;
        Self::from_json_str(&content)
    }

    /// Parse a configuration from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Set the minimum parent age gap
    #[must_use]
    pub const fn with_min_parent_age_gap(mut self, gap: u32) -> Self {
        self.min_parent_age_gap = gap;
        self
    }
}

/// Locations of the four tables backing a store
///
/// The file extension selects the format: `.csv` or `.parquet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSources {
    /// Patient records
    pub patients: PathBuf,
    /// Child/mother/father records
    pub children: PathBuf,
    /// Disease records
    pub diseases: PathBuf,
    /// Patient-disease association records
    pub patient_diseases: PathBuf,
}

impl DataSources {
    /// The conventional CSV layout inside a data directory
    #[must_use]
    pub fn csv_in(dir: &Path) -> Self {
        Self::in_dir(dir, "csv")
    }

    /// The conventional Parquet layout inside a data directory
    #[must_use]
    pub fn parquet_in(dir: &Path) -> Self {
        Self::in_dir(dir, "parquet")
    }

    /// The Parquet layout when `patients.parquet` exists, otherwise CSV
    #[must_use]
    pub fn detect(dir: &Path) -> Self {
        if dir.join("patients.parquet").is_file() {
            Self::parquet_in(dir)
        } else {
            Self::csv_in(dir)
        }
    }

    fn in_dir(dir: &Path, extension: &str) -> Self {
        Self {
            patients: dir.join(format!("patients.{extension}")),
            children: dir.join(format!("child.{extension}")),
            diseases: dir.join(format!("disease.{extension}")),
            patient_diseases: dir.join(format!("patient_disease.{extension}")),
        }
    }
}
