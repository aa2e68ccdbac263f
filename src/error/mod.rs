//! Error handling for the family tree store.

pub mod util;

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Kind of record an identifier refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// A patient record
    Patient,
    /// A disease record
    Disease,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Patient => write!(f, "patient"),
            Self::Disease => write!(f, "disease"),
        }
    }
}

/// Specialized error type for store, graph and evaluator operations
#[derive(Debug, thiserror::Error)]
pub enum AncestryError {
    /// Lookup of an unknown patient or disease identifier
    #[error("Unknown {kind} '{id}'")]
    NotFound { kind: RecordKind, id: String },

    /// A proposed parent-child link breaks the age gap or acyclicity rules
    #[error("Invalid relation for '{child}': {reason}")]
    InvalidRelation { child: String, reason: String },

    /// A focused view has no relatives to show
    #[error("No family tree can be displayed for '{0}'")]
    EmptySubgraph(String),

    /// A record failed basic validation (missing id, missing name)
    #[error("Problem with {kind}: {message}")]
    InvalidRecord { kind: RecordKind, message: String },

    /// Error opening, reading or writing a table file
    #[error("IO error for {}: {context}", path.display())]
    Io {
        path: PathBuf,
        context: String,
        #[source]
        source: io::Error,
    },

    /// Error processing Arrow data (CSV reading/writing, batches)
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error processing Parquet data
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Error converting between record batches and typed rows
    #[error("Conversion error: {0}")]
    Conversion(String),

    /// Error reading a configuration file
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// Reload or save on a store that was not loaded from files
    #[error("No data sources configured, cannot {0}")]
    NoSources(&'static str),
}

impl AncestryError {
    /// Unknown patient identifier
    #[must_use]
    pub fn patient_not_found(id: &str) -> Self {
        Self::NotFound {
            kind: RecordKind::Patient,
            id: id.to_string(),
        }
    }

    /// Unknown disease identifier
    #[must_use]
    pub fn disease_not_found(id: &str) -> Self {
        Self::NotFound {
            kind: RecordKind::Disease,
            id: id.to_string(),
        }
    }

    /// Rejected parent-child link
    #[must_use]
    pub fn invalid_relation(child: &str, reason: impl Into<String>) -> Self {
        Self::InvalidRelation {
            child: child.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether this error is a `NotFound`
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether this error is an `InvalidRelation`
    #[must_use]
    pub const fn is_invalid_relation(&self) -> bool {
        matches!(self, Self::InvalidRelation { .. })
    }
}

impl From<serde_arrow::Error> for AncestryError {
    fn from(error: serde_arrow::Error) -> Self {
        Self::Conversion(error.to_string())
    }
}

/// Result type for store, graph and evaluator operations
pub type Result<T> = std::result::Result<T, AncestryError>;
