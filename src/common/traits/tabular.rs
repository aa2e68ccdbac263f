//! Conversion between typed rows and Arrow record batches.

use std::sync::Arc;

use arrow::datatypes::{FieldRef, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// A trait for rows of one of the flat tables backing a store.
///
/// `TabularRecord` ties a row type to its Arrow schema and converts whole
/// record batches to and from typed rows with `serde_arrow`. Column names
/// come from the serde field names, so the schema must use the same names.
pub trait TabularRecord: Serialize + DeserializeOwned + Sized {
    /// Human readable table name, used in logs and errors
    const TABLE: &'static str;

    /// Get the Arrow schema for this table
    fn schema() -> Schema;

    /// Get the schema as `Arc<Schema>`
    fn schema_ref() -> SchemaRef {
        Arc::new(Self::schema())
    }

    /// Convert a `RecordBatch` to a vector of rows
    fn from_record_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        Ok(serde_arrow::from_record_batch(batch)?)
    }

    /// Convert a slice of rows to a `RecordBatch`
    fn to_record_batch(rows: &[Self]) -> Result<RecordBatch> {
        // Use the predefined schema so empty tables still carry their columns
        let fields: Vec<FieldRef> = Self::schema().fields().iter().map(Arc::clone).collect();
        Ok(serde_arrow::to_record_batch(&fields, &rows)?)
    }
}
