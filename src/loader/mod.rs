//! Table file loading utilities
//!
//! Reads and writes the four flat tables backing a `RecordStore`. Files
//! are read into Arrow record batches, projected onto the table's declared
//! schema by column name, and converted to typed rows with `serde_arrow`.

pub mod csv;
pub mod parquet;

use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use arrow::array::ArrayRef;
use arrow::compute::cast;
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use log::info;

use crate::common::traits::TabularRecord;
use crate::config::DataSources;
use crate::error::{AncestryError, Result};
use crate::models::{Disease, ParentLink, Patient, PatientDiseaseRow};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

/// On-disk format of a table file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Comma separated values with a header row
    Csv,
    /// Apache Parquet
    Parquet,
}

impl TableFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("csv") => Ok(Self::Csv),
            Some("parquet") => Ok(Self::Parquet),
            _ => Err(AncestryError::Io {
                path: path.to_path_buf(),
                context: "Unsupported table format, expected .csv or .parquet".to_string(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "unsupported extension"),
            }),
        }
    }
}

/// The rows of all four tables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tables {
    /// Patient rows
    pub patients: Vec<Patient>,
    /// Child/mother/father rows
    pub links: Vec<ParentLink>,
    /// Disease rows
    pub diseases: Vec<Disease>,
    /// Patient-disease rows
    pub patient_diseases: Vec<PatientDiseaseRow>,
}

/// Read a table file into typed rows
pub fn read_table<T: TabularRecord>(path: &Path) -> Result<Vec<T>> {
    let start = Instant::now();
    log_operation_start(&format!("Reading {} table from", T::TABLE), path);

    let schema = T::schema_ref();
    let batches = match TableFormat::from_path(path)? {
        TableFormat::Csv => csv::read_batches(path, &schema)?,
        TableFormat::Parquet => parquet::read_batches(path)?,
    };

    let mut rows = Vec::new();
    for batch in &batches {
        let batch = project_to_schema(batch, &schema, T::TABLE)?;
        rows.extend(T::from_record_batch(&batch)?);
    }

    if rows.is_empty() {
        log_warning(&format!("The {} table has no rows", T::TABLE), Some(path));
    }
    log_operation_complete("read", path, rows.len(), Some(start.elapsed()));
    Ok(rows)
}

/// Write typed rows to a table file, replacing it
pub fn write_table<T: TabularRecord>(path: &Path, rows: &[T]) -> Result<()> {
    let start = Instant::now();
    log_operation_start(&format!("Writing {} table to", T::TABLE), path);

    let batch = T::to_record_batch(rows)?;
    match TableFormat::from_path(path)? {
        TableFormat::Csv => csv::write_batch(path, &batch)?,
        TableFormat::Parquet => parquet::write_batch(path, &batch)?,
    }

    log_operation_complete("wrote", path, rows.len(), Some(start.elapsed()));
    Ok(())
}

/// Read all four tables
pub fn read_tables(sources: &DataSources) -> Result<Tables> {
    let tables = Tables {
        patients: read_table(&sources.patients)?,
        links: read_table(&sources.children)?,
        diseases: read_table(&sources.diseases)?,
        patient_diseases: read_table(&sources.patient_diseases)?,
    };
    info!(
        "Read {} patients, {} parent links, {} diseases and {} patient-disease rows",
        tables.patients.len(),
        tables.links.len(),
        tables.diseases.len(),
        tables.patient_diseases.len()
    );
    Ok(tables)
}

/// Write all four tables
pub fn write_tables(sources: &DataSources, tables: &Tables) -> Result<()> {
    write_table(&sources.patients, &tables.patients)?;
    write_table(&sources.children, &tables.links)?;
    write_table(&sources.diseases, &tables.diseases)?;
    write_table(&sources.patient_diseases, &tables.patient_diseases)?;
    Ok(())
}

/// Select the declared columns of a batch by name, casting where needed
///
/// Extra columns are dropped; a missing column is a conversion error
/// naming the table. Nulls in non-nullable columns are rejected.
pub(crate) fn project_to_schema(
    batch: &RecordBatch,
    schema: &SchemaRef,
    table: &str,
) -> Result<RecordBatch> {
    let batch_schema = batch.schema();

    let columns = schema
        .fields()
        .iter()
        .map(|field| {
            let idx = batch_schema.index_of(field.name()).map_err(|_| {
                AncestryError::Conversion(format!(
                    "Column '{}' not found in {table} table",
                    field.name()
                ))
            })?;
            let column = batch.column(idx);
            if column.data_type() == field.data_type() {
                Ok(Arc::clone(column))
            } else {
                log::debug!(
                    "Converting column '{}' from {:?} to {:?}",
                    field.name(),
                    column.data_type(),
                    field.data_type()
                );
                Ok(cast(column, field.data_type())?)
            }
        })
        .collect::<Result<Vec<ArrayRef>>>()?;

    RecordBatch::try_new(Arc::clone(schema), columns).map_err(|e| {
        AncestryError::Conversion(format!("Invalid rows in {table} table: {e}"))
    })
}
