//! CSV table files

use std::path::Path;
use std::sync::Arc;

use arrow::csv::reader::Format;
use arrow::csv::{ReaderBuilder, WriterBuilder};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;

use crate::error::Result;
use crate::error::util::{safe_create_file, safe_open_file};

/// Read a CSV file with a header row into record batches
///
/// Columns are matched to `declared` by header name, so the file may order
/// them freely and carry extra columns (read as strings). Every column is
/// read as nullable; empty cells become nulls.
pub fn read_batches(path: &Path, declared: &SchemaRef) -> Result<Vec<RecordBatch>> {
    let header_file = safe_open_file(path, "reading csv header")?;
    let (header, _) = Format::default()
        .with_header(true)
        .infer_schema(header_file, Some(0))?;

    let fields: Vec<Field> = header
        .fields()
        .iter()
        .map(|column| {
            let data_type = declared
                .field_with_name(column.name())
                .map_or(DataType::Utf8, |field| field.data_type().clone());
            Field::new(column.name(), data_type, true)
        })
        .collect();
    let file_schema = Arc::new(Schema::new(fields));

    let file = safe_open_file(path, "reading csv table")?;
    let reader = ReaderBuilder::new(file_schema)
        .with_header(true)
        .build(file)?;

    let batches = reader.collect::<std::result::Result<Vec<_>, ArrowError>>()?;
    Ok(batches)
}

/// Write a record batch to a CSV file with a header row
pub fn write_batch(path: &Path, batch: &RecordBatch) -> Result<()> {
    let file = safe_create_file(path, "writing csv table")?;
    let mut writer = WriterBuilder::new().with_header(true).build(file);
    writer.write(batch)?;
    Ok(())
}
