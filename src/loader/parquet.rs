//! Parquet table files

use std::path::Path;

use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::Result;
use crate::error::util::{safe_create_file, safe_open_file};

/// Read a parquet file into Arrow record batches
pub fn read_batches(path: &Path) -> Result<Vec<RecordBatch>> {
    let file = safe_open_file(path, "reading parquet table")?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

    let batches = reader.collect::<std::result::Result<Vec<_>, ArrowError>>()?;
    Ok(batches)
}

/// Write a record batch to a parquet file
pub fn write_batch(path: &Path, batch: &RecordBatch) -> Result<()> {
    let file = safe_create_file(path, "writing parquet table")?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(batch)?;
    writer.close()?;
    Ok(())
}
