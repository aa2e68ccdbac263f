//! Tests for reading and writing individual tables

use std::fs;

use ancestree::common::traits::TabularRecord;
use ancestree::{AncestryError, Patient, PatientSummary, read_table, summary_table, write_table};
use tempfile::TempDir;

use crate::utils::sample_store;

#[test]
fn test_patients_round_trip_through_parquet() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("patients.parquet");
    let patients = vec![
        Patient::new("P1", "Alice", 40, false).unwrap(),
        Patient::new("P2", "Bob", 70, true).unwrap(),
    ];

    write_table(&path, &patients).unwrap();

    assert_eq!(read_table::<Patient>(&path).unwrap(), patients);
}

#[test]
fn test_summary_table_written_as_parquet() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("summary.parquet");
    let rows = summary_table(&sample_store()).unwrap();

    write_table(&path, &rows).unwrap();

    assert_eq!(read_table::<PatientSummary>(&path).unwrap(), rows);
}

#[test]
fn test_summary_table_written_as_csv() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("summary.csv");
    let rows = summary_table(&sample_store()).unwrap();

    write_table(&path, &rows).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let header = content.lines().next().unwrap();
    assert_eq!(
        header,
        "Patient_ID,Name,Age,Is_Dead,Mother_ID,Mother_name,Father_ID,Father_name,Diseases,Diseases_names"
    );
    assert_eq!(content.lines().count(), rows.len() + 1);
}

#[test]
fn test_batch_conversion_uses_declared_columns() {
    let batch = Patient::to_record_batch(&[]).unwrap();

    assert_eq!(batch.num_rows(), 0);
    let names: Vec<String> = batch.schema().fields().iter().map(|f| f.name().clone()).collect();
    assert_eq!(names, vec!["Patient_ID", "Name", "Age", "Is_Dead"]);
}

#[test]
fn test_missing_column_is_a_conversion_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("patients.csv");
    fs::write(&path, "Patient_ID,Name,Is_Dead\nP1,Alice,false\n").unwrap();

    let err = read_table::<Patient>(&path).unwrap_err();
    assert!(matches!(err, AncestryError::Conversion(ref message) if message.contains("Age")));
}

#[test]
fn test_empty_required_cell_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("patients.csv");
    fs::write(&path, "Patient_ID,Name,Age,Is_Dead\nP1,,40,false\n").unwrap();

    assert!(read_table::<Patient>(&path).is_err());
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("patients.xlsx");

    let err = write_table::<Patient>(&path, &[]).unwrap_err();
    assert!(matches!(err, AncestryError::Io { .. }));
    assert!(!path.exists());
}
