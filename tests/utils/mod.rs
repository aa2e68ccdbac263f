//! Shared fixtures for the integration tests

use std::fs;
use std::path::Path;

use ancestree::{AncestryConfig, RecordStore};

/// Patients of the sample family, in insertion order
pub const PATIENTS: [(&str, &str, u32, bool); 9] = [
    ("G1", "Grandma", 80, true),
    ("G2", "Grandpa", 82, true),
    ("M", "Mother", 55, false),
    ("F", "Father", 57, false),
    ("A", "Aunt", 52, false),
    ("C", "Child", 30, false),
    ("S", "Spouse", 32, false),
    ("K", "Kid", 5, false),
    ("U", "Unrelated", 45, false),
];

/// Build the sample family
///
/// ```text
/// G1 ─┬─ G2        F
///     ├── M ───────┴── C ── S
///     └── A                 │
///                           K
/// ```
///
/// U has no relatives. Diseases: G1 {flu, asthma}, M {flu}, A {flu},
/// K {asthma}, U {diabetes}.
pub fn sample_store() -> RecordStore {
    let mut store = RecordStore::new(AncestryConfig::default());
    for (id, name, age, is_dead) in PATIENTS {
        store.upsert_patient(id, name, age, is_dead).unwrap();
    }
    store.upsert_disease("D1", "flu").unwrap();
    store.upsert_disease("D2", "asthma").unwrap();
    store.upsert_disease("D3", "diabetes").unwrap();

    store.set_parents("M", Some("G1"), Some("G2")).unwrap();
    store.set_parents("A", Some("G1"), Some("G2")).unwrap();
    store.set_parents("C", Some("M"), Some("F")).unwrap();
    store.set_parents("K", Some("C"), Some("S")).unwrap();

    store.set_diseases("G1", ["D1", "D2"]).unwrap();
    store.set_diseases("M", ["D1"]).unwrap();
    store.set_diseases("A", ["D1"]).unwrap();
    store.set_diseases("K", ["D2"]).unwrap();
    store.set_diseases("U", ["D3"]).unwrap();
    store
}

/// Write the four CSV tables into `dir`
pub fn write_csv_tables(dir: &Path, patients: &str, child: &str, disease: &str, patient_disease: &str) {
    fs::write(dir.join("patients.csv"), patients).unwrap();
    fs::write(dir.join("child.csv"), child).unwrap();
    fs::write(dir.join("disease.csv"), disease).unwrap();
    fs::write(dir.join("patient_disease.csv"), patient_disease).unwrap();
}
