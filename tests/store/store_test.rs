//! Tests for record store mutations and lookups

use ancestree::{AncestryConfig, AncestryError, RecordKind, RecordStore};

use crate::utils::sample_store;

fn two_patients() -> RecordStore {
    let mut store = RecordStore::new(AncestryConfig::default());
    store.upsert_patient("P1", "Alice", 40, false).unwrap();
    store.upsert_patient("P2", "Bob", 70, false).unwrap();
    store
}

#[test]
fn test_parent_with_sufficient_gap_becomes_ancestor() {
    let mut store = two_patients();

    store.set_parents("P1", Some("P2"), None).unwrap();

    let ancestors: Vec<&str> = store.ancestors_of("P1").unwrap().collect();
    assert_eq!(ancestors, vec!["P2"]);
    assert_eq!(store.mother_of("P1").unwrap(), Some("P2"));
    assert_eq!(store.children_of("P2").unwrap(), ["P1".to_string()]);
}

#[test]
fn test_parent_exactly_gap_years_older_is_rejected() {
    let mut store = two_patients();
    store.upsert_patient("P3", "Carol", 50, false).unwrap();

    let err = store.set_parents("P1", None, Some("P3")).unwrap_err();
    assert!(err.is_invalid_relation(), "unexpected error: {err}");
    assert!(store.parents_of("P1").unwrap().is_empty());

    let eligible: Vec<&str> = store
        .eligible_parents("P1")
        .unwrap()
        .into_iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(eligible, vec!["P2"]);

    store.upsert_patient("P3", "Carol", 51, false).unwrap();
    assert!(store.set_parents("P1", None, Some("P3")).is_ok());
}

#[test]
fn test_too_young_parent_is_rejected() {
    let mut store = two_patients();
    store.upsert_patient("P3", "Carol", 49, false).unwrap();

    let err = store.set_parents("P1", Some("P3"), None).unwrap_err();
    assert!(err.is_invalid_relation(), "unexpected error: {err}");
    assert!(store.parents_of("P1").unwrap().is_empty());
}

#[test]
fn test_custom_age_gap() {
    let mut store = RecordStore::new(AncestryConfig::default().with_min_parent_age_gap(20));
    store.upsert_patient("kid", "Kid", 10, false).unwrap();
    store.upsert_patient("young", "Young", 25, false).unwrap();
    store.upsert_patient("old", "Old", 31, false).unwrap();

    assert!(store.set_parents("kid", Some("young"), None).unwrap_err().is_invalid_relation());
    assert!(store.set_parents("kid", Some("old"), None).is_ok());
}

#[test]
fn test_descendant_cannot_become_parent() {
    let mut store = RecordStore::new(AncestryConfig::default().with_min_parent_age_gap(0));
    for (id, age) in [("X", 60), ("Y", 50), ("Z", 40)] {
        store.upsert_patient(id, id, age, false).unwrap();
    }
    store.set_parents("Y", Some("X"), None).unwrap();
    store.set_parents("Z", Some("Y"), None).unwrap();

    let err = store.set_parents("X", Some("Z"), None).unwrap_err();
    assert!(err.is_invalid_relation());
    assert!(err.to_string().contains("descendant"), "unexpected error: {err}");
    let err = store.set_parents("X", None, Some("Y")).unwrap_err();
    assert!(err.to_string().contains("descendant"), "unexpected error: {err}");
    assert!(store.parents_of("X").unwrap().is_empty());
    assert!(store.verify_acyclic().is_ok());
}

#[test]
fn test_patient_cannot_be_own_parent() {
    let mut store = RecordStore::new(AncestryConfig::default().with_min_parent_age_gap(0));
    store.upsert_patient("X", "X", 40, false).unwrap();

    let err = store.set_parents("X", Some("X"), None).unwrap_err();
    assert!(err.is_invalid_relation());
}

#[test]
fn test_mother_and_father_must_differ() {
    let mut store = two_patients();

    let err = store.set_parents("P1", Some("P2"), Some("P2")).unwrap_err();
    assert!(err.is_invalid_relation());
}

#[test]
fn test_unknown_ids_are_not_found() {
    let mut store = two_patients();

    let err = store.set_parents("P1", Some("nobody"), None).unwrap_err();
    assert!(matches!(
        err,
        AncestryError::NotFound { kind: RecordKind::Patient, ref id } if id == "nobody"
    ));
    assert!(store.set_parents("ghost", Some("P2"), None).unwrap_err().is_not_found());
    assert!(store.patient("ghost").unwrap_err().is_not_found());
    assert!(store.disease("D9").unwrap_err().is_not_found());
    assert!(store.diseases_of("ghost").unwrap_err().is_not_found());
}

#[test]
fn test_set_parents_replaces_previous_link() {
    let mut store = sample_store();

    store.set_parents("C", Some("M"), None).unwrap();

    assert_eq!(store.father_of("C").unwrap(), None);
    assert!(store.children_of("F").unwrap().is_empty());
    assert_eq!(store.children_of("M").unwrap(), ["C".to_string()]);

    store.set_parents("C", None, None).unwrap();
    assert!(store.parents_of("C").unwrap().is_empty());
    assert!(store.children_of("M").unwrap().is_empty());
}

#[test]
fn test_failed_set_parents_leaves_link_unchanged() {
    let mut store = sample_store();

    assert!(store.set_parents("C", Some("K"), Some("F")).is_err());

    let parents = store.parents_of("C").unwrap();
    assert_eq!(parents.mother, Some("M"));
    assert_eq!(parents.father, Some("F"));
}

#[test]
fn test_set_diseases_replaces_the_set() {
    let mut store = sample_store();

    store.set_diseases("C", ["D1", "D2", "D1"]).unwrap();
    assert_eq!(store.diseases_of("C").unwrap(), ["D1".to_string(), "D2".to_string()]);
    assert_eq!(store.disease_names_of("C").unwrap(), vec!["flu", "asthma"]);

    store.set_diseases("C", ["D3"]).unwrap();
    assert_eq!(store.diseases_of("C").unwrap(), ["D3".to_string()]);
    assert!(store.carries("C", "D3").unwrap());
    assert!(!store.carries("C", "D1").unwrap());

    store.set_diseases("C", Vec::<String>::new()).unwrap();
    assert!(store.diseases_of("C").unwrap().is_empty());
}

#[test]
fn test_set_diseases_with_unknown_disease_changes_nothing() {
    let mut store = sample_store();

    let err = store.set_diseases("G1", ["D3", "D9"]).unwrap_err();
    assert!(matches!(err, AncestryError::NotFound { kind: RecordKind::Disease, .. }));
    assert_eq!(store.diseases_of("G1").unwrap(), ["D1".to_string(), "D2".to_string()]);
}

#[test]
fn test_invalid_records_report_every_problem() {
    let mut store = RecordStore::default();

    let err = store.upsert_patient("", " ", 30, false).unwrap_err();
    assert!(matches!(
        err,
        AncestryError::InvalidRecord { kind: RecordKind::Patient, ref message }
            if message == "Missing ID; Missing name"
    ));
    assert!(store.upsert_disease("D1", "").is_err());
    assert_eq!(store.patient_count(), 0);
    assert_eq!(store.disease_count(), 0);
}

#[test]
fn test_upsert_keeps_position_and_updates_fields() {
    let mut store = sample_store();

    store.upsert_patient("G2", "Grandfather", 83, true).unwrap();

    let ids: Vec<&str> = store.all_patients().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["G1", "G2", "M", "F", "A", "C", "S", "K", "U"]);
    assert_eq!(store.name_of("G2").unwrap(), "Grandfather");
    assert_eq!(store.patient("G2").unwrap().age, 83);
}

#[test]
fn test_age_change_breaking_a_link_is_rejected() {
    let mut store = sample_store();

    // M would be younger than C + 10
    let err = store.upsert_patient("M", "Mother", 35, false).unwrap_err();
    assert!(err.is_invalid_relation());
    assert_eq!(store.patient("M").unwrap().age, 55);

    // C would be too old for M
    let err = store.upsert_patient("C", "Child", 50, false).unwrap_err();
    assert!(err.is_invalid_relation());
    assert_eq!(store.patient("C").unwrap().age, 30);

    assert!(store.upsert_patient("C", "Child", 31, false).is_ok());
}

#[test]
fn test_names_and_fallbacks() {
    let store = sample_store();

    assert_eq!(store.parent_names("K").unwrap(), (Some("Child"), Some("Spouse")));
    assert_eq!(store.parent_names("G1").unwrap(), (None, None));
    assert_eq!(store.name_or("ghost", "Unknown"), "Unknown");
    assert_eq!(store.disease_name("D3").unwrap(), "diabetes");
}

#[test]
fn test_eligible_parents_exclude_descendants_and_young_patients() {
    let store = sample_store();

    let eligible: Vec<&str> = store
        .eligible_parents("C")
        .unwrap()
        .into_iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(eligible, vec!["G1", "G2", "M", "F", "A", "U"]);

    let mut relaxed = RecordStore::new(AncestryConfig::default().with_min_parent_age_gap(0));
    relaxed.upsert_patient("X", "X", 41, false).unwrap();
    relaxed.upsert_patient("Y", "Y", 40, false).unwrap();
    relaxed.set_parents("Y", Some("X"), None).unwrap();
    let eligible: Vec<&str> = relaxed
        .eligible_parents("X")
        .unwrap()
        .into_iter()
        .map(|p| p.id.as_str())
        .collect();
    assert!(eligible.is_empty());
}

#[test]
fn test_links_follow_child_insertion_order() {
    let store = sample_store();

    let children: Vec<&str> = store.links().map(|link| link.child.as_str()).collect();
    assert_eq!(children, vec!["M", "A", "C", "K"]);
}
