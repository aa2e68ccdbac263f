//! Tests for disease-risk assessment

use ancestree::risk::{HIGH_RISK, LOW_RISK};
use ancestree::{AncestryConfig, LineageDirection, RiskEvaluator, RiskRule, RiskRuleTable};

use crate::utils::sample_store;

#[test]
fn test_first_degree_carrier_is_high_risk() {
    let store = sample_store();

    let report = RiskEvaluator::new(&store).assess("C", "D1").unwrap();

    assert_eq!(report.disease_name, "flu");
    assert!(!report.patient_carries);
    assert_eq!(report.relatives_examined, 5);
    assert_eq!(report.first_degree_carriers, 1);
    assert_eq!(report.carrier_count(), 2);
    assert_eq!(report.carrier_list(), "M, G1");
    assert_eq!(report.carriers[1].generation, 2);
    assert_eq!(report.carriers[1].direction, LineageDirection::Ancestors);
    assert_eq!(report.verdict, HIGH_RISK);
}

#[test]
fn test_descendants_count_as_carriers() {
    let store = sample_store();

    let report = RiskEvaluator::new(&store).assess("C", "D2").unwrap();

    assert_eq!(report.carrier_list(), "G1, K");
    assert_eq!(report.carriers[1].direction, LineageDirection::Descendants);
    assert_eq!(report.first_degree_carriers, 1);
    assert_eq!(report.verdict, HIGH_RISK);
}

#[test]
fn test_distant_or_absent_carriers_are_low_risk() {
    let store = sample_store();
    let evaluator = RiskEvaluator::new(&store);

    let report = evaluator.assess("F", "D2").unwrap();
    assert_eq!(report.carrier_list(), "K");
    assert_eq!(report.first_degree_carriers, 0);
    assert_eq!(report.verdict, LOW_RISK);

    let report = evaluator.assess("C", "D3").unwrap();
    assert_eq!(report.carrier_count(), 0);
    assert_eq!(report.verdict, LOW_RISK);

    // Carrying the disease yourself does not change the verdict
    let report = evaluator.assess("U", "D3").unwrap();
    assert!(report.patient_carries);
    assert_eq!(report.relatives_examined, 0);
    assert_eq!(report.verdict, LOW_RISK);
}

#[test]
fn test_custom_rule_table() {
    let store = sample_store();
    let rules = RiskRuleTable::new(
        vec![
            RiskRule::new(1, 2, "Very high risk"),
            RiskRule::new(1, 1, "High risk"),
            RiskRule::new(2, 1, "Moderate risk"),
        ],
        "Low risk",
    );
    let evaluator = RiskEvaluator::with_rules(&store, &rules);

    assert_eq!(evaluator.assess("F", "D2").unwrap().verdict, "Moderate risk");
    assert_eq!(evaluator.assess("C", "D1").unwrap().verdict, "High risk");
    assert_eq!(evaluator.assess("A", "D3").unwrap().verdict, "Low risk");
}

#[test]
fn test_rules_from_config() {
    let config = AncestryConfig::from_json_str(
        r#"{"risk_rules": {"rules": [{"max_generation": 3, "min_carriers": 1, "verdict": "Watch"}], "fallback": "Clear"}}"#,
    )
    .unwrap();
    let mut store = ancestree::RecordStore::new(config);
    store.upsert_patient("old", "Old", 60, false).unwrap();
    store.upsert_patient("young", "Young", 20, false).unwrap();
    store.upsert_disease("D1", "flu").unwrap();
    store.set_parents("young", Some("old"), None).unwrap();
    store.set_diseases("old", ["D1"]).unwrap();

    let evaluator = RiskEvaluator::new(&store);
    assert_eq!(evaluator.assess("young", "D1").unwrap().verdict, "Watch");
    assert_eq!(evaluator.assess("old", "D1").unwrap().verdict, "Clear");
}

#[test]
fn test_unknown_ids_are_not_found() {
    let store = sample_store();
    let evaluator = RiskEvaluator::new(&store);

    assert!(evaluator.assess("ghost", "D1").unwrap_err().is_not_found());
    assert!(evaluator.assess("C", "D9").unwrap_err().is_not_found());
}
