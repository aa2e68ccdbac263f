//! Hereditary risk and disease highlighting
//!
//! Both modes are pure reads of a `RecordStore`:
//!
//! - disease-risk mode walks the ancestors and descendants of one patient
//!   and turns the relatives carrying a disease into a verdict using a
//!   [`RiskRuleTable`];
//! - highlight mode classifies every patient against a set of diseases
//!   with [`HighlightMode::Any`] or [`HighlightMode::All`].

pub mod highlight;
pub mod rules;

pub use highlight::{HighlightMatch, HighlightMode};
pub use rules::{HIGH_RISK, LOW_RISK, RiskRule, RiskRuleTable};

use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::LineageDirection;
use crate::store::RecordStore;

/// A relative carrying the assessed disease
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierRelative {
    /// The relative
    pub id: String,
    /// Links between the patient and the relative (1 = first degree)
    pub generation: u32,
    /// Whether the relative is an ancestor or a descendant
    pub direction: LineageDirection,
}

/// Outcome of a disease-risk assessment for one patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskReport {
    /// The assessed patient
    pub patient_id: String,
    /// The assessed disease
    pub disease_id: String,
    /// Display name of the disease
    pub disease_name: String,
    /// Whether the patient carries the disease themselves
    pub patient_carries: bool,
    /// Number of ancestors and descendants examined
    pub relatives_examined: usize,
    /// Number of parents and children carrying the disease
    pub first_degree_carriers: usize,
    /// Every carrier relative, ancestors first, nearest first
    pub carriers: Vec<CarrierRelative>,
    /// Verdict from the rule table
    pub verdict: String,
}

impl RiskReport {
    /// Number of carrier relatives
    #[must_use]
    pub fn carrier_count(&self) -> usize {
        self.carriers.len()
    }

    /// Carrier identifiers as a comma separated list
    #[must_use]
    pub fn carrier_list(&self) -> String {
        self.carriers.iter().map(|carrier| carrier.id.as_str()).join(", ")
    }
}

/// Evaluates risk and highlighting against a store
#[derive(Debug, Clone, Copy)]
pub struct RiskEvaluator<'a> {
    store: &'a RecordStore,
    rules: &'a RiskRuleTable,
}

impl<'a> RiskEvaluator<'a> {
    /// Evaluator using the store's configured rule table
    #[must_use]
    pub fn new(store: &'a RecordStore) -> Self {
        Self {
            store,
            rules: &store.config().risk_rules,
        }
    }

    /// Evaluator using a different rule table
    #[must_use]
    pub const fn with_rules(store: &'a RecordStore, rules: &'a RiskRuleTable) -> Self {
        Self { store, rules }
    }

    /// Assess the hereditary risk of `disease_id` for `patient_id`
    pub fn assess(&self, patient_id: &str, disease_id: &str) -> Result<RiskReport> {
        let disease = self.store.disease(disease_id)?;
        let patient_carries = self.store.carries(patient_id, disease_id)?;

        let mut relatives_examined = 0;
        let mut carriers = Vec::new();
        for direction in [LineageDirection::Ancestors, LineageDirection::Descendants] {
            for kin in self.store.lineage(patient_id, direction)? {
                relatives_examined += 1;
                if self.store.carries(kin.id, disease_id)? {
                    carriers.push(CarrierRelative {
                        id: kin.id.to_string(),
                        generation: kin.generation,
                        direction,
                    });
                }
            }
        }

        let first_degree_carriers = carriers
            .iter()
            .filter(|carrier| carrier.generation == 1)
            .count();
        let verdict = self.rules.verdict(&carriers).to_string();

        debug!(
            "Risk of {disease_id} for {patient_id}: {} of {relatives_examined} relatives carry it, {verdict}",
            carriers.len()
        );

        Ok(RiskReport {
            patient_id: patient_id.to_string(),
            disease_id: disease_id.to_string(),
            disease_name: disease.name.clone(),
            patient_carries,
            relatives_examined,
            first_degree_carriers,
            carriers,
            verdict,
        })
    }

    /// Classify every patient against a set of diseases
    ///
    /// Patients are returned in insertion order. Unknown disease
    /// identifiers fail with `NotFound`.
    pub fn highlight<S: AsRef<str>>(&self, diseases: &[S], mode: HighlightMode) -> Result<Vec<HighlightMatch>> {
        for disease_id in diseases {
            self.store.disease(disease_id.as_ref())?;
        }

        self.store
            .all_patients()
            .map(|patient| {
                let carried = self.store.diseases_of(&patient.id)?;
                Ok(HighlightMatch {
                    patient_id: patient.id.clone(),
                    matched: mode.matches(carried, diseases),
                })
            })
            .collect()
    }

    /// Identifiers of the patients matching a set of diseases
    pub fn matching_patients<S: AsRef<str>>(&self, diseases: &[S], mode: HighlightMode) -> Result<Vec<String>> {
        Ok(self
            .highlight(diseases, mode)?
            .into_iter()
            .filter(|highlight| highlight.matched)
            .map(|highlight| highlight.patient_id)
            .collect())
    }
}
