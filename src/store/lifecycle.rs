//! Loading and saving a `RecordStore` through table files

use std::time::Instant;

use itertools::Itertools;
use log::info;

use super::RecordStore;
use crate::config::{AncestryConfig, DataSources};
use crate::error::{AncestryError, Result};
use crate::loader::{self, Tables};
use crate::models::PatientDiseaseRow;

impl RecordStore {
    /// Load a store from the four table files
    ///
    /// Rows go through the same validation as the mutation methods, so a
    /// bad row (unknown identifier, age gap, cycle) fails the whole load.
    pub fn load(sources: DataSources, config: AncestryConfig) -> Result<Self> {
        let start = Instant::now();
        let tables = loader::read_tables(&sources)?;

        let mut store = Self::from_tables(tables, config)?;
        store.sources = Some(sources);

        info!(
            "Loaded {} patients and {} diseases in {:?}",
            store.patient_count(),
            store.disease_count(),
            start.elapsed()
        );
        Ok(store)
    }

    /// Build a store from table rows already in memory
    pub fn from_tables(tables: Tables, config: AncestryConfig) -> Result<Self> {
        let mut store = Self::new(config);

        for patient in &tables.patients {
            store.upsert_patient(&patient.id, &patient.name, patient.age, patient.is_dead)?;
        }
        for disease in &tables.diseases {
            store.upsert_disease(&disease.id, &disease.name)?;
        }
        for link in &tables.links {
            store.set_parents(&link.child, link.mother(), link.father())?;
        }

        // Rows for the same patient accumulate in table order
        let assignments = tables
            .patient_diseases
            .iter()
            .map(|row| (row.patient_id.as_str(), row.disease_id.as_str()))
            .into_group_map();
        for (patient_id, disease_ids) in assignments {
            store.set_diseases(patient_id, disease_ids)?;
        }

        store.verify_acyclic()?;
        Ok(store)
    }

    /// Re-read the tables this store was loaded from
    ///
    /// The store is replaced only when the new load succeeds.
    pub fn reload(&mut self) -> Result<()> {
        let sources = self
            .sources
            .clone()
            .ok_or(AncestryError::NoSources("reload"))?;

        let fresh = Self::load(sources, self.config.clone())?;
        *self = fresh;
        Ok(())
    }

    /// Write the store back to its data sources
    pub fn save(&self) -> Result<()> {
        let sources = self
            .sources
            .as_ref()
            .ok_or(AncestryError::NoSources("save"))?;
        self.save_to(sources)
    }

    /// Write the store to the given table files
    pub fn save_to(&self, sources: &DataSources) -> Result<()> {
        let start = Instant::now();
        loader::write_tables(sources, &self.to_tables())?;
        info!("Saved store in {:?}", start.elapsed());
        Ok(())
    }

    /// Flatten the store into table rows, in insertion order
    #[must_use]
    pub fn to_tables(&self) -> Tables {
        let patient_diseases = self
            .all_patients()
            .flat_map(|patient| {
                self.patient_diseases
                    .get(&patient.id)
                    .into_iter()
                    .flatten()
                    .map(|disease_id| PatientDiseaseRow::new(&patient.id, disease_id))
            })
            .collect();

        Tables {
            patients: self.all_patients().cloned().collect(),
            links: self.links().cloned().collect(),
            diseases: self.all_diseases().cloned().collect(),
            patient_diseases,
        }
    }
}
