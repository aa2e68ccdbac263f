//! Standardized record collections
//!
//! This module provides the generic collection implementation behind the
//! patient and disease tables. Records are kept in insertion order so that
//! listings are stable and the most recently added record is last.

use crate::common::traits::{Record, RecordCollection};
use rustc_hash::FxHashMap;

/// Generic record collection implementation
///
/// This collection provides a standard implementation of the `RecordCollection`
/// trait for any record type. It stores records in a `Vec` in insertion order
/// with an `FxHashMap` index from identifier to position.
#[derive(Debug, Clone)]
pub struct GenericCollection<T: Record> {
    /// Records in insertion order
    items: Vec<T>,
    /// Position of each record in `items`, by identifier
    index: FxHashMap<String, usize>,
}

impl<T: Record> GenericCollection<T> {
    /// Create a new empty collection
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Iterate over records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Record> Default for GenericCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> RecordCollection<T> for GenericCollection<T> {
    fn upsert(&mut self, record: T) -> Option<T> {
        if let Some(&position) = self.index.get(record.id()) {
            // Replace in place
            Some(std::mem::replace(&mut self.items[position], record))
        } else {
            self.index.insert(record.id().to_string(), self.items.len());
            self.items.push(record);
            None
        }
    }

    fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&position| &self.items[position])
    }

    fn count(&self) -> usize {
        self.items.len()
    }
}
