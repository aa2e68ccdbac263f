//! Standardized collection traits
//!
//! This module defines traits for collections of keyed records, providing
//! a unified interface for the patient and disease tables.

/// A trait that all stored records implement.
///
/// Every record is addressed by a stable, unique string identifier.
pub trait Record: Clone + Send + Sync + std::fmt::Debug {
    /// Get the unique identifier for this record
    fn id(&self) -> &str;
}

/// Core trait for record collections
///
/// This trait provides the fundamental operations that all record collections
/// should support: upserting, lookup by identifier and counting.
pub trait RecordCollection<T: Record>: Send + Sync + std::fmt::Debug {
    /// Insert a record, replacing any record with the same identifier
    ///
    /// Returns the replaced record, if there was one.
    fn upsert(&mut self, record: T) -> Option<T>;

    /// Get a record by its identifier
    fn get(&self, id: &str) -> Option<&T>;

    /// Count the total number of records in the collection
    fn count(&self) -> usize;
}
