//! Shared traits for records, collections and tables.

pub mod traits;
