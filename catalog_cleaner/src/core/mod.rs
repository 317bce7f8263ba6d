//! Core domain model for the catalog dataset.
//!
//! Column names, the missing-value policy table and the shape/null-count
//! snapshots taken before and after cleaning.

pub mod domain;

pub use domain::{ColumnNulls, DatasetSnapshot, FillAction, EXPECTED_COLUMNS, FILL_POLICY};
