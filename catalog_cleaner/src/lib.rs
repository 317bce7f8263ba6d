//! Catalog Cleaner - one-pass cleaning of a streaming catalog CSV export.
//!
//! Loads the dataset into a polars `DataFrame`, normalizes its header, fills
//! missing values from a fixed policy table, parses dates, title-cases the
//! text columns, drops duplicate rows and writes the cleaned CSV together with
//! a before/after summary report.

pub mod config;
pub mod core;
pub mod error;
pub mod parsing;
pub mod preprocessing;
pub mod time;
pub mod transformations;

pub use config::CleanerConfig;
pub use error::{CleanerError, CleanerResult};
pub use preprocessing::{clean, CleanOutputs, CleanPipeline};
