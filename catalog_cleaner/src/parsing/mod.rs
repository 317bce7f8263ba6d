//! Readers and writers for the catalog CSV format.
//!
//! # Example
//!
//! ```no_run
//! use catalog_cleaner::parsing::csv_parser::parse_catalog_csv;
//! use std::path::Path;
//!
//! let df = parse_catalog_csv(Path::new("netflix_titles.csv"))
//!     .expect("Failed to parse catalog");
//! println!("{} rows", df.height());
//! ```

pub mod csv_parser;

#[cfg(test)]
mod csv_parser_tests;

pub use csv_parser::{parse_catalog_csv, write_catalog_csv};
