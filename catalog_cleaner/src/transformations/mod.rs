//! Column-level cleaning operations for the catalog DataFrame.
//!
//! # Modules
//!
//! - [`cleaning`]: Rename columns, check the schema, fill missing values,
//!   coerce dates, title-case text columns and drop duplicate rows
//! - [`text`]: Title-casing of a single string
//!
//! # Example
//!
//! ```no_run
//! use catalog_cleaner::transformations::{fill_missing, remove_duplicates};
//! use polars::prelude::*;
//!
//! # fn example(df: DataFrame) -> catalog_cleaner::error::CleanerResult<()> {
//! let filled = fill_missing(df)?;
//! let unique = remove_duplicates(filled)?;
//! # Ok(())
//! # }
//! ```

pub mod cleaning;
pub mod text;

pub use cleaning::{
    fill_missing, missing_columns, normalize_column_name, normalize_column_names,
    parse_date_column, remove_duplicates, title_case_columns, validate_schema,
};
pub use text::title_case;
