//! Domain model for the streaming catalog dataset.
//!
//! This module names the columns the cleaner works on, holds the
//! missing-value policy table, and defines the before/after snapshots that
//! end up in the summary report.

use polars::prelude::*;
use serde::{Deserialize, Serialize};

pub const TYPE: &str = "type";
pub const TITLE: &str = "title";
pub const DIRECTOR: &str = "director";
pub const CAST: &str = "cast";
pub const COUNTRY: &str = "country";
pub const DATE_ADDED: &str = "date_added";
pub const RATING: &str = "rating";
pub const DURATION: &str = "duration";

/// Columns that must be present once the header has been normalized.
pub const EXPECTED_COLUMNS: [&str; 8] = [
    TYPE, TITLE, DIRECTOR, CAST, COUNTRY, DATE_ADDED, RATING, DURATION,
];

/// Columns that are trimmed and title-cased.
pub const TITLE_CASE_COLUMNS: [&str; 3] = [TYPE, TITLE, COUNTRY];

/// What to do with the missing values of one column.
///
/// # Examples
///
/// ```
/// use catalog_cleaner::core::domain::{fill_action_for, FillAction};
///
/// assert_eq!(fill_action_for("cast"), Some(FillAction::Literal("Not Available")));
/// assert_eq!(fill_action_for("date_added"), Some(FillAction::ParseDate));
/// assert_eq!(fill_action_for("description"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillAction {
    /// Replace every null with this literal.
    Literal(&'static str),
    /// Coerce the column to a date; unparseable values become null.
    ParseDate,
}

/// Missing-value policy table, applied in order.
pub const FILL_POLICY: [(&str, FillAction); 6] = [
    (DIRECTOR, FillAction::Literal("Unknown")),
    (CAST, FillAction::Literal("Not Available")),
    (COUNTRY, FillAction::Literal("Unknown")),
    (RATING, FillAction::Literal("Not Rated")),
    (DURATION, FillAction::Literal("Unknown")),
    (DATE_ADDED, FillAction::ParseDate),
];

/// Looks up the policy for a (normalized) column name.
pub fn fill_action_for(column: &str) -> Option<FillAction> {
    FILL_POLICY
        .iter()
        .find(|(name, _)| *name == column)
        .map(|(_, action)| *action)
}

/// Iterates the literal fills of the policy table.
pub fn literal_fills() -> impl Iterator<Item = (&'static str, &'static str)> {
    FILL_POLICY.iter().filter_map(|(name, action)| match action {
        FillAction::Literal(value) => Some((*name, *value)),
        FillAction::ParseDate => None,
    })
}

/// Null count of a single column at snapshot time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnNulls {
    pub column: String,
    pub nulls: usize,
}

/// Shape and per-column null counts of the dataset at one point of the run.
///
/// Snapshots are plain values: once captured they never look at the
/// `DataFrame` again, so later mutations do not leak into the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSnapshot {
    pub rows: usize,
    pub columns: usize,
    pub null_counts: Vec<ColumnNulls>,
}

impl DatasetSnapshot {
    /// Captures the current shape and null counts of `df`, in column order.
    pub fn capture(df: &DataFrame) -> Self {
        let (rows, columns) = df.shape();
        let null_counts = df
            .get_columns()
            .iter()
            .map(|column| ColumnNulls {
                column: column.name().to_string(),
                nulls: column.null_count(),
            })
            .collect();

        Self {
            rows,
            columns,
            null_counts,
        }
    }

    /// Total number of null cells across all columns.
    pub fn total_nulls(&self) -> usize {
        self.null_counts.iter().map(|c| c.nulls).sum()
    }

    /// Null count for one column, if the column existed at capture time.
    pub fn nulls_in(&self, column: &str) -> Option<usize> {
        self.null_counts
            .iter()
            .find(|c| c.column == column)
            .map(|c| c.nulls)
    }

    /// Shape rendered the way the report prints it: `(rows, cols)`.
    pub fn shape_label(&self) -> String {
        format!("({}, {})", self.rows, self.columns)
    }
}
