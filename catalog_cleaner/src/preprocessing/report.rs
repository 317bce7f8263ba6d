//! Plain-text before/after summary of a cleaning run.

use std::fs;
use std::path::Path;

use crate::core::domain::{ColumnNulls, DatasetSnapshot};
use crate::error::{CleanerError, CleanerResult};

/// Render per-column null counts as an aligned two-column listing.
///
/// Names are left-aligned to the widest name and counts right-aligned to the
/// widest count, separated by four spaces. Lines are joined with `\n` and the
/// listing has no trailing newline.
///
/// # Examples
///
/// ```
/// use catalog_cleaner::core::domain::ColumnNulls;
/// use catalog_cleaner::preprocessing::report::format_null_counts;
///
/// let counts = vec![
///     ColumnNulls { column: "type".into(), nulls: 0 },
///     ColumnNulls { column: "director".into(), nulls: 2634 },
/// ];
/// assert_eq!(format_null_counts(&counts), "type           0\ndirector    2634");
/// ```
pub fn format_null_counts(counts: &[ColumnNulls]) -> String {
    let name_width = counts.iter().map(|c| c.column.chars().count()).max().unwrap_or(0);
    let value_width = counts
        .iter()
        .map(|c| c.nulls.to_string().len())
        .max()
        .unwrap_or(0);

    counts
        .iter()
        .map(|c| {
            format!(
                "{:<name_width$}    {:>value_width$}",
                c.column,
                c.nulls,
                name_width = name_width,
                value_width = value_width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Summary of one cleaning run: the snapshot before and after cleaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleaningSummary {
    pub initial: DatasetSnapshot,
    pub cleaned: DatasetSnapshot,
}

impl CleaningSummary {
    pub fn new(initial: DatasetSnapshot, cleaned: DatasetSnapshot) -> Self {
        Self { initial, cleaned }
    }

    /// Rows dropped as duplicates.
    pub fn rows_removed(&self) -> usize {
        self.initial.rows.saturating_sub(self.cleaned.rows)
    }

    /// Render the full report text.
    pub fn render(&self) -> String {
        format!(
            "Initial Shape: {}\nInitial Missing Values:\n{}\n\nCleaned Shape: {}\nRemaining Missing Values:\n{}",
            self.initial.shape_label(),
            format_null_counts(&self.initial.null_counts),
            self.cleaned.shape_label(),
            format_null_counts(&self.cleaned.null_counts),
        )
    }

    /// Write the rendered report to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> CleanerResult<()> {
        fs::write(path, self.render()).map_err(|e| CleanerError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn nulls(column: &str, nulls: usize) -> ColumnNulls {
        ColumnNulls {
            column: column.to_string(),
            nulls,
        }
    }

    fn summary() -> CleaningSummary {
        CleaningSummary::new(
            DatasetSnapshot {
                rows: 3,
                columns: 2,
                null_counts: vec![nulls("Title", 0), nulls("Director", 12)],
            },
            DatasetSnapshot {
                rows: 2,
                columns: 2,
                null_counts: vec![nulls("title", 0), nulls("director", 0)],
            },
        )
    }

    #[test]
    fn test_format_null_counts_alignment() {
        let listing = format_null_counts(&[nulls("a", 5), nulls("longer", 120)]);
        assert_eq!(listing, "a           5\nlonger    120");
    }

    #[test]
    fn test_format_empty_listing() {
        assert_eq!(format_null_counts(&[]), "");
    }

    #[test]
    fn test_render_layout() {
        let expected = "Initial Shape: (3, 2)\n\
                        Initial Missing Values:\n\
                        Title        0\n\
                        Director    12\n\
                        \n\
                        Cleaned Shape: (2, 2)\n\
                        Remaining Missing Values:\n\
                        title       0\n\
                        director    0";
        assert_eq!(summary().render(), expected);
    }

    #[test]
    fn test_rows_removed() {
        assert_eq!(summary().rows_removed(), 1);
    }

    #[test]
    fn test_write_to() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("summary.txt");
        summary().write_to(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), summary().render());
    }
}
