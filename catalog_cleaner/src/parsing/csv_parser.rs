use polars::prelude::*;
use std::fs::File;
use std::path::Path;

use crate::error::{CleanerError, CleanerResult};

/// Cell contents read as missing, on top of empty and whitespace-only cells.
pub const NA_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Whether a raw cell value stands for a missing value.
///
/// NA tokens must match exactly; only blank cells are judged after trimming.
pub fn is_missing_token(value: &str) -> bool {
    value.trim().is_empty() || NA_TOKENS.contains(&value)
}

/// Parse a catalog CSV file into a Polars DataFrame.
///
/// Every column is read as `String` so values survive untouched until the
/// cleaning steps decide what to do with them. Blank cells and NA tokens are
/// turned into nulls.
///
/// # Errors
/// * `CleanerError::Io` if the file is absent or unreadable
/// * `CleanerError::Parse` if the CSV is malformed
pub fn parse_catalog_csv(csv_path: &Path) -> CleanerResult<DataFrame> {
    let file = File::open(csv_path).map_err(|e| CleanerError::io(csv_path, e))?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(file)
        .finish()
        .map_err(|e| {
            CleanerError::Parse(format!("Failed to parse {}: {}", csv_path.display(), e))
        })?;

    log::debug!(
        "Read {} rows x {} columns from {}",
        df.height(),
        df.width(),
        csv_path.display()
    );

    standardize_missing(df)
}

/// Replace blank and NA-token cells of every string column with nulls.
pub fn standardize_missing(mut df: DataFrame) -> CleanerResult<DataFrame> {
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut replaced = 0usize;
    for name in &column_names {
        let column = df.column(name)?;
        if column.dtype() != &DataType::String {
            continue;
        }

        let values = column.str()?;
        let mut count = 0usize;
        let standardized: Vec<Option<&str>> = values
            .into_iter()
            .map(|value| match value {
                Some(v) if is_missing_token(v) => {
                    count += 1;
                    None
                }
                other => other,
            })
            .collect();

        if count > 0 {
            let series = Series::new(name.as_str().into(), standardized);
            df.with_column(series)?;
            replaced += count;
        }
    }

    if replaced > 0 {
        log::debug!("Standardized {} blank or NA cells to null", replaced);
    }

    Ok(df)
}

/// Write a DataFrame as CSV with a header row and no index column.
///
/// Nulls are written as empty fields and dates as `YYYY-MM-DD`.
pub fn write_catalog_csv(df: &mut DataFrame, csv_path: &Path) -> CleanerResult<()> {
    let mut file = File::create(csv_path).map_err(|e| CleanerError::io(csv_path, e))?;

    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)?;

    log::debug!("Wrote {} rows to {}", df.height(), csv_path.display());
    Ok(())
}
