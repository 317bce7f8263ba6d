use polars::prelude::*;
use std::collections::HashSet;

use crate::core::domain;
use crate::error::{CleanerError, CleanerResult};
use crate::time::{date_to_epoch_days, parse_date};
use crate::transformations::text::title_case;

/// Normalize one header name: trim, lowercase, spaces to underscores.
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Rename every column of `df` to its normalized form.
///
/// Fails with `CleanerError::Schema` when two headers collapse onto the
/// same normalized name.
pub fn normalize_column_names(df: &mut DataFrame) -> CleanerResult<()> {
    let normalized: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| normalize_column_name(name.as_str()))
        .collect();

    let mut seen = HashSet::new();
    for name in &normalized {
        if !seen.insert(name.as_str()) {
            return Err(CleanerError::Schema(format!(
                "Duplicate column after normalization: {}",
                name
            )));
        }
    }

    df.set_column_names(normalized)?;
    Ok(())
}

/// Names from `required` that are not columns of `df`.
pub fn missing_columns(df: &DataFrame, required: &[&str]) -> Vec<String> {
    let present: HashSet<&str> = df
        .get_column_names()
        .into_iter()
        .map(|name| name.as_str())
        .collect();

    required
        .iter()
        .filter(|name| !present.contains(*name))
        .map(|name| name.to_string())
        .collect()
}

/// Require every column in `required` to be present.
pub fn validate_schema(df: &DataFrame, required: &[&str]) -> CleanerResult<()> {
    let missing = missing_columns(df, required);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CleanerError::Schema(format!(
            "Missing required column(s): {}",
            missing.join(", ")
        )))
    }
}

/// Fill nulls of every literal entry of the policy table.
pub fn fill_missing(df: DataFrame) -> CleanerResult<DataFrame> {
    let fills: Vec<Expr> = domain::literal_fills()
        .map(|(name, value)| col(name).fill_null(lit(value)).alias(name))
        .collect();

    let df = df.lazy().with_columns(fills).collect()?;
    Ok(df)
}

/// Coerce a string column into a `Date` column.
///
/// Values that do not parse become null. Returns how many non-null values
/// were coerced that way.
pub fn parse_date_column(df: &mut DataFrame, column: &str) -> CleanerResult<usize> {
    let values = df.column(column)?.str()?;

    let mut coerced = 0usize;
    let days: Vec<Option<i32>> = values
        .into_iter()
        .map(|value| {
            value.and_then(|raw| match parse_date(raw) {
                Some(date) => Some(date_to_epoch_days(date)),
                None => {
                    coerced += 1;
                    log::debug!("Unparseable {} value: {:?}", column, raw);
                    None
                }
            })
        })
        .collect();

    let dates = Series::new(column.into(), days).cast(&DataType::Date)?;
    df.with_column(dates)?;

    if coerced > 0 {
        log::warn!(
            "{} {} value(s) could not be parsed and were set to null",
            coerced,
            column
        );
    }
    Ok(coerced)
}

/// Trim and title-case the listed string columns. Nulls stay null.
pub fn title_case_columns(df: &mut DataFrame, columns: &[&str]) -> CleanerResult<()> {
    for &name in columns {
        let values = df.column(name)?.str()?;
        let cased: Vec<Option<String>> = values
            .into_iter()
            .map(|value| value.map(|v| title_case(v.trim())))
            .collect();

        df.with_column(Series::new(name.into(), cased))?;
    }
    Ok(())
}

/// Remove exact-duplicate rows, keeping the first occurrence in input order.
pub fn remove_duplicates(df: DataFrame) -> CleanerResult<DataFrame> {
    let df = df
        .lazy()
        .unique_stable(None, UniqueKeepStrategy::First)
        .collect()?;
    Ok(df)
}
