use polars::prelude::*;
use std::path::{Path, PathBuf};

use crate::config::CleanerConfig;
use crate::core::domain::{self, DatasetSnapshot};
use crate::error::CleanerResult;
use crate::parsing::csv_parser;
use crate::preprocessing::report::{format_null_counts, CleaningSummary};
use crate::transformations::cleaning;

/// Paths of the two files written by a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOutputs {
    pub cleaned_csv: PathBuf,
    pub summary_report: PathBuf,
}

/// In-memory result of the cleaning steps, before anything is written
pub struct CleanedDataset {
    pub dataframe: DataFrame,
    pub summary: CleaningSummary,
    pub unparseable_dates: usize,
}

/// Result of a full run
pub struct CleanResult {
    pub outputs: CleanOutputs,
    pub summary: CleaningSummary,
    pub unparseable_dates: usize,
}

/// Main cleaning pipeline
pub struct CleanPipeline {
    config: CleanerConfig,
}

impl CleanPipeline {
    /// Create a pipeline with the fixed default paths
    pub fn new() -> Self {
        Self {
            config: CleanerConfig::default(),
        }
    }

    /// Create a pipeline with custom paths
    pub fn with_config(config: CleanerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CleanerConfig {
        &self.config
    }

    /// Load, clean and persist the configured dataset.
    ///
    /// Nothing is written unless every cleaning step succeeded, so a schema
    /// failure leaves no output files behind.
    ///
    /// # Returns
    /// CleanResult with the output paths and the before/after summary
    pub fn run(&self) -> CleanerResult<CleanResult> {
        // Step 1: Load
        log::info!("Loading {}", self.config.input.display());
        let df = csv_parser::parse_catalog_csv(&self.config.input)?;

        // Steps 2-8: Clean in memory
        let CleanedDataset {
            mut dataframe,
            summary,
            unparseable_dates,
        } = self.process_frame(df)?;

        // Step 9: Persist
        csv_parser::write_catalog_csv(&mut dataframe, &self.config.cleaned_output)?;
        summary.write_to(&self.config.summary_output)?;

        log::info!(
            "Cleaning complete. Summary saved to '{}' and cleaned CSV saved to '{}'",
            self.config.summary_output.display(),
            self.config.cleaned_output.display()
        );

        Ok(CleanResult {
            outputs: CleanOutputs {
                cleaned_csv: self.config.cleaned_output.clone(),
                summary_report: self.config.summary_output.clone(),
            },
            summary,
            unparseable_dates,
        })
    }

    /// Run the in-memory cleaning steps over an already loaded table.
    pub fn process_frame(&self, df: DataFrame) -> CleanerResult<CleanedDataset> {
        // Step 2: Initial statistics, under the original header names
        let initial = DatasetSnapshot::capture(&df);
        log::info!("Initial Shape: {}", initial.shape_label());
        log::info!(
            "Initial Missing Values:\n{}",
            format_null_counts(&initial.null_counts)
        );

        // Step 3: Normalize column names, then require the expected ones
        let mut df = df;
        cleaning::normalize_column_names(&mut df)?;
        cleaning::validate_schema(&df, &domain::EXPECTED_COLUMNS)?;

        // Step 4: Literal fills
        let mut df = cleaning::fill_missing(df)?;

        // Step 5: Dates
        let unparseable_dates = cleaning::parse_date_column(&mut df, domain::DATE_ADDED)?;

        // Step 6: Trim and title-case
        cleaning::title_case_columns(&mut df, &domain::TITLE_CASE_COLUMNS)?;

        // Step 7: Duplicates
        let df = cleaning::remove_duplicates(df)?;

        // Step 8: Post-clean statistics
        let cleaned = DatasetSnapshot::capture(&df);
        log::info!("Cleaned Shape: {}", cleaned.shape_label());
        log::info!(
            "Remaining Missing Values (after cleaning):\n{}",
            format_null_counts(&cleaned.null_counts)
        );

        let summary = CleaningSummary::new(initial, cleaned);
        log::debug!("Removed {} duplicate row(s)", summary.rows_removed());

        Ok(CleanedDataset {
            dataframe: df,
            summary,
            unparseable_dates,
        })
    }
}

impl Default for CleanPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Clean `input_path`, writing the cleaned CSV and the summary report under
/// their fixed names in the working directory.
pub fn clean(input_path: &Path) -> CleanerResult<CleanOutputs> {
    let pipeline = CleanPipeline::with_config(CleanerConfig::for_input(input_path));
    pipeline.run().map(|result| result.outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CleanerError;

    fn raw_frame() -> DataFrame {
        df!(
            "Type" => [Some("movie"), Some("movie"), Some("TV SHOW")],
            " Title " => [Some("  a tale "), Some("  a tale "), Some("other")],
            "Director" => [None::<&str>, None, Some("Jane Doe")],
            "Cast" => [None::<&str>, None, None],
            "Country" => [None, None, Some("united kingdom")],
            "Date Added" => [None, None, Some("not a date")],
            "Rating" => [None::<&str>, None, None],
            "Duration" => [None::<&str>, None, Some("2 Seasons")],
        )
        .unwrap()
    }

    #[test]
    fn test_process_frame() {
        let pipeline = CleanPipeline::new();
        let result = pipeline.process_frame(raw_frame()).unwrap();

        assert_eq!(result.summary.initial.rows, 3);
        assert_eq!(result.summary.cleaned.rows, 2);
        assert_eq!(result.unparseable_dates, 1);

        // the initial snapshot keeps the original header names
        assert_eq!(result.summary.initial.nulls_in("Director"), Some(2));
        assert_eq!(result.summary.cleaned.nulls_in("director"), Some(0));
        assert_eq!(result.summary.cleaned.nulls_in("date_added"), Some(2));

        let df = &result.dataframe;
        let types = df.column("type").unwrap().str().unwrap();
        assert_eq!(types.get(1), Some("Tv Show"));
        let countries = df.column("country").unwrap().str().unwrap();
        assert_eq!(countries.get(0), Some("Unknown"));
        assert_eq!(countries.get(1), Some("United Kingdom"));
    }

    #[test]
    fn test_process_frame_missing_column() {
        let df = raw_frame().drop("Rating").unwrap();
        let result = CleanPipeline::new().process_frame(df);
        assert!(matches!(result, Err(CleanerError::Schema(_))));
    }

    #[test]
    fn test_default_pipeline_uses_fixed_paths() {
        let pipeline = CleanPipeline::default();
        assert_eq!(pipeline.config(), &CleanerConfig::default());
    }
}
