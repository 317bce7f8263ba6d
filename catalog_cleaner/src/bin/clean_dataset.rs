//! Catalog cleaning binary.
//!
//! Reads `netflix_titles.csv` from the working directory and writes
//! `cleaned_netflix_dataset.csv` and `cleaning_summary.txt` next to it.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin clean-dataset
//!
//! # More detail, including every unparseable date
//! RUST_LOG=debug cargo run --bin clean-dataset
//! ```
//!
//! # Configuration
//!
//! An optional `cleaner.toml` overrides the file paths:
//!
//! ```toml
//! [paths]
//! input = "netflix_titles.csv"
//! cleaned_output = "cleaned_netflix_dataset.csv"
//! summary_output = "cleaning_summary.txt"
//! ```

use std::env;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use catalog_cleaner::{CleanPipeline, CleanerConfig};

fn main() -> anyhow::Result<()> {
    // Initialize logging; `log` records from the library are bridged in
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let config =
        CleanerConfig::from_default_location().context("Failed to load cleaner configuration")?;

    let result = CleanPipeline::with_config(config)
        .run()
        .context("Dataset cleaning failed")?;

    info!(
        rows_removed = result.summary.rows_removed(),
        unparseable_dates = result.unparseable_dates,
        "Wrote {} and {}",
        result.outputs.cleaned_csv.display(),
        result.outputs.summary_report.display()
    );

    Ok(())
}
