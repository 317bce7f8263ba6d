//! Cleaner configuration file support.
//!
//! The cleaner runs with fixed file names. A `cleaner.toml` can point the
//! run at other paths; every key is optional and falls back to the fixed
//! default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CleanerError, CleanerResult};

/// Default input dataset, relative to the working directory.
pub const DEFAULT_INPUT: &str = "netflix_titles.csv";
/// Default cleaned dataset, relative to the working directory.
pub const DEFAULT_CLEANED_OUTPUT: &str = "cleaned_netflix_dataset.csv";
/// Default summary report, relative to the working directory.
pub const DEFAULT_SUMMARY_OUTPUT: &str = "cleaning_summary.txt";

/// Paths used by one cleaning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanerConfig {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_cleaned_output")]
    pub cleaned_output: PathBuf,
    #[serde(default = "default_summary_output")]
    pub summary_output: PathBuf,
}

fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT)
}

fn default_cleaned_output() -> PathBuf {
    PathBuf::from(DEFAULT_CLEANED_OUTPUT)
}

fn default_summary_output() -> PathBuf {
    PathBuf::from(DEFAULT_SUMMARY_OUTPUT)
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            cleaned_output: default_cleaned_output(),
            summary_output: default_summary_output(),
        }
    }
}

/// On-disk layout of `cleaner.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    paths: Option<CleanerConfig>,
}

impl CleanerConfig {
    /// Default paths with a different input file.
    pub fn for_input(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    /// Parse a configuration from TOML text.
    ///
    /// A missing `[paths]` table yields the defaults.
    pub fn from_toml_str(content: &str) -> CleanerResult<Self> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| {
            CleanerError::Config(format!("Failed to parse config file: {}", e))
        })?;

        Ok(file.paths.unwrap_or_default())
    }

    /// Load the configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(CleanerConfig)` if successful
    /// * `Err(CleanerError::Config)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> CleanerResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            CleanerError::Config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    /// Load the configuration from the default location.
    ///
    /// Searches for `cleaner.toml` in:
    /// 1. Current directory
    /// 2. `catalog_cleaner/` directory
    /// 3. Parent directory
    ///
    /// Falls back to the fixed defaults when no file exists.
    pub fn from_default_location() -> CleanerResult<Self> {
        let search_paths = [
            PathBuf::from("cleaner.toml"),
            PathBuf::from("catalog_cleaner/cleaner.toml"),
            PathBuf::from("../cleaner.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Using configuration from {}", path.display());
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }
}
