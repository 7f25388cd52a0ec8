use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::store::DEFAULT_DUPLICATE_SUFFIX;

pub const CONFIG_VERSION: &str = "1.0";

/// Contents of the JSON configuration file. Every field has a default, so an
/// empty object is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: String,
    /// CSV file holding the records.
    #[serde(default = "default_records_file")]
    pub records_file: String,
    /// Root folder of the per-job document directories.
    #[serde(default = "default_jobs_folder")]
    pub jobs_folder: String,
    /// Appended to the id of a duplicated job.
    #[serde(default = "default_duplicate_suffix")]
    pub duplicate_suffix: String,
    /// Whether listings hide rejected applications unless asked otherwise.
    #[serde(default)]
    pub hide_rejected: bool,
}

fn default_version() -> String {
    CONFIG_VERSION.to_string()
}

fn default_records_file() -> String {
    "jobs.csv".to_string()
}

fn default_jobs_folder() -> String {
    "job_positions".to_string()
}

fn default_duplicate_suffix() -> String {
    DEFAULT_DUPLICATE_SUFFIX.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            records_file: default_records_file(),
            jobs_folder: default_jobs_folder(),
            duplicate_suffix: default_duplicate_suffix(),
            hide_rejected: false,
        }
    }
}

impl Config {
    /// Resolves relative paths against `base`.
    pub fn resolve(&self, base: &Path) -> StoreConfig {
        let absolute = |value: &str| {
            let path = PathBuf::from(value);
            if path.is_absolute() {
                path
            } else {
                base.join(path)
            }
        };

        StoreConfig {
            records_file: absolute(&self.records_file),
            jobs_folder: absolute(&self.jobs_folder),
            duplicate_suffix: self.duplicate_suffix.clone(),
            hide_rejected: self.hide_rejected,
        }
    }
}

/// Configuration with every path resolved, ready to open a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub records_file: PathBuf,
    pub jobs_folder: PathBuf,
    pub duplicate_suffix: String,
    pub hide_rejected: bool,
}
