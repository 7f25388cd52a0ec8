pub mod add;
pub mod delete;
pub mod duplicate;
pub mod edit;
pub mod init;
pub mod list;
pub mod open;
pub mod status;

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Args;
use tracing::debug;

use nextstep::{resolve_config, JobRecord, JobRecordStore, JobStatus, Outcome, StoreConfig};

#[derive(Args)]
pub struct AddArgs {
    pub position: String,
    pub company: String,
    /// Job id from the posting
    pub id: String,

    /// Candidate home / application portal link
    #[arg(short, long, default_value = "")]
    pub link: String,

    /// Initial status
    #[arg(short, long, default_value = "not started")]
    pub status: String,

    /// Saved posting (moved into the job folder) or its URL
    #[arg(long, default_value = "")]
    pub snapshot: String,

    /// Resume file (copied into the job folder)
    #[arg(long, default_value = "")]
    pub resume: String,

    /// Cover letter file (copied into the job folder)
    #[arg(long, default_value = "")]
    pub cover_letter: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Row number as shown by `list`
    pub row: usize,

    #[arg(long)]
    pub position: Option<String>,

    #[arg(long)]
    pub company: Option<String>,

    #[arg(long)]
    pub id: Option<String>,

    #[arg(short, long)]
    pub link: Option<String>,

    #[arg(short, long)]
    pub status: Option<String>,

    #[arg(long)]
    pub snapshot: Option<String>,

    #[arg(long)]
    pub resume: Option<String>,

    #[arg(long)]
    pub cover_letter: Option<String>,
}

pub fn open_store(config: Option<&Path>) -> Result<(JobRecordStore, StoreConfig)> {
    let config = resolve_config(config).context("Failed to load configuration")?;
    let store = JobRecordStore::from_config(&config).with_context(|| {
        format!(
            "Failed to open job records at {}",
            config.records_file.display()
        )
    })?;
    debug!(
        records = store.records().len(),
        hide_rejected = config.hide_rejected,
        "Opened job records"
    );
    Ok((store, config))
}

/// Converts a 1-based row number into a list index.
pub fn row_index(row: usize) -> Result<usize> {
    match row.checked_sub(1) {
        Some(index) => Ok(index),
        None => bail!("Row numbers start at 1"),
    }
}

pub fn parse_status(value: &str) -> Result<JobStatus> {
    value
        .parse::<JobStatus>()
        .with_context(|| format!("Valid statuses: {}", status_names()))
}

fn status_names() -> String {
    JobStatus::ALL
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn describe(record: &JobRecord) -> String {
    format!("{} at {} ({})", record.position, record.company, record.id)
}

/// Prints an outcome and any attachment that could not be filed.
pub fn report(verb: &str, outcome: &Outcome, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(outcome)?);
    } else {
        println!(
            "{} row {}: {}",
            verb,
            outcome.index + 1,
            describe(&outcome.record)
        );
        println!("  folder: {}", outcome.directory.display());
    }

    for failure in &outcome.failures {
        eprintln!(
            "warning: {} '{}' was not filed: {}",
            failure.kind,
            failure.path.display(),
            failure.message
        );
    }
    Ok(())
}
