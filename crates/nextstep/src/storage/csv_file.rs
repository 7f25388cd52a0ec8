//! CSV persistence for job records.
//!
//! The file has one fixed header (see [`HEADER`]). Older revisions of the
//! file used slightly different column names; those are accepted on load
//! through serde aliases and rewritten under the current names on the next
//! save.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::StoreError;
use crate::record::{JobRecord, JobStatus};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Column names written on every save, in order.
pub const HEADER: [&str; 10] = [
    "Position",
    "Company",
    "ID",
    "Candidate Home Link",
    "Link to Snapshot",
    "Status",
    "Resume/CV",
    "Cover Letter",
    "Date Last Updated",
    "Submitted",
];

/// Backing format for the record list.
pub trait RecordBackend {
    /// Reads every record in file order. A missing file is an empty list.
    fn load(&self) -> Result<Vec<JobRecord>, StoreError>;

    /// Replaces the stored list with `records`, in order.
    fn save(&self, records: &[JobRecord]) -> Result<(), StoreError>;
}

/// One line of the file, before validation.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    #[serde(rename = "Position")]
    position: String,
    #[serde(rename = "Company")]
    company: String,
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Candidate Home Link", default)]
    candidate_home_link: String,
    #[serde(rename = "Link to Snapshot", alias = "Snapshot", default)]
    snapshot: String,
    #[serde(rename = "Status", default)]
    status: String,
    #[serde(rename = "Resume/CV", alias = "Resume", default)]
    resume: String,
    #[serde(rename = "Cover Letter", default)]
    cover_letter: String,
    #[serde(rename = "Date Last Updated", alias = "Last Updated", default)]
    last_updated: String,
    #[serde(
        rename = "Submitted",
        alias = "Date Applied",
        alias = "Date Submitted",
        default
    )]
    submitted: String,
}

impl CsvRow {
    fn from_record(record: &JobRecord) -> Self {
        Self {
            position: record.position.clone(),
            company: record.company.clone(),
            id: record.id.clone(),
            candidate_home_link: record.candidate_home_link.clone(),
            snapshot: record.snapshot_path.clone(),
            status: record.status.as_str().to_string(),
            resume: record.resume_path.clone(),
            cover_letter: record.cover_letter_path.clone(),
            last_updated: format_date(record.last_updated),
            submitted: format_date(record.submitted_date),
        }
    }

    fn into_record(self, line: u64) -> Result<JobRecord, StoreError> {
        let malformed = |reason: String| StoreError::MalformedRecord { line, reason };

        for (name, value) in [
            ("Position", &self.position),
            ("Company", &self.company),
            ("ID", &self.id),
        ] {
            if value.trim().is_empty() {
                return Err(malformed(format!("required column '{}' is empty", name)));
            }
        }

        // Rows written before the status column existed have no status.
        let status = if self.status.trim().is_empty() {
            JobStatus::NotStarted
        } else {
            self.status
                .parse::<JobStatus>()
                .map_err(|_| malformed(format!("unknown status '{}'", self.status.trim())))?
        };

        let last_updated = parse_date(&self.last_updated)
            .map_err(|e| malformed(format!("bad 'Date Last Updated': {}", e)))?;
        let submitted_date = parse_date(&self.submitted)
            .map_err(|e| malformed(format!("bad 'Submitted' date: {}", e)))?;

        Ok(JobRecord {
            position: self.position,
            company: self.company,
            id: self.id,
            candidate_home_link: self.candidate_home_link,
            snapshot_path: self.snapshot,
            status,
            resume_path: self.resume,
            cover_letter_path: self.cover_letter,
            last_updated,
            submitted_date,
        })
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

fn parse_date(value: &str) -> Result<Option<NaiveDate>, chrono::ParseError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map(Some)
}

/// Records stored in a comma-separated file.
pub struct CsvBackend {
    path: PathBuf,
}

impl CsvBackend {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn csv_error(&self, e: csv::Error) -> StoreError {
        let line = e.position().map(|p| p.line()).unwrap_or(0);
        match e.into_kind() {
            csv::ErrorKind::Io(source) => StoreError::io(&self.path, source),
            csv::ErrorKind::Deserialize { err, .. } => StoreError::MalformedRecord {
                line,
                reason: err.to_string(),
            },
            csv::ErrorKind::Utf8 { err, .. } => StoreError::MalformedRecord {
                line,
                reason: err.to_string(),
            },
            other => StoreError::MalformedRecord {
                line,
                reason: format!("{:?}", other),
            },
        }
    }

    fn write_to<W: Write>(&self, writer: W, records: &[JobRecord]) -> Result<(), StoreError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        writer
            .write_record(HEADER)
            .map_err(|e| self.csv_error(e))?;
        for record in records {
            writer
                .serialize(CsvRow::from_record(record))
                .map_err(|e| self.csv_error(e))?;
        }
        writer.flush().map_err(|e| StoreError::io(&self.path, e))?;
        Ok(())
    }
}

impl RecordBackend for CsvBackend {
    fn load(&self) -> Result<Vec<JobRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_path(&self.path)
            .map_err(|e| self.csv_error(e))?;

        let headers = reader.headers().map_err(|e| self.csv_error(e))?.clone();
        let mut raw = csv::StringRecord::new();
        let mut records = Vec::new();
        while reader.read_record(&mut raw).map_err(|e| self.csv_error(e))? {
            // Line where the row starts; quoted fields may span several.
            let line = raw.position().map_or(0, |p| p.line());
            let row: CsvRow = raw
                .deserialize(Some(&headers))
                .map_err(|e| match self.csv_error(e) {
                    StoreError::MalformedRecord { reason, .. } => {
                        StoreError::MalformedRecord { line, reason }
                    }
                    other => other,
                })?;
            records.push(row.into_record(line)?);
        }

        debug!(count = records.len(), "Loaded job records");
        Ok(records)
    }

    /// Writes to a temporary file next to the target, then renames it over
    /// the target so a failure never leaves a truncated file behind.
    fn save(&self, records: &[JobRecord]) -> Result<(), StoreError> {
        let directory = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut temp = NamedTempFile::new_in(&directory).map_err(|e| StoreError::io(&directory, e))?;
        self.write_to(temp.as_file_mut(), records)?;
        temp.as_file()
            .sync_all()
            .map_err(|e| StoreError::io(temp.path(), e))?;
        temp.persist(&self.path)
            .map_err(|e| StoreError::io(&self.path, e.error))?;

        debug!(count = records.len(), "Saved job records");
        Ok(())
    }
}
