//! Test harness for isolated store execution.
//!
//! The `TestHarness` struct provides:
//! - A temporary directory holding the CSV file, the document tree and an
//!   "inbox" folder for attachment source files
//! - Stores opened against those paths with a fixed clock

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::TempDir;

use nextstep::{CsvBackend, DocumentTree, FixedClock, JobRecordStore};

pub struct TestHarness {
    temp_dir: TempDir,
    /// CSV file backing the store.
    pub records_file: PathBuf,
    /// Root of the per-job document directories.
    pub jobs_folder: PathBuf,
    /// Where attachment source files are written.
    pub inbox: PathBuf,
    today: NaiveDate,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::on(NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date"))
    }

    /// Harness whose stores believe today is `today`.
    pub fn on(today: NaiveDate) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();

        let inbox = base.join("inbox");
        std::fs::create_dir_all(&inbox).expect("Failed to create inbox");

        Self {
            records_file: base.join("jobs.csv"),
            jobs_folder: base.join("job_positions"),
            inbox,
            temp_dir,
            today,
        }
    }

    pub fn temp_path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Opens a store over the harness files and loads it.
    pub fn open_store(&self) -> JobRecordStore<CsvBackend> {
        self.open_store_on(self.today)
    }

    pub fn open_store_on(&self, today: NaiveDate) -> JobRecordStore<CsvBackend> {
        let mut store = JobRecordStore::new(
            CsvBackend::new(&self.records_file),
            DocumentTree::new(&self.jobs_folder),
        )
        .with_clock(FixedClock(today));
        store.load().expect("Failed to load records");
        store
    }

    /// Writes an attachment source file into the inbox.
    pub fn write_source(&self, filename: &str, content: &str) -> PathBuf {
        let path = self.inbox.join(filename);
        std::fs::write(&path, content).expect("Failed to write source file");
        path
    }

    pub fn job_dir(&self, name: &str) -> PathBuf {
        self.jobs_folder.join(name)
    }

    pub fn read(&self, path: impl AsRef<Path>) -> String {
        std::fs::read_to_string(path).expect("Failed to read file")
    }
}
