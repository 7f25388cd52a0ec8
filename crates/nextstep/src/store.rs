//! The job record store.
//!
//! [`JobRecordStore`] owns the in-memory list of records, persists it through
//! a [`RecordBackend`] and keeps every record's document directory in step
//! with the record's identity. Each mutating command builds the new list
//! aside, saves it, and only then replaces the in-memory list, so a failed
//! save leaves both the file and the list as they were.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, info_span, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::record::{AttachmentKind, ImportMode, JobDraft, JobIdentity, JobRecord, JobStatus};
use crate::sanitize::redact_path;
use crate::storage::{CsvBackend, DocumentTree, RecordBackend};

pub const DEFAULT_DUPLICATE_SUFFIX: &str = "_copy";

/// Attempts at finding a free identity for a duplicate.
const MAX_DUPLICATE_ATTEMPTS: usize = 100;

/// An attachment that could not be brought into the document directory.
/// The record is still saved; the field keeps the value it was given.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentFailure {
    pub kind: AttachmentKind,
    pub path: PathBuf,
    pub message: String,
}

/// Result of a command that creates or rewrites a record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    /// Row of the record in the list.
    pub index: usize,
    pub record: JobRecord,
    pub directory: PathBuf,
    pub failures: Vec<AttachmentFailure>,
}

/// Result of a delete. The record is gone once this is returned; a failure to
/// remove the directory afterwards is reported in `removal_error`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub record: JobRecord,
    pub directory: PathBuf,
    pub directory_removed: bool,
    pub removal_error: Option<String>,
}

/// Where an attachment value points, judged before an edit touches anything.
enum AttachmentLocation {
    /// A file inside the job's directory; it travels with a rename.
    Inside(PathBuf),
    /// An existing file somewhere else.
    Outside,
    /// A URL, free text, a missing file or nothing.
    NotAFile,
}

impl AttachmentLocation {
    fn of(value: &str, directory: &Path) -> Self {
        if !is_local_file(value) {
            return AttachmentLocation::NotAFile;
        }
        let path = Path::new(value);
        if !DocumentTree::is_inside(directory, path) {
            return AttachmentLocation::Outside;
        }
        match path.file_name() {
            Some(name) => AttachmentLocation::Inside(PathBuf::from(name)),
            None => AttachmentLocation::NotAFile,
        }
    }
}

/// Files one command brought into a document directory.
///
/// Attachments are always copied in. Originals of moved attachments are
/// removed by [`finish`](Staging::finish) after the save succeeded, and the
/// copies are removed by [`discard`](Staging::discard) when it failed.
#[derive(Default)]
struct Staging {
    failures: Vec<AttachmentFailure>,
    copies: Vec<PathBuf>,
    moved: Vec<(AttachmentKind, PathBuf)>,
}

impl Staging {
    fn finish(mut self, documents: &DocumentTree) -> Vec<AttachmentFailure> {
        for (kind, source) in std::mem::take(&mut self.moved) {
            if let Err(e) = documents.remove_file(&source) {
                warn!(
                    kind = %kind,
                    file = %redact_path(&source),
                    error = %e,
                    "Imported attachment, but the original was not removed"
                );
                self.failures.push(AttachmentFailure {
                    kind,
                    path: source,
                    message: format!("imported, but the original was not removed: {}", e),
                });
            }
        }
        self.failures
    }

    fn discard(self, documents: &DocumentTree) {
        for copy in self.copies {
            if let Err(e) = documents.remove_file(&copy) {
                warn!(
                    file = %redact_path(&copy),
                    error = %e,
                    "Failed to remove imported copy after save error"
                );
            }
        }
    }
}

fn is_local_file(value: &str) -> bool {
    !value.is_empty() && Path::new(value).is_file()
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

pub struct JobRecordStore<B: RecordBackend = CsvBackend> {
    backend: B,
    documents: DocumentTree,
    clock: Box<dyn Clock>,
    duplicate_suffix: String,
    records: Vec<JobRecord>,
}

impl JobRecordStore<CsvBackend> {
    /// Opens the CSV file and document folder named by the configuration and
    /// loads the records.
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        let mut store = Self::new(
            CsvBackend::new(&config.records_file),
            DocumentTree::new(&config.jobs_folder),
        )
        .with_duplicate_suffix(&config.duplicate_suffix);
        store.load()?;
        Ok(store)
    }
}

impl<B: RecordBackend> JobRecordStore<B> {
    /// Creates a store with an empty in-memory list. Call [`load`](Self::load)
    /// to read the backend.
    pub fn new(backend: B, documents: DocumentTree) -> Self {
        Self {
            backend,
            documents,
            clock: Box::new(SystemClock),
            duplicate_suffix: DEFAULT_DUPLICATE_SUFFIX.to_string(),
            records: Vec::new(),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_duplicate_suffix(mut self, suffix: &str) -> Self {
        self.duplicate_suffix = suffix.to_string();
        self
    }

    pub fn documents(&self) -> &DocumentTree {
        &self.documents
    }

    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Result<&JobRecord, StoreError> {
        self.records
            .get(index)
            .ok_or(StoreError::RecordNotFound(index))
    }

    /// Directory that holds the documents of the record at `index`.
    pub fn document_directory(&self, index: usize) -> Result<PathBuf, StoreError> {
        let record = self.get(index)?;
        Ok(self.documents.directory_for(&record.identity()))
    }

    /// Re-reads the backend and replaces the in-memory list.
    pub fn load(&mut self) -> Result<&[JobRecord], StoreError> {
        self.records = self.backend.load()?;
        Ok(&self.records)
    }

    /// Persists `records` as the complete list, in the given order.
    pub fn save(&mut self, records: Vec<JobRecord>) -> Result<(), StoreError> {
        self.commit(records)
    }

    pub fn create_document_directory(
        &self,
        position: &str,
        company: &str,
        id: &str,
    ) -> Result<PathBuf, StoreError> {
        self.documents
            .create_document_directory(&JobIdentity::new(position, company, id))
    }

    pub fn rename_document_directory(
        &self,
        old_path: &Path,
        position: &str,
        company: &str,
        id: &str,
    ) -> Result<PathBuf, StoreError> {
        self.documents
            .rename_document_directory(old_path, &JobIdentity::new(position, company, id))
    }

    /// Adds a new job, creating its document directory and bringing in the
    /// attachments named by the draft.
    pub fn add_job(&mut self, draft: &JobDraft) -> Result<Outcome, StoreError> {
        let draft = draft.normalized()?;
        let identity = draft.identity();
        let _span = info_span!("store.add_job", directory = %identity.directory_name()).entered();

        let today = self.clock.today();
        let mut record = JobRecord {
            position: draft.position.clone(),
            company: draft.company.clone(),
            id: draft.id.clone(),
            candidate_home_link: draft.candidate_home_link.clone(),
            snapshot_path: String::new(),
            status: JobStatus::NotStarted,
            resume_path: String::new(),
            cover_letter_path: String::new(),
            last_updated: None,
            submitted_date: None,
        };
        record.apply_status(draft.status, today);

        let directory = self.documents.create_document_directory(&identity)?;

        let mut staging = Staging::default();
        for kind in AttachmentKind::ALL {
            let value = self.bring_in(
                kind,
                draft.attachment(kind),
                &directory,
                kind.import_mode(),
                &mut staging,
            );
            record.set_attachment(kind, value);
        }

        let mut records = self.records.clone();
        records.push(record.clone());
        if let Err(e) = self.commit(records) {
            staging.discard(&self.documents);
            return Err(e);
        }
        let failures = staging.finish(&self.documents);

        let index = self.records.len() - 1;
        info!(row = index, "Added job");
        Ok(Outcome {
            index,
            record,
            directory,
            failures,
        })
    }

    /// Rewrites the record at `index` from `draft`.
    ///
    /// When the identity changes, the document directory is renamed first and
    /// every attachment path that pointed inside it is rewritten to the new
    /// location. The record keeps its row.
    pub fn edit_job(&mut self, index: usize, draft: &JobDraft) -> Result<Outcome, StoreError> {
        let draft = draft.normalized()?;
        let existing = self.get(index)?.clone();
        let _span = info_span!("store.edit_job", row = index).entered();

        let old_identity = existing.identity();
        let new_identity = draft.identity();
        let old_directory = self.documents.directory_for(&old_identity);
        let new_directory = self.documents.directory_for(&new_identity);

        // Classify the requested values, changed or not, before the rename
        // moves anything out from under them.
        let locations: Vec<(AttachmentKind, AttachmentLocation)> = AttachmentKind::ALL
            .iter()
            .map(|&kind| (kind, AttachmentLocation::of(draft.attachment(kind), &old_directory)))
            .collect();

        let renamed = old_directory != new_directory && old_directory.is_dir();
        let directory = if renamed {
            self.documents
                .rename_document_directory(&old_directory, &new_identity)?
        } else {
            if old_directory != new_directory
                && std::fs::symlink_metadata(&new_directory).is_ok()
            {
                return Err(StoreError::DirectoryConflict(new_directory));
            }
            self.documents.create_document_directory(&new_identity)?
        };

        let mut staging = Staging::default();
        let mut record = JobRecord {
            position: draft.position.clone(),
            company: draft.company.clone(),
            id: draft.id.clone(),
            candidate_home_link: draft.candidate_home_link.clone(),
            ..existing.clone()
        };

        for (kind, location) in locations {
            let given = draft.attachment(kind);
            let value = match location {
                AttachmentLocation::Inside(name) => path_string(&directory.join(name)),
                AttachmentLocation::Outside => {
                    self.bring_in(kind, given, &directory, kind.import_mode(), &mut staging)
                }
                AttachmentLocation::NotAFile => given.to_string(),
            };
            record.set_attachment(kind, value);
        }

        record.apply_status(draft.status, self.clock.today());

        let mut records = self.records.clone();
        records[index] = record.clone();
        if let Err(e) = self.commit(records) {
            staging.discard(&self.documents);
            if renamed {
                self.undo_rename(&directory, &old_directory);
            }
            return Err(e);
        }
        let failures = staging.finish(&self.documents);

        info!(row = index, renamed, "Edited job");
        Ok(Outcome {
            index,
            record,
            directory,
            failures,
        })
    }

    /// Appends a copy of the record at `index` under a new id, with its own
    /// document directory holding copies of the attachments.
    pub fn duplicate_job(&mut self, index: usize) -> Result<Outcome, StoreError> {
        let source = self.get(index)?.clone();
        let _span = info_span!("store.duplicate_job", row = index).entered();

        let mut record = source.clone();
        record.id = self.free_duplicate_id(&source)?;
        record.submitted_date = None;
        record.last_updated = Some(self.clock.today());

        let directory = self
            .documents
            .create_document_directory(&record.identity())?;

        let mut staging = Staging::default();
        for kind in AttachmentKind::ALL {
            let value = self.bring_in(
                kind,
                source.attachment(kind),
                &directory,
                ImportMode::Copy,
                &mut staging,
            );
            record.set_attachment(kind, value);
        }

        let mut records = self.records.clone();
        records.push(record.clone());
        if let Err(e) = self.commit(records) {
            staging.discard(&self.documents);
            return Err(e);
        }
        let failures = staging.finish(&self.documents);

        let new_index = self.records.len() - 1;
        info!(row = index, new_row = new_index, "Duplicated job");
        Ok(Outcome {
            index: new_index,
            record,
            directory,
            failures,
        })
    }

    /// Changes the status of the record at `index`. Files are not touched.
    pub fn set_status(&mut self, index: usize, status: JobStatus) -> Result<JobRecord, StoreError> {
        let mut record = self.get(index)?.clone();
        let _span = info_span!("store.set_status", row = index, status = %status).entered();

        record.apply_status(status, self.clock.today());

        let mut records = self.records.clone();
        records[index] = record.clone();
        self.commit(records)?;

        info!("Updated status");
        Ok(record)
    }

    /// Removes the record at `index`. Its document directory is deleted only
    /// when `keep_files` is false; kept directories are left orphaned.
    ///
    /// The row is saved as deleted before the directory is touched. An error
    /// while removing the directory does not bring the row back; it is
    /// reported in [`DeleteOutcome::removal_error`].
    pub fn delete_job(&mut self, index: usize, keep_files: bool) -> Result<DeleteOutcome, StoreError> {
        self.get(index)?;
        let _span = info_span!("store.delete_job", row = index, keep_files).entered();

        let mut records = self.records.clone();
        let record = records.remove(index);
        self.commit(records)?;

        let directory = self.documents.directory_for(&record.identity());
        let mut removal_error = None;
        let directory_removed = if keep_files {
            false
        } else {
            match self.documents.remove_document_directory(&directory) {
                Ok(removed) => removed,
                Err(e) => {
                    warn!(
                        directory = %redact_path(&directory),
                        error = %e,
                        "Deleted job, but its directory was not removed"
                    );
                    removal_error = Some(e.to_string());
                    false
                }
            }
        };

        info!(directory_removed, "Deleted job");
        Ok(DeleteOutcome {
            record,
            directory,
            directory_removed,
            removal_error,
        })
    }

    fn commit(&mut self, records: Vec<JobRecord>) -> Result<(), StoreError> {
        self.backend.save(&records)?;
        self.records = records;
        Ok(())
    }

    /// Returns the field value to store for an attachment. Existing files are
    /// copied into `directory` and recorded in `staging`; anything else is
    /// kept as given.
    fn bring_in(
        &self,
        kind: AttachmentKind,
        value: &str,
        directory: &Path,
        mode: ImportMode,
        staging: &mut Staging,
    ) -> String {
        if !is_local_file(value) {
            return value.to_string();
        }

        let source = Path::new(value);
        let in_place = DocumentTree::is_inside(directory, source);
        match self.documents.import(source, directory) {
            Ok(path) => {
                if !in_place {
                    staging.copies.push(path.clone());
                    if mode == ImportMode::Move {
                        staging.moved.push((kind, source.to_path_buf()));
                    }
                }
                path_string(&path)
            }
            Err(e) => {
                warn!(
                    kind = %kind,
                    file = %redact_path(source),
                    error = %e,
                    "Failed to import attachment"
                );
                staging.failures.push(AttachmentFailure {
                    kind,
                    path: source.to_path_buf(),
                    message: e.to_string(),
                });
                value.to_string()
            }
        }
    }

    fn free_duplicate_id(&self, source: &JobRecord) -> Result<String, StoreError> {
        let mut id = source.id.clone();
        for _ in 0..MAX_DUPLICATE_ATTEMPTS {
            id.push_str(&self.duplicate_suffix);
            let identity = JobIdentity::new(&source.position, &source.company, &id);
            let taken = std::fs::symlink_metadata(self.documents.directory_for(&identity)).is_ok();
            if !taken {
                return Ok(id);
            }
        }
        let identity = JobIdentity::new(&source.position, &source.company, &id);
        Err(StoreError::DirectoryConflict(
            self.documents.directory_for(&identity),
        ))
    }

    fn undo_rename(&self, current: &Path, original: &Path) {
        if let Err(e) = std::fs::rename(current, original) {
            warn!(
                from = %redact_path(current),
                to = %redact_path(original),
                error = %e,
                "Failed to restore document directory after save error"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    /// Keeps records in memory; can be told to fail saves.
    #[derive(Default)]
    struct MemoryBackend {
        saved: RefCell<Vec<JobRecord>>,
        fail_saves: bool,
    }

    impl RecordBackend for MemoryBackend {
        fn load(&self) -> Result<Vec<JobRecord>, StoreError> {
            Ok(self.saved.borrow().clone())
        }

        fn save(&self, records: &[JobRecord]) -> Result<(), StoreError> {
            if self.fail_saves {
                return Err(StoreError::io(
                    "memory",
                    std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
                ));
            }
            *self.saved.borrow_mut() = records.to_vec();
            Ok(())
        }
    }

    fn store(temp_dir: &TempDir) -> JobRecordStore<MemoryBackend> {
        JobRecordStore::new(
            MemoryBackend::default(),
            DocumentTree::new(temp_dir.path().join("jobs")),
        )
        .with_clock(FixedClock(today()))
    }

    #[test]
    fn test_add_rejects_empty_required_fields_without_side_effects() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store(&temp_dir);

        let result = store.add_job(&JobDraft::new("Engineer", "", "1"));

        assert!(matches!(result, Err(StoreError::Validation { .. })));
        assert!(store.records().is_empty());
        assert!(!temp_dir.path().join("jobs").exists());
    }

    #[test]
    fn test_add_applied_sets_submitted_date() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store(&temp_dir);

        let outcome = store
            .add_job(&JobDraft::new("Engineer", "Acme", "1").with_status(JobStatus::Applied))
            .unwrap();

        assert_eq!(outcome.record.submitted_date, Some(today()));
        assert_eq!(outcome.record.last_updated, Some(today()));
    }

    #[test]
    fn test_add_keeps_non_file_attachment_values() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store(&temp_dir);

        let draft = JobDraft::new("Engineer", "Acme", "1")
            .with_attachment(AttachmentKind::Snapshot, "https://acme.example/jobs/1")
            .with_attachment(AttachmentKind::Resume, "resume.pdf");
        let outcome = store.add_job(&draft).unwrap();

        assert!(outcome.failures.is_empty());
        assert_eq!(outcome.record.snapshot_path, "https://acme.example/jobs/1");
        assert_eq!(outcome.record.resume_path, "resume.pdf");
    }

    #[test]
    fn test_failed_save_leaves_list_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JobRecordStore::new(
            MemoryBackend {
                fail_saves: true,
                ..Default::default()
            },
            DocumentTree::new(temp_dir.path().join("jobs")),
        );

        let result = store.add_job(&JobDraft::new("Engineer", "Acme", "1"));

        assert!(matches!(result, Err(StoreError::Io { .. })));
        assert!(store.records().is_empty());
    }

    #[test]
    fn test_failed_save_undoes_directory_rename() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store(&temp_dir);
        store.add_job(&JobDraft::new("Engineer", "Acme", "1")).unwrap();
        let old_directory = store.document_directory(0).unwrap();
        store.backend.fail_saves = true;

        let result = store.edit_job(0, &JobDraft::new("Engineer", "Globex", "1"));

        assert!(result.is_err());
        assert!(old_directory.is_dir());
        assert!(!temp_dir.path().join("jobs/Engineer-Globex-1").exists());
        assert_eq!(store.get(0).unwrap().company, "Acme");
    }

    #[test]
    fn test_failed_add_keeps_moved_source() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store(&temp_dir);
        store.backend.fail_saves = true;
        let posting = temp_dir.path().join("posting.pdf");
        std::fs::write(&posting, b"posting").unwrap();

        let draft = JobDraft::new("Engineer", "Acme", "1")
            .with_attachment(AttachmentKind::Snapshot, posting.to_str().unwrap());
        let result = store.add_job(&draft);

        assert!(result.is_err());
        assert!(store.records().is_empty());
        assert_eq!(std::fs::read(&posting).unwrap(), b"posting");
        assert!(!temp_dir
            .path()
            .join("jobs/Engineer-Acme-1/posting.pdf")
            .exists());
    }

    #[test]
    fn test_add_removes_moved_source_after_save() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store(&temp_dir);
        let posting = temp_dir.path().join("posting.pdf");
        std::fs::write(&posting, b"posting").unwrap();

        let draft = JobDraft::new("Engineer", "Acme", "1")
            .with_attachment(AttachmentKind::Snapshot, posting.to_str().unwrap());
        let outcome = store.add_job(&draft).unwrap();

        assert!(outcome.failures.is_empty());
        assert!(!posting.exists());
        assert_eq!(std::fs::read(&outcome.record.snapshot_path).unwrap(), b"posting");
    }

    #[test]
    fn test_failed_edit_keeps_moved_source_and_drops_copy() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store(&temp_dir);
        store.add_job(&JobDraft::new("Engineer", "Acme", "1")).unwrap();
        store.backend.fail_saves = true;
        let posting = temp_dir.path().join("posting.pdf");
        std::fs::write(&posting, b"posting").unwrap();

        let draft = JobDraft::from_record(store.get(0).unwrap())
            .with_attachment(AttachmentKind::Snapshot, posting.to_str().unwrap());
        let result = store.edit_job(0, &draft);

        assert!(result.is_err());
        assert!(posting.is_file());
        assert!(!temp_dir
            .path()
            .join("jobs/Engineer-Acme-1/posting.pdf")
            .exists());
        assert_eq!(store.get(0).unwrap().snapshot_path, "");
    }

    #[test]
    fn test_edit_rename_rewrites_requested_path_inside_old_directory() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store(&temp_dir);
        store.add_job(&JobDraft::new("Engineer", "Acme", "1")).unwrap();
        let old_resume = store.document_directory(0).unwrap().join("resume.pdf");
        std::fs::write(&old_resume, b"cv").unwrap();

        let draft = JobDraft::new("Engineer", "Globex", "1")
            .with_attachment(AttachmentKind::Resume, old_resume.to_str().unwrap());
        let outcome = store.edit_job(0, &draft).unwrap();

        let expected = temp_dir.path().join("jobs/Engineer-Globex-1/resume.pdf");
        assert!(outcome.failures.is_empty());
        assert_eq!(Path::new(&outcome.record.resume_path), expected);
        assert_eq!(std::fs::read(&expected).unwrap(), b"cv");
        assert!(!old_resume.exists());
        assert_eq!(store.get(0).unwrap().resume_path, outcome.record.resume_path);
    }

    #[cfg(unix)]
    #[test]
    fn test_delete_reports_directory_removal_failure() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store(&temp_dir);
        store.add_job(&JobDraft::new("Engineer", "Acme", "1")).unwrap();
        let directory = store.document_directory(0).unwrap();
        // A plain file where the directory should be cannot be removed as one.
        std::fs::remove_dir(&directory).unwrap();
        std::fs::write(&directory, b"not a directory").unwrap();

        let outcome = store.delete_job(0, false).unwrap();

        assert!(store.records().is_empty());
        assert!(store.backend.saved.borrow().is_empty());
        assert!(!outcome.directory_removed);
        assert!(outcome.removal_error.is_some());
    }

    #[test]
    fn test_edit_into_existing_directory_conflicts() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store(&temp_dir);
        store.add_job(&JobDraft::new("Engineer", "Acme", "1")).unwrap();
        store.add_job(&JobDraft::new("Engineer", "Acme", "2")).unwrap();

        let result = store.edit_job(0, &JobDraft::new("Engineer", "Acme", "2"));

        assert!(matches!(result, Err(StoreError::DirectoryConflict(_))));
        assert_eq!(store.get(0).unwrap().id, "1");
        assert!(temp_dir.path().join("jobs/Engineer-Acme-1").is_dir());
    }

    #[test]
    fn test_edit_identity_change_to_same_directory_name_does_not_rename() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store(&temp_dir);
        store.add_job(&JobDraft::new("Engineer", "Acme Inc", "1")).unwrap();

        let outcome = store
            .edit_job(0, &JobDraft::new("Engineer", "Acme_Inc", "1"))
            .unwrap();

        assert!(outcome.directory.ends_with("Engineer-Acme_Inc-1"));
        assert!(outcome.directory.is_dir());
    }

    #[test]
    fn test_edit_missing_directory_is_recreated() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store(&temp_dir);
        store.add_job(&JobDraft::new("Engineer", "Acme", "1")).unwrap();
        std::fs::remove_dir_all(store.document_directory(0).unwrap()).unwrap();

        let outcome = store
            .edit_job(0, &JobDraft::new("Engineer", "Globex", "1"))
            .unwrap();

        assert!(outcome.directory.is_dir());
        assert_eq!(store.get(0).unwrap().company, "Globex");
    }

    #[test]
    fn test_unknown_row_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store(&temp_dir);

        assert!(matches!(
            store.set_status(3, JobStatus::Offer),
            Err(StoreError::RecordNotFound(3))
        ));
        assert!(matches!(
            store.delete_job(0, true),
            Err(StoreError::RecordNotFound(0))
        ));
    }

    #[test]
    fn test_duplicate_skips_taken_identities() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store(&temp_dir);
        store.add_job(&JobDraft::new("Engineer", "Acme", "1")).unwrap();

        let first = store.duplicate_job(0).unwrap();
        let second = store.duplicate_job(0).unwrap();

        assert_eq!(first.record.id, "1_copy");
        assert_eq!(second.record.id, "1_copy_copy");
        assert_eq!(store.records().len(), 3);
    }

    #[test]
    fn test_duplicate_uses_configured_suffix() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store(&temp_dir).with_duplicate_suffix("-b");
        store.add_job(&JobDraft::new("Engineer", "Acme", "1")).unwrap();

        let outcome = store.duplicate_job(0).unwrap();

        assert_eq!(outcome.record.id, "1-b");
        assert!(outcome.directory.ends_with("Engineer-Acme-1-b"));
    }
}
