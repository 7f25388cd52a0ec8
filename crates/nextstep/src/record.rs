//! Job record model.
//!
//! A [`JobRecord`] is one tracked application. Its identity (position,
//! company and id) decides the name of the document directory that holds
//! the attached resume, cover letter and posting snapshot.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::sanitize::directory_component;

/// Application status of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    NotStarted,
    Applied,
    Interview,
    Rejection,
    Offer,
}

impl JobStatus {
    pub const ALL: [JobStatus; 5] = [
        JobStatus::NotStarted,
        JobStatus::Applied,
        JobStatus::Interview,
        JobStatus::Rejection,
        JobStatus::Offer,
    ];

    /// Value written to the records file.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::NotStarted => "not started",
            JobStatus::Applied => "applied",
            JobStatus::Interview => "interview",
            JobStatus::Rejection => "rejection",
            JobStatus::Offer => "offer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::NotStarted => "Not started",
            JobStatus::Applied => "Applied",
            JobStatus::Interview => "Interview",
            JobStatus::Rejection => "Rejection",
            JobStatus::Offer => "Offer",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for JobStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect();

        match normalized.as_str() {
            "notstarted" => Ok(JobStatus::NotStarted),
            "applied" => Ok(JobStatus::Applied),
            "interview" => Ok(JobStatus::Interview),
            "rejection" | "rejected" => Ok(JobStatus::Rejection),
            "offer" => Ok(JobStatus::Offer),
            _ => Err(StoreError::validation(format!(
                "invalid application status '{}'",
                s.trim()
            ))),
        }
    }
}

/// The three fields that name a job's document directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobIdentity {
    pub position: String,
    pub company: String,
    pub id: String,
}

impl JobIdentity {
    pub fn new(
        position: impl Into<String>,
        company: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            position: position.into(),
            company: company.into(),
            id: id.into(),
        }
    }

    /// `"{position}-{company}-{id}"` with whitespace replaced by underscores.
    pub fn directory_name(&self) -> String {
        format!(
            "{}-{}-{}",
            directory_component(&self.position),
            directory_component(&self.company),
            directory_component(&self.id)
        )
    }
}

/// Which attached document a path field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    Resume,
    CoverLetter,
    Snapshot,
}

/// How a source file is brought into a document directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// Source stays where it is.
    Copy,
    /// Source is removed after the transfer.
    Move,
}

impl AttachmentKind {
    pub const ALL: [AttachmentKind; 3] = [
        AttachmentKind::Resume,
        AttachmentKind::CoverLetter,
        AttachmentKind::Snapshot,
    ];

    /// Resumes and cover letters are reused across applications, so they are
    /// copied. A saved posting belongs to a single job and is moved.
    pub fn import_mode(&self) -> ImportMode {
        match self {
            AttachmentKind::Resume | AttachmentKind::CoverLetter => ImportMode::Copy,
            AttachmentKind::Snapshot => ImportMode::Move,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttachmentKind::Resume => "resume",
            AttachmentKind::CoverLetter => "cover letter",
            AttachmentKind::Snapshot => "snapshot",
        }
    }
}

impl fmt::Display for AttachmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub position: String,
    pub company: String,
    pub id: String,
    #[serde(default)]
    pub candidate_home_link: String,
    #[serde(default)]
    pub snapshot_path: String,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default)]
    pub resume_path: String,
    #[serde(default)]
    pub cover_letter_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_date: Option<NaiveDate>,
}

impl JobRecord {
    pub fn identity(&self) -> JobIdentity {
        JobIdentity::new(&self.position, &self.company, &self.id)
    }

    pub fn attachment(&self, kind: AttachmentKind) -> &str {
        match kind {
            AttachmentKind::Resume => &self.resume_path,
            AttachmentKind::CoverLetter => &self.cover_letter_path,
            AttachmentKind::Snapshot => &self.snapshot_path,
        }
    }

    pub fn set_attachment(&mut self, kind: AttachmentKind, value: impl Into<String>) {
        let value = value.into();
        match kind {
            AttachmentKind::Resume => self.resume_path = value,
            AttachmentKind::CoverLetter => self.cover_letter_path = value,
            AttachmentKind::Snapshot => self.snapshot_path = value,
        }
    }

    /// Changes the status and stamps the dates.
    ///
    /// `submitted_date` is only set the first time the job becomes Applied.
    pub fn apply_status(&mut self, status: JobStatus, today: NaiveDate) {
        self.status = status;
        self.last_updated = Some(today);
        if status == JobStatus::Applied && self.submitted_date.is_none() {
            self.submitted_date = Some(today);
        }
    }
}

/// User input for creating or editing a job.
///
/// The three attachment fields hold whatever the user supplied: a path to a
/// source file that should be brought into the document directory, a URL,
/// or free text. Values that do not name an existing file are stored as
/// given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub position: String,
    pub company: String,
    pub id: String,
    #[serde(default)]
    pub candidate_home_link: String,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default)]
    pub snapshot: String,
    #[serde(default)]
    pub resume: String,
    #[serde(default)]
    pub cover_letter: String,
}

impl JobDraft {
    pub fn new(
        position: impl Into<String>,
        company: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            position: position.into(),
            company: company.into(),
            id: id.into(),
            ..Default::default()
        }
    }

    /// Pre-fills a draft from an existing record, for edits that only
    /// change a few fields.
    pub fn from_record(record: &JobRecord) -> Self {
        Self {
            position: record.position.clone(),
            company: record.company.clone(),
            id: record.id.clone(),
            candidate_home_link: record.candidate_home_link.clone(),
            status: record.status,
            snapshot: record.snapshot_path.clone(),
            resume: record.resume_path.clone(),
            cover_letter: record.cover_letter_path.clone(),
        }
    }

    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_attachment(mut self, kind: AttachmentKind, value: impl Into<String>) -> Self {
        let value = value.into();
        match kind {
            AttachmentKind::Resume => self.resume = value,
            AttachmentKind::CoverLetter => self.cover_letter = value,
            AttachmentKind::Snapshot => self.snapshot = value,
        }
        self
    }

    pub fn attachment(&self, kind: AttachmentKind) -> &str {
        match kind {
            AttachmentKind::Resume => &self.resume,
            AttachmentKind::CoverLetter => &self.cover_letter,
            AttachmentKind::Snapshot => &self.snapshot,
        }
    }

    pub fn identity(&self) -> JobIdentity {
        JobIdentity::new(&self.position, &self.company, &self.id)
    }

    /// Returns a trimmed copy, or a validation error when a required field
    /// is empty.
    pub fn normalized(&self) -> Result<JobDraft, StoreError> {
        let draft = JobDraft {
            position: self.position.trim().to_string(),
            company: self.company.trim().to_string(),
            id: self.id.trim().to_string(),
            candidate_home_link: self.candidate_home_link.trim().to_string(),
            status: self.status,
            snapshot: self.snapshot.trim().to_string(),
            resume: self.resume.trim().to_string(),
            cover_letter: self.cover_letter.trim().to_string(),
        };

        let missing: Vec<&str> = [
            ("position", &draft.position),
            ("company", &draft.company),
            ("id", &draft.id),
        ]
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();

        if !missing.is_empty() {
            return Err(StoreError::validation(format!(
                "required field(s) empty: {}",
                missing.join(", ")
            )));
        }

        Ok(draft)
    }
}
