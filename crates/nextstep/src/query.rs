//! Record selection for display.

use crate::record::{JobRecord, JobStatus};

/// Which records a listing shows. Rows keep their position in the full
/// list, since that position is what the mutating commands take.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub hide_rejected: bool,
    pub status: Option<JobStatus>,
    /// Case-insensitive substring of position, company or id.
    pub search: Option<String>,
}

impl JobFilter {
    pub fn matches(&self, record: &JobRecord) -> bool {
        if self.hide_rejected && record.status == JobStatus::Rejection {
            return false;
        }

        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }

        if let Some(search) = self.search.as_deref().map(str::trim) {
            if !search.is_empty() {
                let needle = search.to_lowercase();
                let hit = [&record.position, &record.company, &record.id]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle));
                if !hit {
                    return false;
                }
            }
        }

        true
    }

    /// Matching records with their row in `records`.
    pub fn apply<'a>(&self, records: &'a [JobRecord]) -> Vec<(usize, &'a JobRecord)> {
        records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches(record))
            .collect()
    }
}
