pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod opener;
pub mod query;
pub mod record;
pub mod sanitize;
pub mod storage;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{load_config, resolve_config, Config, StoreConfig};
pub use error::{ConfigError, LoggingError, NextStepError, OpenError, Result, StoreError};
pub use opener::{open_target, OpenTarget};
pub use query::JobFilter;
pub use record::{AttachmentKind, ImportMode, JobDraft, JobIdentity, JobRecord, JobStatus};
pub use storage::{CsvBackend, DocumentTree, RecordBackend};
pub use store::{AttachmentFailure, DeleteOutcome, JobRecordStore, Outcome};
