//! Opening documents and links with the system handler.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::OpenError;
use crate::sanitize::{redact_path, redact_url};

/// What a stored path or link refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenTarget {
    Url(String),
    File(PathBuf),
    Missing(PathBuf),
}

impl OpenTarget {
    pub fn classify(value: &str) -> Result<Self, OpenError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(OpenError::Empty);
        }

        let lower = value.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(OpenTarget::Url(value.to_string()));
        }

        let path = PathBuf::from(value);
        if path.exists() {
            Ok(OpenTarget::File(path))
        } else {
            Ok(OpenTarget::Missing(path))
        }
    }
}

fn file_url(path: &Path) -> Result<String, OpenError> {
    let absolute = path.canonicalize().map_err(|e| OpenError::Launch {
        target: path.display().to_string(),
        source: e,
    })?;
    Ok(format!("file://{}", absolute.display()))
}

/// Opens a URL in the browser or a local file with its default application.
pub fn open_target(value: &str) -> Result<OpenTarget, OpenError> {
    let target = OpenTarget::classify(value)?;

    match &target {
        OpenTarget::Url(url) => {
            info!(url = %redact_url(url), "Opening link");
            webbrowser::open(url).map_err(|e| OpenError::Launch {
                target: url.clone(),
                source: e,
            })?;
        }
        OpenTarget::File(path) => {
            info!(file = %redact_path(path), "Opening document");
            let url = file_url(path)?;
            webbrowser::open(&url).map_err(|e| OpenError::Launch {
                target: path.display().to_string(),
                source: e,
            })?;
        }
        OpenTarget::Missing(path) => return Err(OpenError::NotFound(path.clone())),
    }

    Ok(target)
}
