use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreError;
use crate::record::JobIdentity;
use crate::sanitize::redact_path;

/// True when both paths resolve to the same filesystem entry.
fn same_entry(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// The tree of per-job document directories under a single root folder.
pub struct DocumentTree {
    root: PathBuf,
}

impl DocumentTree {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the directory for `identity` lives, whether or not it exists.
    pub fn directory_for(&self, identity: &JobIdentity) -> PathBuf {
        self.root.join(identity.directory_name())
    }

    /// Creates the root folder and the job's directory if missing.
    pub fn create_document_directory(&self, identity: &JobIdentity) -> Result<PathBuf, StoreError> {
        let path = self.directory_for(identity);
        self.ensure_directory(&path)?;
        Ok(path)
    }

    /// Renames `old_path` to the directory named by `identity`.
    ///
    /// Fails with [`StoreError::DirectoryConflict`] when a different directory
    /// already occupies the destination. Renaming onto itself is a no-op.
    pub fn rename_document_directory(
        &self,
        old_path: &Path,
        identity: &JobIdentity,
    ) -> Result<PathBuf, StoreError> {
        let new_path = self.directory_for(identity);
        if old_path == new_path {
            return Ok(new_path);
        }

        if !old_path.is_dir() {
            return Err(StoreError::io(
                old_path,
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "document directory does not exist",
                ),
            ));
        }

        // A case-only rename on a case-insensitive filesystem sees the
        // destination as existing; it is the same directory.
        if std::fs::symlink_metadata(&new_path).is_ok() && !same_entry(old_path, &new_path) {
            return Err(StoreError::DirectoryConflict(new_path));
        }

        self.ensure_directory(&self.root)?;
        std::fs::rename(old_path, &new_path).map_err(|e| StoreError::io(old_path, e))?;

        debug!(
            from = %redact_path(old_path),
            to = %redact_path(&new_path),
            "Renamed document directory"
        );
        Ok(new_path)
    }

    /// True when `file` sits directly inside `directory`.
    pub fn is_inside(directory: &Path, file: &Path) -> bool {
        match file.parent() {
            Some(parent) => same_entry(parent, directory),
            None => false,
        }
    }

    /// Recursively deletes a job's directory. Returns `false` when there was
    /// nothing to delete.
    pub fn remove_document_directory(&self, path: &Path) -> Result<bool, StoreError> {
        match std::fs::remove_dir_all(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }

    /// Copies `source` into `directory` under its own file name.
    ///
    /// A file that is already inside `directory` is left alone. If another
    /// file already has the name, a numbered variant is used instead. The
    /// source is never removed here; see [`remove_file`](Self::remove_file).
    pub fn import(&self, source: &Path, directory: &Path) -> Result<PathBuf, StoreError> {
        let filename = source.file_name().ok_or_else(|| {
            StoreError::io(
                source,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "Invalid source filename"),
            )
        })?;

        self.ensure_directory(directory)?;

        let destination = directory.join(filename);
        if same_entry(source, &destination) {
            return Ok(destination);
        }

        let destination = self.resolve_conflict(directory, &filename.to_string_lossy())?;

        std::fs::copy(source, &destination).map_err(|e| StoreError::io(source, e))?;

        debug!(file = %redact_path(&destination), "Imported document");
        Ok(destination)
    }

    /// Deletes a single file: the original of a moved attachment, or a copy
    /// that has to be rolled back.
    pub fn remove_file(&self, path: &Path) -> Result<(), StoreError> {
        std::fs::remove_file(path).map_err(|e| StoreError::io(path, e))?;
        debug!(file = %redact_path(path), "Removed document");
        Ok(())
    }

    fn ensure_directory(&self, path: &Path) -> Result<(), StoreError> {
        if !path.exists() {
            std::fs::create_dir_all(path).map_err(|e| StoreError::io(path, e))?;
        }
        Ok(())
    }

    /// Resolves filename conflicts by finding an available name.
    fn resolve_conflict(&self, directory: &Path, filename: &str) -> Result<PathBuf, StoreError> {
        let path = directory.join(filename);

        // symlink_metadata also sees broken symlinks
        if std::fs::symlink_metadata(&path).is_err() {
            return Ok(path);
        }

        let (base, ext) = match filename.rfind('.') {
            Some(dot_pos) if dot_pos > 0 => (&filename[..dot_pos], Some(&filename[dot_pos..])),
            _ => (filename, None),
        };

        for counter in 2..=1000 {
            let new_filename = match ext {
                Some(ext) => format!("{}_{}{}", base, counter, ext),
                None => format!("{}_{}", base, counter),
            };

            let new_path = directory.join(&new_filename);
            if std::fs::symlink_metadata(&new_path).is_err() {
                return Ok(new_path);
            }
        }

        Err(StoreError::io(
            path,
            std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "no free file name in document directory",
            ),
        ))
    }
}
