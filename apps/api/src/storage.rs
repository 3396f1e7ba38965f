//! Filesystem store for uploaded portrait photos.
//!
//! Photos are the only binary artifacts the system keeps. They live under a
//! single configured directory with uuid-based names; the relative file name
//! is what gets persisted on `personal_information.photo_path`.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Clone)]
pub struct PhotoStore {
    root: PathBuf,
}

impl PhotoStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Writes photo bytes under a fresh uuid name and returns the stored
    /// relative path. The write goes through a temp file in the same
    /// directory so a crash never leaves a half-written photo behind.
    pub fn store(&self, bytes: &[u8], extension: &str) -> Result<String, AppError> {
        std::fs::create_dir_all(&self.root)
            .map_err(|e| AppError::Storage(format!("create photo dir: {e}")))?;

        let name = format!("{}.{}", Uuid::new_v4(), extension);
        let path = self.root.join(&name);

        let mut tmp = tempfile::NamedTempFile::new_in(&self.root)
            .map_err(|e| AppError::Storage(format!("create temp photo file: {e}")))?;
        tmp.write_all(bytes)
            .map_err(|e| AppError::Storage(format!("write photo bytes: {e}")))?;
        tmp.persist(&path)
            .map_err(|e| AppError::Storage(format!("persist photo file: {e}")))?;

        info!("Stored photo {name} ({} bytes)", bytes.len());
        Ok(name)
    }

    /// Reads a previously stored photo. Callers treat failures as
    /// non-fatal — the file may have been removed externally.
    pub fn read(&self, stored_path: &str) -> std::io::Result<Vec<u8>> {
        std::fs::read(self.resolve(stored_path))
    }

    /// Removes a stored photo. Used on transaction rollback and on
    /// document deletion so orphaned files do not accumulate.
    pub fn remove(&self, stored_path: &str) {
        let path = self.resolve(stored_path);
        if let Err(e) = std::fs::remove_file(&path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to remove photo {}: {e}", path.display());
            }
        }
    }

    fn resolve(&self, stored_path: &str) -> PathBuf {
        // Stored paths are bare uuid file names; strip any directory
        // components so a crafted path cannot escape the root.
        let name = Path::new(stored_path)
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        self.root.join(name)
    }
}
