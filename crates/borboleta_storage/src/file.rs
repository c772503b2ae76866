//! JSON-file-backed counter.

use crate::VisitRecord;
use borboleta_error::{BorboletaResult, JsonError, StorageError, StorageErrorKind};
use borboleta_interface::VisitCounter;
use chrono::Utc;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Name of the record inside the data directory.
pub const VISITS_FILE_NAME: &str = "visits.json";

/// Counter persisted as `{data_dir}/visits.json`.
///
/// The directory is created on first write. A missing file counts as zero
/// visits; a file that does not parse is reported, never overwritten.
///
/// Writes go to a temporary sibling first and are renamed into place.
#[derive(Debug)]
pub struct FileVisitCounter {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileVisitCounter {
    /// Counter stored under `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(VISITS_FILE_NAME),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the record.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored record; a missing file yields the empty record.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> BorboletaResult<VisitRecord> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No visit record yet");
                return Ok(VisitRecord::default());
            }
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
                .into());
            }
        };

        serde_json::from_str(&raw).map_err(|e| {
            tracing::error!(error = %e, "Visit record does not parse");
            StorageError::new(StorageErrorKind::Corrupt(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
            .into()
        })
    }

    fn store(&self, record: &VisitRecord) -> BorboletaResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        let body = serde_json::to_string_pretty(record)
            .map_err(|e| JsonError::new(format!("Failed to serialize visit record: {}", e)))?;

        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, body).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;
        std::fs::rename(&temp_path, &self.path).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            )))
        })?;
        Ok(())
    }
}

impl VisitCounter for FileVisitCounter {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn increment(&self) -> BorboletaResult<u64> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let record = self.load()?.bump(Utc::now());
        self.store(&record)?;

        tracing::info!(total = record.count(), "Visit recorded");
        Ok(record.count())
    }

    fn current(&self) -> BorboletaResult<u64> {
        Ok(self.load()?.count())
    }
}
