//! YAML persistence for extracted link records.
//!
//! [`LinkStore`] serializes a slice of [`LinkRecord`]s to a YAML sequence
//! of `{link, text}` mappings inside a target directory, creating the
//! directory if absent. The write overwrites any existing file at that
//! path; there is no atomic rename, so a failure mid-write can leave a
//! truncated file (kept for on-disk compatibility with prior runs).

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::extract::LinkRecord;

/// Default filename for the persisted link records.
pub const LINKS_FILENAME: &str = "links.yaml";

/// Errors that can occur while persisting link records.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File system error creating the directory or writing the file.
    #[error("IO error writing {path}: {source}")]
    Io {
        /// The path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Serialization of the record sequence failed.
    #[error("failed to serialize link records: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

impl StoreError {
    /// Creates an IO error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Writes link records to a YAML file inside a target directory.
///
/// The filename is configurable at construction so tests and callers can
/// redirect output deterministically; the directory is supplied per call.
#[derive(Debug, Clone)]
pub struct LinkStore {
    filename: String,
}

impl Default for LinkStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkStore {
    /// Creates a store writing to the default `links.yaml` filename.
    #[must_use]
    pub fn new() -> Self {
        Self {
            filename: LINKS_FILENAME.to_string(),
        }
    }

    /// Creates a store writing to a custom filename.
    #[must_use]
    pub fn with_filename(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
        }
    }

    /// Returns the configured filename.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Serializes `records` to `<directory>/<filename>`, creating the
    /// directory (including parents) if it does not exist.
    ///
    /// Repeated calls with the same input produce byte-identical output.
    /// Returns the path of the written file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when the directory cannot be created or
    /// the file cannot be written, and [`StoreError::Serialize`] when the
    /// records cannot be serialized.
    #[instrument(skip(self, records), fields(count = records.len(), directory = %directory.display()))]
    pub async fn save(
        &self,
        records: &[LinkRecord],
        directory: &Path,
    ) -> Result<PathBuf, StoreError> {
        tokio::fs::create_dir_all(directory)
            .await
            .map_err(|e| StoreError::io(directory, e))?;

        let yaml = serde_yaml::to_string(records)?;
        let path = directory.join(&self.filename);
        debug!(path = %path.display(), bytes = yaml.len(), "writing link records");

        tokio::fs::write(&path, yaml)
            .await
            .map_err(|e| StoreError::io(path.clone(), e))?;

        info!(path = %path.display(), count = records.len(), "saved link records");
        Ok(path)
    }
}
