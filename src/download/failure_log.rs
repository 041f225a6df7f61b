//! Append-only failure log for per-item download errors.

use std::path::Path;

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::warn;

use super::constants::FAILURE_LOG_FILENAME;
use super::error::DownloadError;

/// Records one line per failed download in a plain-text log file.
///
/// The file lives inside the download directory, is appended to (never
/// rotated or truncated), and is opened, written, and closed once per
/// failure. The filename is configurable at construction so tests can
/// redirect output deterministically.
#[derive(Debug, Clone)]
pub struct FailureLog {
    filename: String,
}

impl Default for FailureLog {
    fn default() -> Self {
        Self::new()
    }
}

impl FailureLog {
    /// Creates a failure log writing to the default `wronglog.txt`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            filename: FAILURE_LOG_FILENAME.to_string(),
        }
    }

    /// Creates a failure log writing to a custom filename.
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

    /// Appends a failure line for `filename` and emits the same
    /// information as a warning log line.
    ///
    /// Line format: `downloading {filename} failed, error message: {message}`.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError::Io`] when the log file cannot be opened or
    /// written; the caller treats that as fatal rather than losing the
    /// failure record silently.
    pub async fn record(
        &self,
        directory: &Path,
        filename: &str,
        message: &str,
    ) -> Result<(), DownloadError> {
        let path = directory.join(&self.filename);
        let line = format!("downloading {filename} failed, error message: {message}\n");

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|e| DownloadError::io(path.clone(), e))?;
        file.write_all(line.as_bytes())
            .await
            .map_err(|e| DownloadError::io(path, e))?;

        warn!(filename, message, "download failed");
        Ok(())
    }
}
