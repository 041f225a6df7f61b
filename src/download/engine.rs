//! Sequential download loop over extracted link records.
//!
//! The [`Downloader`] walks the record list in order. Per-item failures
//! (bad HTTP status, transport errors, unusable filenames, unjoinable
//! hrefs) are recorded in the failure log and skipped; the loop never
//! aborts for them. Filesystem failures are fatal and propagate.
//!
//! # Resumability
//!
//! A record whose destination file already exists is skipped without an
//! HTTP call, so re-running the same batch picks up where a previous run
//! left off. That exists-check is the only dedup mechanism; it is
//! filename-based, not content-based.

use std::path::Path;
use std::sync::Arc;

use tokio::time::Instant;
use tracing::{debug, info, instrument};
use url::Url;

use crate::extract::LinkRecord;

use super::client::HttpClient;
use super::error::DownloadError;
use super::failure_log::FailureLog;
use super::filename::sanitize_filename;
use super::rate_limiter::RateLimiter;

/// Statistics from a download batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DownloadStats {
    completed: usize,
    failed: usize,
    skipped: usize,
}

impl DownloadStats {
    /// Creates a new stats tracker with zero counts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of successfully completed downloads.
    #[must_use]
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Returns the number of failed downloads.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Returns the number of records skipped because the destination
    /// file already existed.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Returns the total number of records processed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.completed + self.failed + self.skipped
    }
}

/// Outcome of a single record's processing.
enum Outcome {
    Completed,
    Failed,
    Skipped,
}

/// Sequential downloader for extracted link records.
///
/// Each record's href is resolved against the base URL and streamed to a
/// file named after the record's sanitized display text. One record is in
/// flight at a time; the rate limiter paces successive requests.
#[derive(Debug)]
pub struct Downloader {
    base_url: Url,
    client: HttpClient,
    rate_limiter: Arc<RateLimiter>,
    failure_log: FailureLog,
}

impl Downloader {
    /// Creates a downloader resolving records against `base_url`, with
    /// the default failure log filename.
    #[must_use]
    pub fn new(base_url: Url, client: HttpClient, rate_limiter: Arc<RateLimiter>) -> Self {
        Self {
            base_url,
            client,
            rate_limiter,
            failure_log: FailureLog::new(),
        }
    }

    /// Replaces the failure log (custom filename for tests/callers).
    #[must_use]
    pub fn with_failure_log(mut self, failure_log: FailureLog) -> Self {
        self.failure_log = failure_log;
        self
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Downloads every record into `directory`, strictly in order.
    ///
    /// The directory is created if absent. Per-item failures are appended
    /// to the failure log inside `directory` and the loop continues; see
    /// the module docs for the full failure policy.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError::Io`] when the directory cannot be created
    /// or the failure log cannot be written. Individual download failures
    /// do NOT cause this method to error; they are counted in the stats.
    #[instrument(skip(self, records), fields(count = records.len(), directory = %directory.display()))]
    pub async fn download_all(
        &self,
        records: &[LinkRecord],
        directory: &Path,
    ) -> Result<DownloadStats, DownloadError> {
        tokio::fs::create_dir_all(directory)
            .await
            .map_err(|e| DownloadError::io(directory, e))?;

        let mut stats = DownloadStats::new();
        info!(count = records.len(), "starting downloads");

        for record in records {
            match self.download_one(record, directory).await? {
                Outcome::Completed => stats.completed += 1,
                Outcome::Failed => stats.failed += 1,
                Outcome::Skipped => stats.skipped += 1,
            }
        }

        info!(
            completed = stats.completed,
            failed = stats.failed,
            skipped = stats.skipped,
            "downloads complete"
        );
        Ok(stats)
    }

    /// Processes a single record.
    ///
    /// Returns `Err` only for failure-log write errors; every download
    /// failure is converted into `Outcome::Failed` after being logged.
    async fn download_one(
        &self,
        record: &LinkRecord,
        directory: &Path,
    ) -> Result<Outcome, DownloadError> {
        let filename = sanitize_filename(&record.text);
        if filename.is_empty() {
            let error = DownloadError::unsafe_filename(&record.text);
            self.failure_log
                .record(directory, record.text.trim(), &failure_message(&error))
                .await?;
            return Ok(Outcome::Failed);
        }

        let dest = directory.join(&filename);
        if is_regular_file(&dest).await {
            info!(filename = %filename, "already exists, skipping");
            return Ok(Outcome::Skipped);
        }

        let url = match self.base_url.join(&record.link) {
            Ok(url) => url,
            Err(_) => {
                let error = DownloadError::invalid_url(&record.link);
                self.failure_log
                    .record(directory, &filename, &failure_message(&error))
                    .await?;
                return Ok(Outcome::Failed);
            }
        };

        self.rate_limiter.acquire(&url).await;

        debug!(url = %url, dest = %dest.display(), "downloading record");
        let started = Instant::now();
        match self.client.download_to_path(&url, &dest).await {
            Ok(bytes) => {
                let elapsed = started.elapsed();
                info!(
                    path = %dest.display(),
                    bytes,
                    elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
                    "download complete"
                );
                Ok(Outcome::Completed)
            }
            Err(error) => {
                self.failure_log
                    .record(directory, &filename, &failure_message(&error))
                    .await?;
                Ok(Outcome::Failed)
            }
        }
    }
}

/// Failure-log message for a download error.
///
/// HTTP failures log the bare status code; everything else logs the
/// error's own description.
fn failure_message(error: &DownloadError) -> String {
    match error {
        DownloadError::HttpStatus { status, .. } => format!("HTTP status {status}"),
        other => other.to_string(),
    }
}

/// True when a regular file (not a directory) exists at `path`.
async fn is_regular_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_http_status_is_bare_code() {
        let error = DownloadError::http_status("https://example.com/a.pdf", 404);
        assert_eq!(failure_message(&error), "HTTP status 404");
    }

    #[test]
    fn test_failure_message_other_errors_use_display() {
        let error = DownloadError::timeout("https://example.com/a.pdf");
        let msg = failure_message(&error);
        assert!(msg.contains("timeout"), "got: {msg}");
    }

    #[test]
    fn test_download_stats_totals() {
        let stats = DownloadStats {
            completed: 2,
            failed: 1,
            skipped: 3,
        };
        assert_eq!(stats.completed(), 2);
        assert_eq!(stats.failed(), 1);
        assert_eq!(stats.skipped(), 3);
        assert_eq!(stats.total(), 6);
    }

    #[test]
    fn test_is_regular_file_distinguishes_dirs() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let file = temp_dir.path().join("f");
        std::fs::write(&file, b"x").unwrap();

        assert!(tokio_test::block_on(is_regular_file(&file)));
        assert!(!tokio_test::block_on(is_regular_file(temp_dir.path())));
        assert!(!tokio_test::block_on(is_regular_file(
            &temp_dir.path().join("missing")
        )));
    }
}
