//! HTTP client wrapper for streaming downloads.
//!
//! This module provides the [`HttpClient`] struct which handles streamed
//! GETs to an explicit destination path, with timeout configuration and
//! cleanup of partial files on mid-stream failure.

use std::path::Path;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, instrument};
use url::Url;

use crate::user_agent;

use super::constants::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS};
use super::error::DownloadError;

/// HTTP client for downloading files with streaming support.
///
/// Designed to be created once and reused for every download in a run,
/// taking advantage of connection pooling.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// Creates a new HTTP client with default timeouts.
    ///
    /// Default configuration:
    /// - Connect timeout: 30 seconds
    /// - Read timeout: 5 minutes (for large files)
    /// - Gzip decompression: enabled
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    pub fn new() -> Self {
        Self::new_with_timeouts(CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS)
    }

    /// Creates a new HTTP client with explicit timeout values.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the supplied
    /// timeout configuration.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new_with_timeouts(connect_timeout_secs: u64, read_timeout_secs: u64) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .timeout(Duration::from_secs(read_timeout_secs))
            .gzip(true)
            .user_agent(user_agent::default_user_agent())
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self { client }
    }

    /// Downloads `url` to the exact destination path, streaming the body
    /// in chunks so large files are never buffered whole in memory.
    ///
    /// Returns the number of bytes written. A stream failure removes the
    /// partial file so a later run's exists-check stays sound.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError::HttpStatus`] when the server responds with
    /// a status other than 200, [`DownloadError::Network`] /
    /// [`DownloadError::Timeout`] for transport failures, and
    /// [`DownloadError::Io`] when the destination cannot be written.
    #[must_use = "download result contains the byte count"]
    #[instrument(skip(self), fields(url = %url, dest = %dest.display()))]
    pub async fn download_to_path(&self, url: &Url, dest: &Path) -> Result<u64, DownloadError> {
        debug!("starting download");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            if e.is_timeout() {
                DownloadError::timeout(url.as_str())
            } else {
                DownloadError::network(url.as_str(), e)
            }
        })?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(DownloadError::http_status(url.as_str(), status));
        }

        let mut file = File::create(dest)
            .await
            .map_err(|e| DownloadError::io(dest, e))?;

        let stream_result = stream_to_file(&mut file, response, url, dest).await;

        if stream_result.is_err() {
            debug!(path = %dest.display(), "cleaning up partial file after error");
            let _ = tokio::fs::remove_file(dest).await;
        }

        stream_result
    }

    /// Returns a reference to the underlying reqwest client.
    #[must_use]
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

/// Streams the response body to the file, returning bytes written.
///
/// Extracted so the caller can clean up the partial file on error.
async fn stream_to_file(
    file: &mut File,
    response: reqwest::Response,
    url: &Url,
    dest: &Path,
) -> Result<u64, DownloadError> {
    let mut writer = BufWriter::new(file);
    let mut stream = response.bytes_stream();
    let mut bytes_written: u64 = 0;

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|e| DownloadError::network(url.as_str(), e))?;

        writer
            .write_all(&chunk)
            .await
            .map_err(|e| DownloadError::io(dest, e))?;

        bytes_written += chunk.len() as u64;
    }

    // Ensure all data is flushed to disk
    writer
        .flush()
        .await
        .map_err(|e| DownloadError::io(dest, e))?;

    Ok(bytes_written)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_download_to_path_writes_body_bytes() {
        let mock_server = MockServer::start().await;
        let temp_dir = TempDir::new().unwrap();

        Mock::given(method("GET"))
            .and(path("/file.bin"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"file content here"))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new();
        let url = Url::parse(&format!("{}/file.bin", mock_server.uri())).unwrap();
        let dest = temp_dir.path().join("file.bin");

        let bytes = client.download_to_path(&url, &dest).await.unwrap();

        assert_eq!(bytes, 17);
        assert_eq!(std::fs::read(&dest).unwrap(), b"file content here");
    }

    #[tokio::test]
    async fn test_download_to_path_404_is_http_status_error() {
        let mock_server = MockServer::start().await;
        let temp_dir = TempDir::new().unwrap();

        Mock::given(method("GET"))
            .and(path("/missing.bin"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new();
        let url = Url::parse(&format!("{}/missing.bin", mock_server.uri())).unwrap();
        let dest = temp_dir.path().join("missing.bin");

        let result = client.download_to_path(&url, &dest).await;

        match result {
            Err(DownloadError::HttpStatus { status, .. }) => assert_eq!(status, 404),
            other => panic!("Expected HttpStatus error, got: {other:?}"),
        }
        assert!(!dest.exists(), "no file may be created on HTTP error");
    }

    #[tokio::test]
    async fn test_download_to_path_large_file_streams() {
        let mock_server = MockServer::start().await;
        let temp_dir = TempDir::new().unwrap();

        // 1MB body to verify streaming writes everything through
        let large_content = vec![0u8; 1024 * 1024];

        Mock::given(method("GET"))
            .and(path("/large.bin"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(large_content.clone()))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new();
        let url = Url::parse(&format!("{}/large.bin", mock_server.uri())).unwrap();
        let dest = temp_dir.path().join("large.bin");

        let bytes = client.download_to_path(&url, &dest).await.unwrap();

        assert_eq!(bytes, 1024 * 1024);
        assert_eq!(std::fs::metadata(&dest).unwrap().len(), 1024 * 1024);
    }

    #[tokio::test]
    async fn test_download_cleanup_on_read_timeout() {
        // Partial file must be removed when the stream fails mid-transfer
        let mock_server = MockServer::start().await;
        let temp_dir = TempDir::new().unwrap();

        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(b"data")
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&mock_server)
            .await;

        let client = HttpClient::new_with_timeouts(30, 1);
        let url = Url::parse(&format!("{}/slow", mock_server.uri())).unwrap();
        let dest = temp_dir.path().join("slow.bin");

        let result = client.download_to_path(&url, &dest).await;
        assert!(result.is_err(), "expected timeout or network error");
        assert!(
            !dest.exists(),
            "partial file must be cleaned up after stream error"
        );
    }

    #[tokio::test]
    async fn test_download_connection_refused_is_network_error() {
        let temp_dir = TempDir::new().unwrap();

        let client = HttpClient::new();
        // Port 1 is in the reserved range and nothing listens on it.
        let url = Url::parse("http://127.0.0.1:1/file.bin").unwrap();
        let dest = temp_dir.path().join("file.bin");

        let result = client.download_to_path(&url, &dest).await;

        assert!(
            matches!(
                result,
                Err(DownloadError::Network { .. } | DownloadError::Timeout { .. })
            ),
            "expected transport error, got: {result:?}"
        );
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn test_default_equivalent_to_new() {
        let mock_server = MockServer::start().await;
        let temp_dir = TempDir::new().unwrap();

        Mock::given(method("GET"))
            .and(path("/d.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"ok"))
            .mount(&mock_server)
            .await;

        let client = HttpClient::default();
        let url = Url::parse(&format!("{}/d.txt", mock_server.uri())).unwrap();
        let dest = temp_dir.path().join("d.txt");

        let result = client.download_to_path(&url, &dest).await;
        assert!(result.is_ok(), "Default client should work: {result:?}");
    }
}
