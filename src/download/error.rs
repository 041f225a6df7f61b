//! Error types for the download module.
//!
//! This module defines structured errors for all download operations,
//! providing context-rich error messages for the failure log and for
//! debugging.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during file downloads.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Network-level error (DNS resolution, connection refused, TLS errors,
    /// mid-stream body failures, etc.)
    #[error("network error downloading {url}: {source}")]
    Network {
        /// The URL that failed to download.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out before completion.
    #[error("timeout downloading {url}")]
    Timeout {
        /// The URL that timed out.
        url: String,
    },

    /// The download GET returned a status other than 200.
    #[error("HTTP {status} downloading {url}")]
    HttpStatus {
        /// The URL that returned an unexpected status.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// File system error during download (create file, write, log append).
    #[error("IO error writing to {path}: {source}")]
    Io {
        /// The file path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The record's href cannot be resolved against the base URL.
    #[error("cannot resolve link against base URL: {link}")]
    InvalidUrl {
        /// The href value that failed to resolve.
        link: String,
    },

    /// The record's display text yields no usable destination filename.
    #[error("unsafe destination filename from link text: {text:?}")]
    UnsafeFilename {
        /// The original link text.
        text: String,
    },
}

impl DownloadError {
    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates a timeout error.
    pub fn timeout(url: impl Into<String>) -> Self {
        Self::Timeout { url: url.into() }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid URL error for an unresolvable href.
    pub fn invalid_url(link: impl Into<String>) -> Self {
        Self::InvalidUrl { link: link.into() }
    }

    /// Creates an unsafe filename error for unusable link text.
    pub fn unsafe_filename(text: impl Into<String>) -> Self {
        Self::UnsafeFilename { text: text.into() }
    }
}

// Note on From trait implementations:
// There is intentionally no `From<reqwest::Error>` or `From<std::io::Error>`
// because the variants require context (url, path) that the source errors
// don't provide. The helper constructors are the supported pattern.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_display() {
        let error = DownloadError::http_status("https://example.com/file.pdf", 404);
        let msg = error.to_string();
        assert!(msg.contains("404"), "Expected '404' in: {msg}");
        assert!(
            msg.contains("https://example.com/file.pdf"),
            "Expected URL in: {msg}"
        );
    }

    #[test]
    fn test_timeout_display() {
        let error = DownloadError::timeout("https://example.com/file.pdf");
        let msg = error.to_string();
        assert!(msg.contains("timeout"), "Expected 'timeout' in: {msg}");
        assert!(msg.contains("file.pdf"), "Expected URL in: {msg}");
    }

    #[test]
    fn test_io_display_includes_path() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error = DownloadError::io(PathBuf::from("/tmp/test.pdf"), io_error);
        let msg = error.to_string();
        assert!(msg.contains("/tmp/test.pdf"), "Expected path in: {msg}");
    }

    #[test]
    fn test_invalid_url_display_includes_link() {
        let error = DownloadError::invalid_url("ht!tp://??");
        let msg = error.to_string();
        assert!(msg.contains("cannot resolve"), "got: {msg}");
        assert!(msg.contains("ht!tp://??"), "Expected link in: {msg}");
    }

    #[test]
    fn test_unsafe_filename_display_includes_text() {
        let error = DownloadError::unsafe_filename("..");
        let msg = error.to_string();
        assert!(msg.contains("unsafe destination filename"), "got: {msg}");
        assert!(msg.contains(".."), "Expected text in: {msg}");
    }
}
