//! Error types for page fetch and link extraction.

use thiserror::Error;

/// Errors that can occur while fetching and parsing the base page.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Network-level error (DNS resolution, connection refused, TLS errors, etc.)
    #[error("network error fetching {url}: {source}")]
    Network {
        /// The URL that failed to fetch.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out before the page was received.
    #[error("timeout fetching {url}")]
    Timeout {
        /// The URL that timed out.
        url: String,
    },

    /// The page GET returned a status other than 200.
    ///
    /// The body is not parsed in this case; the caller decides what to do.
    #[error("HTTP {status} fetching {url}")]
    HttpStatus {
        /// The URL that returned an unexpected status.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The tag name does not form a valid element selector.
    #[error("invalid tag selector: {tag}")]
    Selector {
        /// The tag name that failed to parse.
        tag: String,
    },
}

impl ExtractError {
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

    /// Creates a selector error for an unusable tag name.
    pub fn selector(tag: impl Into<String>) -> Self {
        Self::Selector { tag: tag.into() }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_display_includes_status_and_url() {
        let error = ExtractError::http_status("https://example.com/list", 503);
        let msg = error.to_string();
        assert!(msg.contains("503"), "Expected '503' in: {msg}");
        assert!(
            msg.contains("https://example.com/list"),
            "Expected URL in: {msg}"
        );
    }

    #[test]
    fn test_timeout_display_includes_url() {
        let error = ExtractError::timeout("https://example.com/list");
        let msg = error.to_string();
        assert!(msg.contains("timeout"), "Expected 'timeout' in: {msg}");
        assert!(msg.contains("example.com"), "Expected URL in: {msg}");
    }

    #[test]
    fn test_selector_display_includes_tag() {
        let error = ExtractError::selector("not a tag");
        let msg = error.to_string();
        assert!(msg.contains("invalid tag selector"), "got: {msg}");
        assert!(msg.contains("not a tag"), "Expected tag in: {msg}");
    }
}
