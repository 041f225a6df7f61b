//! Constants for the download module (timeouts, pacing, filenames).

use std::time::Duration;

/// Default HTTP connect timeout (30 seconds).
pub const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default HTTP read timeout (5 minutes for large files).
pub const READ_TIMEOUT_SECS: u64 = 300;

/// Default minimum delay between requests to the same host.
pub const DEFAULT_REQUEST_PAUSE: Duration = Duration::from_millis(1000);

/// Default filename for the per-item failure log.
pub const FAILURE_LOG_FILENAME: &str = "wronglog.txt";
