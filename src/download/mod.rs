//! HTTP download loop for streaming linked files to disk.
//!
//! This module provides the sequential [`Downloader`], which walks a list
//! of link records, resolves each href against the base URL, and streams
//! the response body to a file named after the record's display text.
//!
//! # Features
//!
//! - Streaming downloads (memory-efficient for large files)
//! - Filename sanitization of untrusted page text
//! - Skip-if-exists dedup that makes re-invocation resumable
//! - Per-item failure logging to an append-only `wronglog.txt`
//! - Injectable per-host rate limiting between requests
//! - Configurable timeouts (30s connect, 5min read by default)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use harvester_core::download::{Downloader, HttpClient, RateLimiter};
//! use harvester_core::extract::LinkRecord;
//! use url::Url;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let base = Url::parse("https://example.com/reports/")?;
//! let limiter = Arc::new(RateLimiter::new(Duration::from_secs(1)));
//! let downloader = Downloader::new(base, HttpClient::new(), limiter);
//!
//! let records = vec![LinkRecord::new("a.pdf", "Report A")];
//! let stats = downloader.download_all(&records, Path::new("./downloads")).await?;
//! println!("completed: {}, failed: {}, skipped: {}",
//!     stats.completed(), stats.failed(), stats.skipped());
//! # Ok(())
//! # }
//! ```

mod client;
pub mod constants;
mod engine;
mod error;
mod failure_log;
mod filename;
pub mod rate_limiter;

pub use client::HttpClient;
pub use engine::{DownloadStats, Downloader};
pub use error::DownloadError;
pub use failure_log::FailureLog;
pub use filename::sanitize_filename;
pub use rate_limiter::RateLimiter;
