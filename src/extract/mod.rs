//! Page fetch and link extraction.
//!
//! This module provides the [`LinkExtractor`], which performs one HTTP GET
//! against a configured base URL, parses the response body as HTML, and
//! returns one [`LinkRecord`] per element matching a tag name that carries
//! an `href` attribute, optionally filtered by an href substring.
//!
//! # Example
//!
//! ```no_run
//! use harvester_core::extract::LinkExtractor;
//! use url::Url;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let base = Url::parse("https://example.com/reports/")?;
//! let extractor = LinkExtractor::new(base);
//! let records = extractor.extract("a", Some(".pdf")).await?;
//! for record in &records {
//!     println!("{} -> {}", record.text, record.link);
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod extractor;
mod record;

pub use error::ExtractError;
pub use extractor::LinkExtractor;
pub use record::LinkRecord;
