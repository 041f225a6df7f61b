//! Link extraction against a single configured page.

use std::time::Duration;

use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, info, instrument};
use url::Url;

use crate::user_agent;

use super::error::ExtractError;
use super::record::LinkRecord;

/// Default connect timeout for the page GET (10 seconds).
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default read timeout for the page GET (30 seconds).
const READ_TIMEOUT_SECS: u64 = 30;

/// Fetches one page and extracts link records from it.
///
/// The base URL is fixed at construction; every [`extract`](Self::extract)
/// call performs exactly one GET against it. The extractor owns its own
/// HTTP client, tuned for page-sized responses, separate from the
/// streaming client used for downloads.
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    base_url: Url,
    client: Client,
}

impl LinkExtractor {
    /// Creates an extractor for the given base URL with default timeouts.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self::with_timeouts(base_url, CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS)
    }

    /// Creates an extractor with explicit timeout values.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the supplied
    /// timeout configuration.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn with_timeouts(base_url: Url, connect_timeout_secs: u64, read_timeout_secs: u64) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .timeout(Duration::from_secs(read_timeout_secs))
            .gzip(true)
            .user_agent(user_agent::default_user_agent())
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self { base_url, client }
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches the base page and returns the records for every `tag`
    /// element carrying an `href` attribute, in document order.
    ///
    /// `href_filter` is a plain substring match on the href value (not a
    /// pattern); `None` or an empty string keeps every link. No
    /// deduplication is performed and only the single configured page is
    /// fetched.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::HttpStatus`] when the page GET returns a
    /// status other than 200 (the body is not parsed in that case),
    /// [`ExtractError::Network`] / [`ExtractError::Timeout`] for transport
    /// failures, and [`ExtractError::Selector`] when `tag` is not a valid
    /// element name.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn extract(
        &self,
        tag: &str,
        href_filter: Option<&str>,
    ) -> Result<Vec<LinkRecord>, ExtractError> {
        debug!(tag, ?href_filter, "fetching page");

        let url = self.base_url.as_str();
        let response = self
            .client
            .get(self.base_url.clone())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ExtractError::timeout(url)
                } else {
                    ExtractError::network(url, e)
                }
            })?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(ExtractError::http_status(url, status));
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                ExtractError::timeout(url)
            } else {
                ExtractError::network(url, e)
            }
        })?;

        let records = collect_links(&body, tag, href_filter)?;
        info!(count = records.len(), tag, "extracted link records");
        Ok(records)
    }
}

/// Selects `tag` elements with an href and shapes them into records.
///
/// Parsing is synchronous and self-contained so the surrounding future
/// never holds the non-`Send` DOM across an await point.
fn collect_links(
    body: &str,
    tag: &str,
    href_filter: Option<&str>,
) -> Result<Vec<LinkRecord>, ExtractError> {
    let selector =
        Selector::parse(&format!("{tag}[href]")).map_err(|_| ExtractError::selector(tag))?;

    let document = Html::parse_document(body);
    let mut records = Vec::new();
    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if let Some(filter) = href_filter
            && !filter.is_empty()
            && !href.contains(filter)
        {
            continue;
        }
        let text = element.text().collect::<String>().trim().to_string();
        records.push(LinkRecord::new(href, text));
    }
    Ok(records)
}
