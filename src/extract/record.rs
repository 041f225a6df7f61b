//! The link record produced by extraction and consumed by store/download.

use serde::{Deserialize, Serialize};

/// A single extracted hyperlink: the href value plus its display text.
///
/// `link` may be relative; it is resolved against the base URL only at
/// download time. `text` doubles as the destination filename for the
/// download step (after sanitization). Records are immutable once created.
///
/// Field order matters for the on-disk YAML shape: each record serializes
/// as a mapping with `link` first, then `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// The href attribute value, verbatim (possibly relative).
    pub link: String,
    /// The element's text content, surrounding whitespace trimmed.
    pub text: String,
}

impl LinkRecord {
    /// Creates a new record from an href value and display text.
    #[must_use]
    pub fn new(link: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            text: text.into(),
        }
    }
}
