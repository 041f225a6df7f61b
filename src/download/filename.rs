//! Filename sanitization for link text used as destination filenames.
//!
//! Link text comes straight from a remote page and is untrusted input; it
//! must be normalized before it crosses into the filesystem as a path
//! segment.

/// Sanitizes link text for use as a single filename segment.
///
/// Replaces characters that are invalid on common filesystems
/// (`/ \ : * ? " < > |`) and control characters with `_`, and trims
/// surrounding whitespace. Returns an empty string when nothing usable
/// remains (empty input, whitespace only, or dot/underscore-only names
/// such as `.` and `..`) — callers treat that as a rejected filename.
#[must_use]
pub fn sanitize_filename(text: &str) -> String {
    let sanitized: String = text
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    // Reject names with no distinguishing characters: empty, ".", "..",
    // and pure separator residue would alias or escape directory entries.
    if sanitized
        .chars()
        .all(|c| matches!(c, '.' | '_') || c.is_whitespace())
    {
        return String::new();
    }

    sanitized
}
