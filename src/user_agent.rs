//! Shared User-Agent string for the page-fetch and download HTTP clients.
//!
//! Single source for the UA format so both kinds of traffic stay consistent
//! and easy to update.

/// Default User-Agent identifying the tool (shared by both clients).
#[must_use]
pub(crate) fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("harvester/{version} (link-archival-tool)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_contains_crate_version() {
        let ua = default_user_agent();
        assert!(ua.starts_with("harvester/"), "UA must identify the tool");
        assert!(
            ua.contains(env!("CARGO_PKG_VERSION")),
            "UA must contain crate version"
        );
    }
}
