//! CLI entry point for the harvester tool.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use harvester_core::{Downloader, HttpClient, LinkExtractor, LinkStore, RateLimiter};
use tracing::{debug, info};
use url::Url;

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");

    let base_url = Url::parse(&args.url)
        .with_context(|| format!("invalid page URL: {}", args.url))?;

    // Extraction failures (non-200, transport) are fatal for the run;
    // per-item download failures below are not.
    let extractor = LinkExtractor::new(base_url.clone());
    let records = extractor
        .extract(&args.tag, args.filter.as_deref())
        .await
        .context("failed to extract links from page")?;

    if records.is_empty() {
        info!("no matching links found on page");
        return Ok(());
    }

    info!(count = records.len(), "extracted links");

    if args.save_links {
        let links_dir = args.links_dir.as_deref().unwrap_or(&args.out_dir);
        let store = LinkStore::new();
        let path = store
            .save(&records, links_dir)
            .await
            .context("failed to save link records")?;
        info!(path = %path.display(), "saved link records");
    }

    if args.no_download {
        return Ok(());
    }

    let rate_limiter = if args.rate_limit == 0 {
        debug!("rate limiting disabled");
        Arc::new(RateLimiter::disabled())
    } else {
        debug!(rate_limit_ms = args.rate_limit, "rate limiting enabled");
        Arc::new(RateLimiter::new(Duration::from_millis(args.rate_limit)))
    };

    let downloader = Downloader::new(base_url, HttpClient::new(), rate_limiter);
    let stats = downloader
        .download_all(&records, &args.out_dir)
        .await
        .context("download run aborted")?;

    info!(
        completed = stats.completed(),
        failed = stats.failed(),
        skipped = stats.skipped(),
        total = stats.total(),
        "harvest complete"
    );

    Ok(())
}
