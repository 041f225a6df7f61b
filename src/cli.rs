//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Fetch a web page, harvest matching links, and download the linked files.
///
/// Harvester fetches one page, extracts every element of the given tag
/// carrying an href (optionally filtered by an href substring), can save
/// the records to a YAML file, and downloads each target sequentially.
#[derive(Parser, Debug)]
#[command(name = "harvester")]
#[command(author, version, about)]
pub struct Args {
    /// Page URL to fetch links from
    pub url: String,

    /// HTML tag to select (elements without an href are ignored)
    #[arg(short, long, default_value = "a")]
    pub tag: String,

    /// Keep only links whose href contains this substring
    #[arg(short = 'f', long)]
    pub filter: Option<String>,

    /// Directory for downloaded files
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Also write the extracted records to a links.yaml file
    #[arg(long)]
    pub save_links: bool,

    /// Directory for the links file (defaults to the download directory)
    #[arg(long, requires = "save_links")]
    pub links_dir: Option<PathBuf>,

    /// Extract (and optionally save) links without downloading anything
    #[arg(long)]
    pub no_download: bool,

    /// Minimum delay between requests to the same host in milliseconds (0 to disable, max 60000)
    #[arg(short = 'l', long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(0..=60000))]
    pub rate_limit: u64,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}
