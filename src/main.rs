//! foldercrawl - list a directory with sizes and permissions.
//!
//! Usage:
//!   fcrawl [PATH]                 List the immediate children of PATH
//!   fcrawl [PATH] --subpaths      List the whole subtree
//!   fcrawl [PATH] --ds kb -s 10   Only entries of at least 10kb
//!   fcrawl --help                 Show help

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use foldercrawl_list::{CrawlConfig, Lister, Listing, SizeUnit};
use foldercrawl_scan::check_root;

#[derive(Parser)]
#[command(
    name = "fcrawl",
    version,
    about = "Crawl the supplied path and print every entry with its size and permissions",
    long_about = "fcrawl lists the entries of a directory together with their size and \
                  permission bits.\n\n\
                  Directories and anything else that is not a regular file are \
                  reported as 4kb."
)]
struct Cli {
    /// Path to crawl (defaults to the current directory)
    path: Option<PathBuf>,

    /// Crawl subdirectories too
    #[arg(long = "subpaths")]
    subpaths: bool,

    /// Size unit to display: b, kb, mb, gb, tb, pb or unbounded
    #[arg(long = "ds", visible_alias = "data-size", default_value = "unbounded")]
    data_size: SizeUnit,

    /// Minimum size to include, counted in each entry's own unit
    #[arg(short, long, default_value = "0")]
    size: u64,

    /// Directory to exclude together with all its subdirectories
    #[arg(long)]
    exclude: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let path = match cli.path {
        Some(path) => path,
        None => std::env::current_dir().context("Cannot read the current directory")?,
    };
    let root = check_root(&path).with_context(|| format!("Cannot crawl {}", path.display()))?;

    let exclude = cli
        .exclude
        .map(|exclude| {
            check_root(&exclude).with_context(|| format!("Cannot exclude {}", exclude.display()))
        })
        .transpose()?;

    announce(&root, cli.subpaths, exclude.as_deref());

    let config = CrawlConfig::builder()
        .root(root)
        .recursive(cli.subpaths)
        .exclude(exclude)
        .size_unit(cli.data_size)
        .min_size(cli.size)
        .build()
        .context("Invalid crawl configuration")?;

    let listing = Lister::new(config).crawl();

    match cli.format {
        OutputFormat::Text => print_listing(&listing),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&listing)?),
    }

    Ok(())
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Tell the user what is about to be crawled.
fn announce(root: &Path, subpaths: bool, exclude: Option<&Path>) {
    let scope = if subpaths { " with its subdirectories" } else { "" };
    match exclude {
        Some(exclude) => eprintln!(
            "About to search {}{} excluding {} and all its subdirectories",
            root.display(),
            scope,
            exclude.display()
        ),
        None => eprintln!("About to search {}{}", root.display(), scope),
    }
}

/// Print a listing as a tab separated table.
fn print_listing(listing: &Listing) {
    println!("Size\tPermissions\tFilePath");
    for entry in &listing.entries {
        println!(
            "{}\t{}\t{}",
            entry.display_size(),
            entry.permissions_string(),
            entry.path
        );
    }

    if !listing.is_empty() {
        println!();
        println!(
            "Scanned {} files in total ({})",
            listing.len(),
            format_size(listing.total_bytes())
        );
    }
    if listing.skipped > 0 {
        eprintln!(
            "{} entries could not be stat'd (missing or dangling link)",
            listing.skipped
        );
    }
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["fcrawl"]).unwrap();
        assert!(cli.path.is_none());
        assert!(!cli.subpaths);
        assert_eq!(cli.data_size, SizeUnit::Unbounded);
        assert_eq!(cli.size, 0);
        assert!(cli.exclude.is_none());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "fcrawl", "/srv", "--subpaths", "--ds", "KB", "-s", "12", "--exclude", "/srv/tmp",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("/srv")));
        assert!(cli.subpaths);
        assert_eq!(cli.data_size, SizeUnit::KB);
        assert_eq!(cli.size, 12);
        assert_eq!(cli.exclude, Some(PathBuf::from("/srv/tmp")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_rejects_unknown_unit() {
        assert!(Cli::try_parse_from(["fcrawl", "--ds", "zb"]).is_err());
    }
}
