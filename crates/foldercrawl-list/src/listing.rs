//! Size and permission listing of scanned entries.

use std::path::Path;

use serde::Serialize;

use foldercrawl_core::{CrawlConfig, ScanResult, SizeUnit, permissions};
use foldercrawl_scan::DirectoryScanner;

/// One listed entry with its measured size and permission bits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedEntry {
    /// Entry path as produced by the scan.
    pub path: String,
    /// Size in bytes (4096 for anything that is not a regular file).
    pub bytes: u64,
    /// Unit the size is displayed in.
    pub unit: SizeUnit,
    /// Size expressed in `unit`, rounded down.
    pub scaled: u64,
    /// Raw permission bits.
    pub mode: u32,
}

impl ListedEntry {
    /// Build an entry from a path and its measurements.
    pub fn new(path: impl Into<String>, bytes: u64, mode: u32) -> Self {
        let unit = SizeUnit::classify(bytes);
        Self {
            path: path.into(),
            bytes,
            unit,
            scaled: unit.scale(bytes),
            mode,
        }
    }

    /// Size with its unit, e.g. `12kb`.
    pub fn display_size(&self) -> String {
        format!("{}{}", self.scaled, self.unit)
    }

    /// Permission bits as `rwxr-xr-x`.
    pub fn permissions_string(&self) -> String {
        permissions::to_rwx(self.mode)
    }
}

/// Result of describing a scan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Listing {
    /// Root that was scanned.
    pub root: String,
    /// Entries that passed every filter, in scan order.
    pub entries: Vec<ListedEntry>,
    /// Entries that could not be stat'd (missing or dangling link).
    pub skipped: usize,
}

impl Listing {
    /// Sum of listed entry sizes.
    pub fn total_bytes(&self) -> u64 {
        self.entries.iter().map(|e| e.bytes).sum()
    }

    /// Number of listed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was listed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Runs scans and turns them into filtered listings.
#[derive(Debug, Clone)]
pub struct Lister {
    config: CrawlConfig,
    scanner: DirectoryScanner,
}

impl Lister {
    /// Create a lister for the given configuration.
    pub fn new(config: CrawlConfig) -> Self {
        Self {
            config,
            scanner: DirectoryScanner::new(),
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    /// Scan the configured root and describe the result.
    pub fn crawl(&self) -> Listing {
        let root = self.config.root.to_string_lossy().into_owned();
        let result = if self.config.recursive {
            self.scanner.scan_recursive(root)
        } else {
            self.scanner.scan_shallow(root)
        };

        if result.is_degraded() {
            tracing::warn!(
                root = result.root(),
                root_failed = result.root_failed(),
                skipped = result.skipped().len(),
                "scan was incomplete"
            );
        }

        self.describe(&result)
    }

    /// Measure and filter every entry of a scan result.
    pub fn describe(&self, result: &ScanResult) -> Listing {
        let mut listing = Listing {
            root: result.root().to_string(),
            ..Listing::default()
        };

        for path in result {
            if self.config.is_excluded(Path::new(path)) {
                continue;
            }

            let mode = self.scanner.probe_permissions(path);
            if mode.is_fallback() {
                tracing::debug!(path = %path, "entry could not be stat'd (missing or dangling link)");
                listing.skipped += 1;
                continue;
            }

            let entry = ListedEntry::new(path.as_str(), self.scanner.entry_size(path), mode.value());
            if self.admits(&entry) {
                listing.entries.push(entry);
            }
        }

        listing
    }

    fn admits(&self, entry: &ListedEntry) -> bool {
        self.config.size_unit.admits(entry.unit) && entry.scaled >= self.config.min_size
    }
}
