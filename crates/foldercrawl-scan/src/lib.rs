//! Directory enumeration for foldercrawl.
//!
//! # Overview
//!
//! `foldercrawl-scan` lists the entries under a directory and answers two
//! point queries about a path. Every operation is blocking and none of them
//! return errors:
//!
//! - [`DirectoryScanner::scan_shallow`] lists immediate children
//! - [`DirectoryScanner::scan_recursive`] lists the whole subtree via jwalk
//! - [`DirectoryScanner::entry_size`] falls back to 4096 bytes
//! - [`DirectoryScanner::entry_permissions`] falls back to 0
//!
//! Failures are still observable through [`ScanResult::is_degraded`] and
//! [`Probe::is_fallback`].
//!
//! # Example
//!
//! ```rust,no_run
//! use foldercrawl_scan::DirectoryScanner;
//!
//! let scanner = DirectoryScanner::new();
//! let result = scanner.scan_recursive("/tmp/d");
//!
//! for path in result.entries() {
//!     println!("{path} {} bytes", scanner.entry_size(path));
//! }
//! ```

mod probe;
mod scanner;

pub use scanner::{DirectoryScanner, FALLBACK_SIZE, NO_PERMISSIONS, check_root};

// Re-export core types for convenience
pub use foldercrawl_core::{Probe, ScanError, ScanResult, ScanWarning, WarningKind};
