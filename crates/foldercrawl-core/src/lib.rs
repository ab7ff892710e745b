//! Core types for foldercrawl.
//!
//! This crate provides the data structures shared by the scanner, the
//! listing layer and the CLI: scan results, probes, errors and configuration.

mod config;
mod error;
pub mod permissions;
mod result;
mod size;

pub use config::{CrawlConfig, CrawlConfigBuilder};
pub use error::{ScanError, ScanWarning, WarningKind};
pub use result::{Probe, ScanResult};
pub use size::SizeUnit;
