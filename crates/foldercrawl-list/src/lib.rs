//! Listings for foldercrawl.
//!
//! Combines a directory scan with the size and permission probes of
//! `foldercrawl-scan`, then applies the exclusion, unit and minimum-size
//! filters from a [`CrawlConfig`].

mod listing;

pub use listing::{ListedEntry, Lister, Listing};

pub use foldercrawl_core::{CrawlConfig, SizeUnit};
