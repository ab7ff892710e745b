//! Crawl configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::size::SizeUnit;

/// Configuration for a crawl and the listing built from it.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct CrawlConfig {
    /// Root path to crawl.
    pub root: PathBuf,

    /// Descend into subdirectories.
    #[builder(default = "false")]
    #[serde(default)]
    pub recursive: bool,

    /// Directory whose subtree is left out of the listing.
    #[builder(default)]
    #[serde(default)]
    pub exclude: Option<PathBuf>,

    /// Only list entries of this unit.
    #[builder(default)]
    #[serde(default)]
    pub size_unit: SizeUnit,

    /// Minimum size, counted in each entry's own unit.
    #[builder(default = "0")]
    #[serde(default)]
    pub min_size: u64,
}

impl CrawlConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref root) = self.root {
            if root.as_os_str().is_empty() {
                return Err("Root path cannot be empty".to_string());
            }
        } else {
            return Err("Root path is required".to_string());
        }
        Ok(())
    }
}

impl CrawlConfig {
    /// Create a new crawl config builder.
    pub fn builder() -> CrawlConfigBuilder {
        CrawlConfigBuilder::default()
    }

    /// Create a shallow, unfiltered config for a path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            recursive: false,
            exclude: None,
            size_unit: SizeUnit::Unbounded,
            min_size: 0,
        }
    }

    /// Check if `path` falls inside the excluded subtree.
    pub fn is_excluded(&self, path: &std::path::Path) -> bool {
        self.exclude
            .as_deref()
            .is_some_and(|exclude| path.starts_with(exclude))
    }
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
