//! Scan results and point-query probes.

use serde::{Deserialize, Serialize};

use crate::error::ScanWarning;

/// Entries discovered under a root path.
///
/// `entries` is empty whenever the root could not be opened. The root is
/// kept exactly as the caller passed it, valid or not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    root: String,
    entries: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    root_failure: Option<ScanWarning>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    skipped: Vec<ScanWarning>,
}

impl ScanResult {
    /// Create an empty result for the given root.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// The queried root, as given.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Replace the recorded root.
    pub fn set_root(&mut self, root: impl Into<String>) {
        self.root = root.into();
    }

    /// Discovered entry paths in traversal order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Consume the result, keeping only the entry paths.
    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }

    /// Append a discovered entry.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// Drop all discovered entries. The root is kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate over the entry paths.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entries were found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mark the root as unopenable. Discards every entry collected so far.
    pub fn fail_root(&mut self, warning: ScanWarning) {
        self.entries.clear();
        self.root_failure = Some(warning);
    }

    /// Record an entry that was skipped during iteration.
    pub fn record_skip(&mut self, warning: ScanWarning) {
        self.skipped.push(warning);
    }

    /// Why the root could not be opened, if it could not.
    pub fn root_failure(&self) -> Option<&ScanWarning> {
        self.root_failure.as_ref()
    }

    /// Check if the root failed to open.
    pub fn root_failed(&self) -> bool {
        self.root_failure.is_some()
    }

    /// Entries skipped because of per-entry errors.
    pub fn skipped(&self) -> &[ScanWarning] {
        &self.skipped
    }

    /// Check if the result is anything less than a complete enumeration.
    pub fn is_degraded(&self) -> bool {
        self.root_failed() || !self.skipped.is_empty()
    }
}

impl<'a> IntoIterator for &'a ScanResult {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Outcome of a point query against a single path.
///
/// When the query fails, `value` holds a fixed sentinel and `fallback` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Probe<T> {
    value: T,
    fallback: bool,
}

impl<T: Copy> Probe<T> {
    /// A value that was actually measured.
    pub fn measured(value: T) -> Self {
        Self {
            value,
            fallback: false,
        }
    }

    /// A sentinel returned in place of a failed measurement.
    pub fn fallback(value: T) -> Self {
        Self {
            value,
            fallback: true,
        }
    }

    /// The measured value or the sentinel.
    pub fn value(&self) -> T {
        self.value
    }

    /// Check if the value is a sentinel.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// The value, only if it was measured.
    pub fn measured_value(&self) -> Option<T> {
        (!self.fallback).then_some(self.value)
    }
}
