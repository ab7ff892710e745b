//! Error types for scanning operations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while validating a crawl root.
///
/// The scan operations themselves never return these; they degrade to
/// empty results and record a [`ScanWarning`] instead.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Permission denied for a path.
    #[error("Invalid permissions to enumerate {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Folder {path} is invalid or missing")]
    NotFound { path: PathBuf },

    /// Path exists but is not a directory.
    #[error("{path} is not a directory")]
    NotADirectory { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::NotADirectory => Self::NotADirectory { path },
            _ => Self::Io { path, source },
        }
    }
}

/// Kind of scan warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// The root could not be opened; the whole result is empty.
    RootOpen,
    /// A single entry failed mid-iteration and was skipped.
    EntryIteration,
}

/// Non-fatal warning encountered during a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanWarning {
    /// Path where the warning occurred.
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl ScanWarning {
    /// Create a new scan warning.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    /// Create a root open warning from the underlying I/O error.
    pub fn root_open(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        let path = path.into();
        Self {
            message: format!("Cannot open {}: {error}", path.display()),
            path,
            kind: WarningKind::RootOpen,
        }
    }

    /// Create a warning for an entry skipped during iteration.
    pub fn skipped_entry(path: impl Into<PathBuf>, error: impl std::fmt::Display) -> Self {
        Self {
            path: path.into(),
            message: format!("Skipped entry: {error}"),
            kind: WarningKind::EntryIteration,
        }
    }
}
