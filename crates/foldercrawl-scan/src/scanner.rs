//! Directory enumeration.

use std::fs;
use std::path::{Path, PathBuf};

use jwalk::{Parallelism, WalkDir};

use foldercrawl_core::{Probe, ScanError, ScanResult, ScanWarning};

use crate::probe;

/// Size reported for anything that cannot be sized as a regular file.
pub const FALLBACK_SIZE: u64 = 4096;

/// Permission bits reported when a path cannot be stat'd.
pub const NO_PERMISSIONS: u32 = 0;

/// Blocking directory scanner.
///
/// None of the operations return errors. A root that cannot be opened yields
/// an empty [`ScanResult`]; an entry that fails mid-iteration is skipped.
/// Symbolic links are listed but never followed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryScanner;

impl DirectoryScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self
    }

    /// List the immediate children of `root`.
    pub fn scan_shallow(&self, root: impl Into<String>) -> ScanResult {
        let mut result = ScanResult::new(root);
        let root_path = PathBuf::from(result.root());

        let read_dir = match fs::read_dir(&root_path) {
            Ok(read_dir) => read_dir,
            Err(err) => {
                tracing::debug!(root = %root_path.display(), error = %err, "cannot open root");
                result.fail_root(ScanWarning::root_open(&root_path, &err));
                return result;
            }
        };

        for entry in read_dir {
            match entry {
                Ok(entry) => result.push(entry.path().to_string_lossy()),
                Err(err) => {
                    tracing::trace!(root = %root_path.display(), error = %err, "skipping entry");
                    result.record_skip(ScanWarning::skipped_entry(&root_path, err));
                }
            }
        }

        tracing::debug!(
            root = %root_path.display(),
            entries = result.len(),
            skipped = result.skipped().len(),
            "shallow scan finished"
        );
        result
    }

    /// List every file and directory below `root`, depth first.
    ///
    /// The root itself is not part of the entries.
    pub fn scan_recursive(&self, root: impl Into<String>) -> ScanResult {
        let mut result = ScanResult::new(root);
        let root_path = PathBuf::from(result.root());

        // jwalk reports an unreadable root as an ordinary item, so probe it first.
        if let Err(err) = fs::read_dir(&root_path) {
            tracing::debug!(root = %root_path.display(), error = %err, "cannot open root");
            result.fail_root(ScanWarning::root_open(&root_path, &err));
            return result;
        }

        let walker = WalkDir::new(&root_path)
            .parallelism(Parallelism::Serial)
            .skip_hidden(false)
            .follow_links(false)
            .min_depth(1);

        for entry_result in walker {
            match entry_result {
                Ok(entry) => {
                    let path = entry.path();
                    // An unreadable directory is still yielded; its contents are not.
                    if let Some(err) = &entry.read_children_error {
                        tracing::trace!(path = %path.display(), error = %err, "skipping subtree");
                        result.record_skip(ScanWarning::skipped_entry(&path, err));
                    }
                    result.push(path.to_string_lossy());
                }
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| root_path.clone());
                    tracing::trace!(path = %path.display(), error = %err, "skipping entry");
                    result.record_skip(ScanWarning::skipped_entry(path, err));
                }
            }
        }

        tracing::debug!(
            root = %root_path.display(),
            entries = result.len(),
            skipped = result.skipped().len(),
            "recursive scan finished"
        );
        result
    }

    /// Byte size of the file at `path`, or [`FALLBACK_SIZE`].
    pub fn entry_size(&self, path: impl AsRef<Path>) -> u64 {
        self.probe_size(path).value()
    }

    /// Byte size of the file at `path`, flagged when it is the fallback.
    pub fn probe_size(&self, path: impl AsRef<Path>) -> Probe<u64> {
        match fs::metadata(path.as_ref()) {
            Ok(metadata) if metadata.is_file() => Probe::measured(metadata.len()),
            _ => Probe::fallback(FALLBACK_SIZE),
        }
    }

    /// Permission bits of `path`, or [`NO_PERMISSIONS`].
    pub fn entry_permissions(&self, path: impl AsRef<Path>) -> u32 {
        self.probe_permissions(path).value()
    }

    /// Permission bits of `path`, flagged when they are the fallback.
    pub fn probe_permissions(&self, path: impl AsRef<Path>) -> Probe<u32> {
        match fs::metadata(path.as_ref()) {
            Ok(metadata) => Probe::measured(probe::permission_bits(&metadata)),
            Err(_) => Probe::fallback(NO_PERMISSIONS),
        }
    }
}

/// Validate that `path` is a readable directory and return its canonical form.
///
/// This is for callers that want to report a bad root up front; the scan
/// operations themselves never fail.
pub fn check_root(path: impl AsRef<Path>) -> Result<PathBuf, ScanError> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| ScanError::io(path, e))?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    fs::read_dir(path).map_err(|e| ScanError::io(path, e))?;
    path.canonicalize().map_err(|e| ScanError::io(path, e))
}
