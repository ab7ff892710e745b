//! Platform-specific metadata helpers.

use std::fs::Metadata;

/// Permission bits from metadata: `st_mode` without the file type (Unix).
#[cfg(unix)]
pub(crate) fn permission_bits(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o7777
}

/// Permission bits from metadata. Only the read-only flag is available.
#[cfg(not(unix))]
pub(crate) fn permission_bits(metadata: &Metadata) -> u32 {
    if metadata.permissions().readonly() {
        0o444
    } else {
        0o666
    }
}
