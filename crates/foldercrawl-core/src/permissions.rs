//! Rendering of raw permission bits.

const CLASSES: [u32; 3] = [6, 3, 0];

/// Render the owner/group/other bits of `mode` as `rwxr-xr-x`.
///
/// Bits above the low nine (setuid, sticky, file type) are ignored.
pub fn to_rwx(mode: u32) -> String {
    let mut out = String::with_capacity(9);
    for shift in CLASSES {
        let bits = (mode >> shift) & 0o7;
        out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
        out.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    }
    out
}
