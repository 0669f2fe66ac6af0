//! In-place application of a patch table to a packet buffer.

use airfuzz_errors::PassError;
use tracing::warn;

use crate::table::PatchTable;

/// Outcome of one apply pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Writes that landed in the buffer
    pub written: usize,
    /// Writes skipped because the offset was at or beyond the buffer length
    pub skipped: usize,
}

impl ApplyReport {
    /// Whether at least one byte was written.
    #[must_use]
    pub fn mutated(&self) -> bool {
        self.written > 0
    }

    /// Total entries the table listed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.written + self.skipped
    }
}

/// Apply `table` to `buf` in place.
///
/// For each entry in table order: when `offset < buf.len()` the byte is
/// overwritten; otherwise that single write is skipped with a warning and the
/// pass continues. The buffer length never changes, identical inputs always
/// yield identical output bytes, and applying the same table twice is
/// idempotent.
pub fn apply(buf: &mut [u8], table: &PatchTable) -> ApplyReport {
    let mut report = ApplyReport::default();
    for entry in table {
        match buf.get_mut(entry.offset) {
            Some(byte) => {
                *byte = entry.value;
                report.written += 1;
            }
            None => {
                warn!(
                    offset = entry.offset,
                    buffer_len = buf.len(),
                    code = PassError::OutOfRangeWrite.code(),
                    "patch offset out of range, write skipped"
                );
                report.skipped += 1;
            }
        }
    }
    report
}
