//! Single byte overwrite.

use serde::{Deserialize, Serialize};

/// One `(offset, value)` byte overwrite.
///
/// The offset is a byte index into the raw packet buffer. Declarative module
/// specs list entries either as structs or as two-element arrays:
///
/// ```
/// use airfuzz_patch::PatchEntry;
///
/// let entry: PatchEntry = serde_json::from_str(r#"{"offset": 75, "value": 9}"#).unwrap();
/// assert_eq!(entry, PatchEntry::new(75, 0x09));
///
/// let entry: PatchEntry = serde_json::from_str("[75, 9]").unwrap();
/// assert_eq!(entry, PatchEntry::new(75, 0x09));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "PatchEntryRepr", into = "PatchEntryRepr")]
pub struct PatchEntry {
    /// Byte index into the packet buffer
    pub offset: usize,
    /// Replacement byte
    pub value: u8,
}

impl PatchEntry {
    /// Create a patch entry.
    #[must_use]
    pub fn new(offset: usize, value: u8) -> Self {
        Self { offset, value }
    }
}

/// Accepts both the struct and `[offset, value]` tuple spellings used by
/// generated campaign files.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PatchEntryRepr {
    Struct { offset: usize, value: u8 },
    Tuple(usize, u8),
}

impl From<PatchEntryRepr> for PatchEntry {
    fn from(repr: PatchEntryRepr) -> Self {
        match repr {
            PatchEntryRepr::Struct { offset, value } => PatchEntry { offset, value },
            PatchEntryRepr::Tuple(offset, value) => PatchEntry { offset, value },
        }
    }
}

impl From<PatchEntry> for PatchEntryRepr {
    fn from(entry: PatchEntry) -> Self {
        PatchEntryRepr::Struct {
            offset: entry.offset,
            value: entry.value,
        }
    }
}

impl From<(usize, u8)> for PatchEntry {
    fn from((offset, value): (usize, u8)) -> Self {
        Self { offset, value }
    }
}
