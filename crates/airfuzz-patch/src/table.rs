//! Ordered patch tables.

use airfuzz_errors::ModuleError;
use serde::{Deserialize, Serialize};

use crate::entry::PatchEntry;

/// Ordered sequence of byte overwrites owned by one module.
///
/// Immutable after module load. Order is significant only when offsets
/// collide: the last listed value for an offset wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatchTable {
    entries: Vec<PatchEntry>,
}

impl PatchTable {
    /// Create a table from entries, preserving order.
    #[must_use]
    pub fn from_entries(entries: Vec<PatchEntry>) -> Self {
        Self { entries }
    }

    /// Create a table with every offset shifted down by `base`.
    ///
    /// Generated test cases express offsets relative to the start of the
    /// capture frame and subtract a fixed base to land on the over-the-air
    /// payload (the corpus writes these literally as `index - 48`). The
    /// rebase happens once at load time so apply sees effective indices.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleError::SpecInvalid`] when any offset is smaller than
    /// `base`; an underflowing offset cannot name a real payload byte.
    pub fn rebased(entries: Vec<PatchEntry>, base: usize) -> Result<Self, ModuleError> {
        let mut rebased = Vec::with_capacity(entries.len());
        for entry in entries {
            let offset = entry.offset.checked_sub(base).ok_or_else(|| {
                ModuleError::spec_invalid(
                    "patch table",
                    format!("offset {} underflows base {base}", entry.offset),
                )
            })?;
            rebased.push(PatchEntry::new(offset, entry.value));
        }
        Ok(Self { entries: rebased })
    }

    /// The entries in table order.
    #[must_use]
    pub fn entries(&self) -> &[PatchEntry] {
        &self.entries
    }

    /// Iterate entries in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, PatchEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The largest offset named by the table, if any.
    #[must_use]
    pub fn max_offset(&self) -> Option<usize> {
        self.entries.iter().map(|e| e.offset).max()
    }
}

impl<'a> IntoIterator for &'a PatchTable {
    type Item = &'a PatchEntry;
    type IntoIter = std::slice::Iter<'a, PatchEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<PatchEntry> for PatchTable {
    fn from_iter<I: IntoIterator<Item = PatchEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_order_preserved() {
        let table = PatchTable::from_entries(vec![
            PatchEntry::new(9, 0x01),
            PatchEntry::new(3, 0x02),
            PatchEntry::new(9, 0x03),
        ]);
        let offsets: Vec<usize> = table.iter().map(|e| e.offset).collect();
        assert_eq!(offsets, vec![9, 3, 9]);
    }

    #[test]
    fn test_rebased_subtracts_base() {
        // The generator's `pkt_buf[74 - 48] = 0x9a` form.
        let table =
            PatchTable::rebased(vec![PatchEntry::new(74, 0x9a), PatchEntry::new(701, 0x07)], 48)
                .unwrap();
        assert_eq!(table.entries()[0], PatchEntry::new(26, 0x9a));
        assert_eq!(table.entries()[1], PatchEntry::new(653, 0x07));
    }

    #[test]
    fn test_rebased_underflow_rejected() {
        let err = PatchTable::rebased(vec![PatchEntry::new(10, 0x00)], 48);
        assert!(matches!(err, Err(ModuleError::SpecInvalid { .. })));
    }

    #[test]
    fn test_serde_transparent_list() {
        let table: PatchTable = serde_json::from_str("[[75, 9], [218, 109]]").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.max_offset(), Some(218));
    }
}
