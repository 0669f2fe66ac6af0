//! Property-based tests for patch application.
//!
//! These cover the algebraic guarantees of `apply`: length preservation,
//! last-write-wins on colliding offsets, idempotence, and untouched bytes
//! staying untouched.

use std::collections::HashMap;

use airfuzz_patch::{PatchEntry, PatchTable, apply};
use proptest::prelude::*;
use quickcheck_macros::quickcheck;

fn entry_strategy(max_offset: usize) -> impl Strategy<Value = PatchEntry> {
    (0..max_offset, any::<u8>()).prop_map(|(o, v)| PatchEntry::new(o, v))
}

fn table_strategy(max_offset: usize) -> impl Strategy<Value = PatchTable> {
    prop::collection::vec(entry_strategy(max_offset), 0..32)
        .prop_map(PatchTable::from_entries)
}

proptest! {
    // In-range apply preserves length and sets the last listed value per offset.
    #[test]
    fn in_range_apply_sets_last_value(
        buf in prop::collection::vec(any::<u8>(), 1..512),
        table in table_strategy(512),
    ) {
        let in_range: PatchTable = table
            .iter()
            .filter(|e| e.offset < buf.len())
            .copied()
            .collect();

        let mut patched = buf.clone();
        let report = apply(&mut patched, &in_range);

        prop_assert_eq!(patched.len(), buf.len());
        prop_assert_eq!(report.skipped, 0);

        let mut last: HashMap<usize, u8> = HashMap::new();
        for entry in &in_range {
            last.insert(entry.offset, entry.value);
        }
        for (i, (&got, &orig)) in patched.iter().zip(buf.iter()).enumerate() {
            match last.get(&i) {
                Some(&v) => prop_assert_eq!(got, v),
                None => prop_assert_eq!(got, orig),
            }
        }
    }

    // apply(apply(B, P), P) == apply(B, P), out-of-range entries included.
    #[test]
    fn apply_is_idempotent(
        buf in prop::collection::vec(any::<u8>(), 0..256),
        table in table_strategy(320),
    ) {
        let mut once = buf;
        apply(&mut once, &table);
        let mut twice = once.clone();
        apply(&mut twice, &table);
        prop_assert_eq!(once, twice);
    }

    // Out-of-range entries never disturb any other write or the length.
    #[test]
    fn out_of_range_writes_are_isolated(
        buf in prop::collection::vec(any::<u8>(), 1..128),
        table in table_strategy(128),
        oor_value in any::<u8>(),
    ) {
        let len = buf.len();
        let mut with_oor: Vec<PatchEntry> = table.iter().copied().collect();
        with_oor.push(PatchEntry::new(len + 7, oor_value));
        let with_oor = PatchTable::from_entries(with_oor);

        let mut expected = buf.clone();
        let base_report = apply(&mut expected, &table);

        let mut got = buf;
        let oor_report = apply(&mut got, &with_oor);

        prop_assert_eq!(&got, &expected);
        prop_assert_eq!(got.len(), len);
        prop_assert_eq!(oor_report.written, base_report.written);
        prop_assert_eq!(oor_report.skipped, base_report.skipped + 1);
    }

    // Identical buffer and table always produce identical bytes.
    #[test]
    fn apply_is_deterministic(
        buf in prop::collection::vec(any::<u8>(), 0..256),
        table in table_strategy(300),
    ) {
        let mut a = buf.clone();
        let mut b = buf;
        apply(&mut a, &table);
        apply(&mut b, &table);
        prop_assert_eq!(a, b);
    }
}

// Buffer length is invariant under apply, whatever the offsets say.
#[quickcheck]
fn qc_apply_never_resizes(buf: Vec<u8>, raw: Vec<(usize, u8)>) -> bool {
    let table: PatchTable = raw
        .into_iter()
        .map(|(o, v)| PatchEntry::new(o % 4096, v))
        .collect();
    let len = buf.len();
    let mut buf = buf;
    let _ = apply(&mut buf, &table);
    buf.len() == len
}
