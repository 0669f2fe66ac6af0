//! Diagnostic output for recovered apply faults.

use airfuzz_patch::{PatchEntry, PatchTable, apply};
use tracing_test::traced_test;

#[traced_test]
#[test]
fn out_of_range_write_logs_a_warning() {
    let mut buf = vec![0u8; 8];
    let table = PatchTable::from_entries(vec![PatchEntry::new(2, 0x11), PatchEntry::new(99, 0x22)]);

    let report = apply(&mut buf, &table);

    assert_eq!(report.written, 1);
    assert_eq!(report.skipped, 1);
    assert!(logs_contain("patch offset out of range"));
}

#[traced_test]
#[test]
fn in_range_apply_is_silent() {
    let mut buf = vec![0u8; 8];
    let table = PatchTable::from_entries(vec![PatchEntry::new(0, 0xff)]);

    let report = apply(&mut buf, &table);

    assert_eq!(report.written, 1);
    assert!(!logs_contain("out of range"));
}
