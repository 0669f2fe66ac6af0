//! Byte-offset patch tables for AirFuzz
//!
//! A patch table is the mutation payload of one test-case module: an ordered
//! list of `(offset, value)` byte overwrites applied in place to the raw
//! packet buffer after its decoded form matched the module's filter.
//!
//! # Semantics
//!
//! - Positional overwrite only: a patch never inserts bytes or changes the
//!   buffer length.
//! - Offsets are validated against the *current* buffer length at apply
//!   time, not at load time; an out-of-range offset skips that single write
//!   with a warning and every other write still lands.
//! - Order matters only when offsets collide: the last listed value wins.
//! - Applying the same table twice yields the same bytes (idempotent).
//!
//! # Example
//!
//! ```
//! use airfuzz_patch::{PatchEntry, PatchTable, apply};
//!
//! let table = PatchTable::from_entries(vec![
//!     PatchEntry::new(75, 0x09),
//!     PatchEntry::new(218, 0x6d),
//!     PatchEntry::new(219, 0x84),
//! ]);
//!
//! let mut buf = vec![0u8; 800];
//! let report = apply(&mut buf, &table);
//! assert_eq!(report.written, 3);
//! assert_eq!(buf[75], 0x09);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod apply;
pub mod entry;
pub mod prelude;
pub mod table;

pub use apply::{ApplyReport, apply};
pub use entry::PatchEntry;
pub use table::PatchTable;
