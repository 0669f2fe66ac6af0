//! Convenience re-exports for patch types.
//!
//! # Example
//!
//! ```
//! use airfuzz_patch::prelude::*;
//!
//! let table: PatchTable = [PatchEntry::new(75, 0x09)].into_iter().collect();
//! assert_eq!(table.len(), 1);
//! ```

pub use crate::apply::{ApplyReport, apply};
pub use crate::entry::PatchEntry;
pub use crate::table::PatchTable;
