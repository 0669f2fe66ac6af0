//! Contract implemented by the external decode engine.
//!
//! The decoder itself (a full protocol dissection stack) lives outside this
//! workspace. The harness only needs two operations from it: resolving a
//! filter name against the dissection table at module setup, and decoding one
//! buffer into an [`ElementTree`] between the PRE and POST phases.

use airfuzz_errors::DissectError;

use crate::tree::ElementTree;

/// External decode engine contract.
///
/// Implementations must be deterministic: the same buffer always yields the
/// same tree or the same failure. The pipeline invokes `dissect` exactly once
/// per packet pass.
pub trait Dissector {
    /// Whether `path` is part of the decoder's dissection table.
    ///
    /// Filter compilation consults this once per distinct filter name, at
    /// module setup time.
    fn knows_path(&self, path: &str) -> bool;

    /// Decode one packet buffer into an element tree.
    ///
    /// # Errors
    ///
    /// Returns [`DissectError::DecodeFailed`] when the buffer cannot be
    /// dissected; the pipeline recovers by treating every filter query for
    /// this packet as false.
    fn dissect(&self, buf: &[u8]) -> Result<ElementTree, DissectError>;
}

impl<T: Dissector + ?Sized> Dissector for &T {
    fn knows_path(&self, path: &str) -> bool {
        (**self).knows_path(path)
    }

    fn dissect(&self, buf: &[u8]) -> Result<ElementTree, DissectError> {
        (**self).dissect(buf)
    }
}

impl<T: Dissector + ?Sized> Dissector for std::sync::Arc<T> {
    fn knows_path(&self, path: &str) -> bool {
        (**self).knows_path(path)
    }

    fn dissect(&self, buf: &[u8]) -> Result<ElementTree, DissectError> {
        (**self).dissect(buf)
    }
}
