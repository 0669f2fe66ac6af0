//! Executor state introspection
//!
//! Snapshots expose run progress to status reporting and tests without
//! handing out the executor's internals.

use crate::executor::PacketExecutor;

/// Executor state snapshot for debugging and status reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutorSnapshot {
    /// Number of loaded modules, disabled ones included.
    pub module_count: usize,
    /// Number of modules disabled by a setup failure.
    pub disabled_count: usize,
    /// Number of distinct compiled filters.
    pub compiled_filters: usize,
    /// Total packets run so far.
    pub packets_processed: u64,
    /// Hash of the loaded campaign (0 for a hand-assembled executor).
    pub campaign_hash: u64,
}

impl PacketExecutor {
    /// Create a state snapshot for debugging.
    #[must_use]
    pub fn state_snapshot(&self) -> ExecutorSnapshot {
        ExecutorSnapshot {
            module_count: self.module_count(),
            disabled_count: self.disabled_count(),
            compiled_filters: self.compiled_filters(),
            packets_processed: self.packets_processed(),
            campaign_hash: self.campaign_hash(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use airfuzz_dissect::{Dissector, ElementTree};
    use airfuzz_errors::DissectError;

    use super::*;

    struct NullDissector;

    impl Dissector for NullDissector {
        fn knows_path(&self, _path: &str) -> bool {
            true
        }

        fn dissect(&self, _buf: &[u8]) -> Result<ElementTree, DissectError> {
            Ok(ElementTree::from_paths(std::iter::empty::<String>()))
        }
    }

    #[test]
    fn snapshot_tracks_packet_count() {
        let mut executor = PacketExecutor::new(Arc::new(NullDissector));
        assert_eq!(executor.state_snapshot().packets_processed, 0);

        let mut buf = vec![0u8; 4];
        executor.run_packet(&mut buf);
        executor.run_packet(&mut buf);

        let snapshot = executor.state_snapshot();
        assert_eq!(snapshot.packets_processed, 2);
        assert_eq!(snapshot.module_count, 0);
        assert_eq!(snapshot.campaign_hash, 0);
    }
}
