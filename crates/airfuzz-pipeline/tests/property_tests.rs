//! Property-based tests for the packet pass.

#![allow(clippy::indexing_slicing, clippy::expect_used)]

use std::collections::HashSet;
use std::sync::Arc;

use airfuzz_dissect::{Dissector, ElementTree};
use airfuzz_errors::DissectError;
use airfuzz_module::{ConfigOverride, ModuleSpec};
use airfuzz_pipeline::prelude::*;
use proptest::prelude::*;

struct AlwaysMatches;

impl Dissector for AlwaysMatches {
    fn knows_path(&self, _path: &str) -> bool {
        true
    }

    fn dissect(&self, _buf: &[u8]) -> Result<ElementTree, DissectError> {
        Ok(ElementTree::from_paths(["a.b".to_owned()]))
    }
}

fn campaign(patches: &[(usize, u8)]) -> Vec<ModuleSpec> {
    vec![ModuleSpec {
        name: "prop".to_owned(),
        filter: "a.b".to_owned(),
        patches: patches.iter().map(|&p| p.into()).collect(),
        offset_base: 0,
        config: ConfigOverride::default(),
        diagnostic: None,
    }]
}

proptest! {
    #[test]
    fn pass_never_resizes_the_buffer(
        len in 0usize..2048,
        patches in proptest::collection::vec((0usize..4096, any::<u8>()), 0..32),
    ) {
        let mut executor =
            PacketExecutor::from_specs(&campaign(&patches), Arc::new(AlwaysMatches))
                .expect("campaign is structurally valid");
        let mut buf = vec![0u8; len];
        executor.run_packet(&mut buf);
        prop_assert_eq!(buf.len(), len);
    }

    #[test]
    fn bytes_outside_the_patch_set_stay_untouched(
        fill in any::<u8>(),
        patches in proptest::collection::vec((0usize..1024, any::<u8>()), 1..16),
    ) {
        let mut executor =
            PacketExecutor::from_specs(&campaign(&patches), Arc::new(AlwaysMatches))
                .expect("campaign is structurally valid");
        let mut buf = vec![fill; 512];
        executor.run_packet(&mut buf);

        let patched: HashSet<usize> = patches.iter().map(|&(o, _)| o).collect();
        for (i, &b) in buf.iter().enumerate() {
            if !patched.contains(&i) {
                prop_assert_eq!(b, fill);
            }
        }
    }

    #[test]
    fn pass_is_deterministic(
        len in 1usize..512,
        patches in proptest::collection::vec((0usize..1024, any::<u8>()), 0..16),
    ) {
        let specs = campaign(&patches);
        let mut first = vec![0u8; len];
        let mut second = vec![0u8; len];

        let mut a = PacketExecutor::from_specs(&specs, Arc::new(AlwaysMatches))
            .expect("campaign is structurally valid");
        a.run_packet(&mut first);
        let mut b = PacketExecutor::from_specs(&specs, Arc::new(AlwaysMatches))
            .expect("campaign is structurally valid");
        b.run_packet(&mut second);

        prop_assert_eq!(first, second);
    }
}
