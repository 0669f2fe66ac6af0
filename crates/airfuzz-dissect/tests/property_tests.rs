//! Property-based tests for the filter registry.

#![allow(clippy::indexing_slicing, clippy::expect_used)]

use airfuzz_dissect::{Dissector, ElementTree, FilterRegistry};
use airfuzz_errors::DissectError;
use proptest::prelude::*;

#[derive(Clone)]
struct SetDissector {
    known: Vec<String>,
    present: Vec<String>,
}

impl Dissector for SetDissector {
    fn knows_path(&self, path: &str) -> bool {
        self.known.iter().any(|k| k == path)
    }

    fn dissect(&self, _buf: &[u8]) -> Result<ElementTree, DissectError> {
        Ok(ElementTree::from_paths(self.present.iter().cloned()))
    }
}

fn path_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}\\.[a-z]{1,8}"
}

proptest! {
    // Registering a filter N >= 1 times yields the same query result as once.
    #[test]
    fn repeated_registration_is_idempotent(
        path in path_strategy(),
        present in any::<bool>(),
        repeats in 1usize..5,
    ) {
        let dissector = SetDissector {
            known: vec![path.clone()],
            present: if present { vec![path.clone()] } else { vec![] },
        };
        let mut registry = FilterRegistry::new();
        let filter = registry.compile(&dissector, &path).expect("known path compiles");

        registry.begin_packet();
        for _ in 0..repeats {
            registry.register(&filter);
        }
        let tree = dissector.dissect(&[]).expect("dissect");
        registry.evaluate(Some(&tree));

        prop_assert_eq!(registry.query(&filter), present);
    }

    // A match result never leaks across begin_packet boundaries.
    #[test]
    fn begin_packet_clears_match_state(path in path_strategy()) {
        let dissector = SetDissector {
            known: vec![path.clone()],
            present: vec![path.clone()],
        };
        let mut registry = FilterRegistry::new();
        let filter = registry.compile(&dissector, &path).expect("known path compiles");

        registry.begin_packet();
        registry.register(&filter);
        let tree = dissector.dissect(&[]).expect("dissect");
        registry.evaluate(Some(&tree));
        prop_assert!(registry.query(&filter));

        registry.begin_packet();
        prop_assert!(!registry.query(&filter));
    }

    // Compiling the same name from any number of modules keeps one slot.
    #[test]
    fn compile_dedup_holds(path in path_strategy(), compiles in 1usize..6) {
        let dissector = SetDissector { known: vec![path.clone()], present: vec![] };
        let mut registry = FilterRegistry::new();
        let mut ids = Vec::new();
        for _ in 0..compiles {
            ids.push(registry.compile(&dissector, &path).expect("compile").id());
        }
        prop_assert!(ids.windows(2).all(|w| w[0] == w[1]));
        prop_assert_eq!(registry.len(), 1);
    }
}
