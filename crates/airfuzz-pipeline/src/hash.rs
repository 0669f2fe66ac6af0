//! Campaign hash calculation for deterministic comparison
//!
//! A campaign file is re-read between runs; the hash lets callers detect
//! whether the loaded modules actually changed without diffing spec lists.
//! FNV-1a keeps the value stable across platforms and toolchain versions,
//! which `DefaultHasher` does not promise.

use std::hash::{Hash, Hasher};

use airfuzz_module::ModuleSpec;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a over the standard `Hasher` interface.
#[derive(Debug, Clone)]
struct Fnv1aHasher(u64);

impl Default for Fnv1aHasher {
    fn default() -> Self {
        Self(FNV_OFFSET_BASIS)
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.0 ^= u64::from(byte);
            self.0 = self.0.wrapping_mul(FNV_PRIME);
        }
    }
}

/// Calculate a deterministic hash of one module spec.
///
/// Every field that affects runtime behavior participates; the diagnostic
/// message does too, since it changes observable log output.
#[must_use]
pub fn spec_hash(spec: &ModuleSpec) -> u64 {
    let mut hasher = Fnv1aHasher::default();
    hash_spec_into(spec, &mut hasher);
    hasher.finish()
}

/// Calculate a deterministic hash of a whole campaign.
///
/// Order matters: modules run in load order, so a reordered campaign is a
/// different campaign.
#[must_use]
pub fn campaign_hash(specs: &[ModuleSpec]) -> u64 {
    let mut hasher = Fnv1aHasher::default();
    specs.len().hash(&mut hasher);
    for spec in specs {
        hash_spec_into(spec, &mut hasher);
    }
    hasher.finish()
}

fn hash_spec_into(spec: &ModuleSpec, hasher: &mut impl Hasher) {
    spec.name.hash(hasher);
    spec.filter.hash(hasher);
    spec.patches.len().hash(hasher);
    for entry in &spec.patches {
        entry.offset.hash(hasher);
        entry.value.hash(hasher);
    }
    spec.offset_base.hash(hasher);
    spec.config.disable_global_timeout.hash(hasher);
    spec.diagnostic.hash(hasher);
}
