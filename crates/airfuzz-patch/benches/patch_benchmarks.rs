//! Patch apply benchmarks.
//!
//! The apply path runs once per matched packet pass; these benchmarks keep an
//! eye on its cost for realistic control-plane buffer sizes.

use criterion::{Criterion, criterion_group, criterion_main};

use airfuzz_patch::{PatchEntry, PatchTable, apply};

fn sparse_table() -> PatchTable {
    PatchTable::from_entries(vec![
        PatchEntry::new(75, 0x09),
        PatchEntry::new(218, 0x6d),
        PatchEntry::new(219, 0x84),
    ])
}

fn dense_table(len: usize) -> PatchTable {
    (0..len).map(|i| PatchEntry::new(i, (i % 251) as u8)).collect()
}

fn bench_sparse_apply(c: &mut Criterion) {
    let table = sparse_table();
    let mut buf = vec![0u8; 800];

    c.bench_function("apply_sparse_800", |b| {
        b.iter(|| {
            apply(std::hint::black_box(&mut buf), std::hint::black_box(&table));
        })
    });
}

fn bench_dense_apply(c: &mut Criterion) {
    let table = dense_table(512);
    let mut buf = vec![0u8; 800];

    c.bench_function("apply_dense_512", |b| {
        b.iter(|| {
            apply(std::hint::black_box(&mut buf), std::hint::black_box(&table));
        })
    });
}

fn bench_all_out_of_range(c: &mut Criterion) {
    let table = PatchTable::from_entries(vec![PatchEntry::new(10_000, 0xff); 64]);
    let mut buf = vec![0u8; 800];

    c.bench_function("apply_out_of_range_64", |b| {
        b.iter(|| {
            apply(std::hint::black_box(&mut buf), std::hint::black_box(&table));
        })
    });
}

criterion_group!(
    benches,
    bench_sparse_apply,
    bench_dense_apply,
    bench_all_out_of_range
);
criterion_main!(benches);
