//! Benchmark for frame normalization.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use whirligig::{normalize_frames, Figure};

fn bench_normalize(c: &mut Criterion) {
    let spinner = Figure::Cockroach.spinner().unwrap();
    let frames = spinner.frames().to_vec();

    c.bench_function("normalize_cockroach_frames", |b| {
        b.iter(|| normalize_frames(black_box(&frames)).unwrap());
    });
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
