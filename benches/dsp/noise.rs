//! Benchmarks for the xorshift noise source.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_drums::dsp::NoiseGenerator;

use crate::BLOCK_SIZES;

pub fn bench_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/noise");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f64; size];
        let mut noise = NoiseGenerator::new(0x1234_5679);
        group.bench_with_input(BenchmarkId::new("bipolar", size), &size, |b, _| {
            b.iter(|| {
                for s in buffer.iter_mut() {
                    *s = noise.next11();
                }
                black_box(&buffer);
            })
        });
    }

    // Seed derivation happens once per spawn, not per sample.
    group.bench_function("spawn_seed", |b| {
        let mut index = 0u64;
        b.iter(|| {
            index = index.wrapping_add(1);
            black_box(NoiseGenerator::for_spawn(black_box(42), index))
        })
    });

    group.finish();
}
