//! Benchmarks for each drum voice in isolation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_drums::{synth::VoicePool, voices::DrumKind};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_voices(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voices");

    for &size in BLOCK_SIZES {
        for kind in DrumKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.name(), size), &size, |b, _| {
                // Respawn per iteration so the voice never retires mid-bench.
                b.iter_batched_ref(
                    || {
                        let mut pool = VoicePool::with_defaults(SAMPLE_RATE);
                        pool.spawn(kind, 0.5, 0.9, 0.0);
                        pool
                    },
                    |pool| {
                        for _ in 0..size {
                            black_box(pool.render());
                        }
                    },
                    criterion::BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}
