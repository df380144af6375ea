//! Benchmarks for the drum envelope.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_drums::dsp::{DrumEnvelope, EnvelopeTimes};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");
    let dt = 1.0 / SAMPLE_RATE;
    let env = DrumEnvelope::new(EnvelopeTimes::new(0.002, 0.12, 0.10), 0.25);

    // The envelope is a pure function of time, so each stage is measured by
    // starting the block at a different offset.
    let stages = [("attack", 0.0), ("decay", 0.05), ("sustain", 0.2), ("release", 0.3)];

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f64; size];
        for (name, start) in stages {
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    for (n, s) in buffer.iter_mut().enumerate() {
                        *s = env.level(black_box(start + n as f64 * dt));
                    }
                })
            });
        }
    }

    group.finish();
}
