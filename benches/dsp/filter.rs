//! Benchmarks for one-pole filters.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_drums::dsp::filter::{BandPass, OnePoleHighPass, OnePoleLowPass};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");
    let dt = 1.0 / SAMPLE_RATE;

    for &size in BLOCK_SIZES {
        // Generate a test signal (sawtooth-like ramp)
        let input: Vec<f64> = (0..size)
            .map(|i| (i as f64 / size as f64) * 2.0 - 1.0)
            .collect();
        let mut buffer = input.clone();

        let mut lp = OnePoleLowPass::new(8000.0, dt);
        group.bench_with_input(BenchmarkId::new("lowpass", size), &size, |b, _| {
            b.iter(|| {
                for (y, &x) in buffer.iter_mut().zip(&input) {
                    *y = lp.process(black_box(x));
                }
            })
        });

        let mut hp = OnePoleHighPass::new(4000.0, dt);
        group.bench_with_input(BenchmarkId::new("highpass", size), &size, |b, _| {
            b.iter(|| {
                for (y, &x) in buffer.iter_mut().zip(&input) {
                    *y = hp.process(black_box(x));
                }
            })
        });

        let mut bp = BandPass::new(4000.0, 12_000.0, dt);
        group.bench_with_input(BenchmarkId::new("bandpass", size), &size, |b, _| {
            b.iter(|| {
                for (y, &x) in buffer.iter_mut().zip(&input) {
                    *y = bp.process(black_box(x));
                }
            })
        });
    }

    group.finish();
}
