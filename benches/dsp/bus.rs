//! Benchmarks for the effects bus.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_drums::engine::{BusConfig, EffectsBus};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_bus(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/bus");

    for &size in BLOCK_SIZES {
        let input: Vec<[f64; 2]> = (0..size)
            .map(|i| {
                let x = (i as f64 * 0.05).sin();
                [x, -x]
            })
            .collect();

        let mut bus = EffectsBus::new(&BusConfig::default(), SAMPLE_RATE);
        group.bench_with_input(BenchmarkId::new("process", size), &size, |b, _| {
            b.iter(|| {
                for &frame in &input {
                    black_box(bus.process(black_box(frame)));
                }
            })
        });
    }

    group.finish();
}
