//! Benchmarks for the whole engine at full polyphony.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_drums::{
    engine::{DrumEngine, EngineConfig},
    synth::NoteOn,
    voices::DrumKind,
    MAX_POLYPHONY,
};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

fn full_engine() -> DrumEngine {
    let config = EngineConfig::default().with_sample_rate(SAMPLE_RATE);
    let mut engine = match DrumEngine::new(config) {
        Ok(engine) => engine,
        Err(err) => panic!("default config rejected: {err}"),
    };
    for i in 0..MAX_POLYPHONY {
        let kind = DrumKind::ALL[i % DrumKind::ALL.len()];
        engine.add_voice(NoteOn::new(kind).with_duration(1.0));
    }
    engine
}

pub fn bench_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/pool");

    for &size in BLOCK_SIZES {
        let mut out = vec![0.0f32; size * 2];
        group.bench_with_input(BenchmarkId::new("full_stereo", size), &size, |b, _| {
            b.iter_batched_ref(
                full_engine,
                |engine| {
                    black_box(engine.render_block(&mut out, 2));
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}
