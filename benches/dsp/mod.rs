//! Benchmarks for low-level DSP primitives.

mod bus;
mod distortion;
mod envelope;
mod filter;
mod noise;

pub use bus::bench_bus;
pub use distortion::bench_distortion;
pub use envelope::bench_envelope;
pub use filter::bench_filter;
pub use noise::bench_noise;
