//! Real-world scenario benchmarks.
//!
//! Single drum voices through the pool, and a pool held at the polyphony
//! cap the way a dense pattern with long cymbal tails would.

mod pool;
mod voices;

pub use pool::bench_pool;
pub use voices::bench_voices;
