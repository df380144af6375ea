//! Low-level DSP primitives used by the drum voices and the effects bus.
//!
//! These components are allocation-free and realtime-safe, making them safe to
//! embed directly inside voice structs. They stay focused on the
//! signal-processing math; voice lifecycle lives in [`crate::synth`].

/// Soft clipping shared by voices and the bus limiter.
pub mod distortion;
/// Time-driven attack/decay/sustain/release envelope for struck sounds.
pub mod envelope;
/// One-pole high-pass, low-pass and band-pass sections.
pub mod filter;
/// Xorshift white noise and spawn seeding.
pub mod noise;
/// Phase accumulators and the unit-phase sine.
pub mod oscillator;

pub use envelope::{DrumEnvelope, EnvelopeStage, EnvelopeTimes};
pub use noise::NoiseGenerator;
