//! Procedural percussion synthesis.
//!
//! Every note-on spawns a drum voice (kick, snare, hi-hat, toms, cymbal).
//! Once per audio tick the [`engine::DrumEngine`] renders each live voice,
//! sums them into a stereo frame and runs that frame through a small
//! effects bus (gain, lowpass, dry/wet blend, soft limiter).
//!
//! ```
//! use saavy_drums::{engine::{DrumEngine, EngineConfig}, synth::NoteOn, voices::DrumKind};
//!
//! let mut engine = DrumEngine::new(EngineConfig::default()).unwrap();
//! engine.add_voice(NoteOn::new(DrumKind::Snare));
//!
//! let mut ticks = 0;
//! while engine.tick().1 {
//!     ticks += 1;
//! }
//! assert!(ticks > 0);
//! ```

pub mod dsp; // Noise, filters, envelope, oscillator and clipping primitives
pub mod engine; // Per-tick audio interface and effects bus
pub mod synth; // Voice lifecycle and note configuration
pub mod voices; // Per-drum synthesis algorithms

/// Maximum number of simultaneously sounding voices.
pub const MAX_POLYPHONY: usize = 64;
/// Sample rate used until a host configures its own.
pub const DEFAULT_SAMPLE_RATE: f64 = 44_100.0;
/// Times (and divisors) at or below this are treated as zero.
pub(crate) const MIN_TIME: f64 = 1e-6;

/// One stereo sample: `[left, right]`.
pub type Frame = [f64; 2];
