//! Drum voices.
//!
//! Each drum variant owns its oscillator, filter and decay state and turns
//! "seconds since the hit" into a raw sample in roughly `[-1, 1]`. The
//! shared amplitude envelope, velocity and per-voice soft clip are applied
//! by [`crate::synth::Voice`] on top.
//!
//! | variant | source                              | character          |
//! | ------- | ----------------------------------- | ------------------ |
//! | kick    | swept sine + 1 kHz click            | punch, low thump   |
//! | snare   | band-passed noise + 190 Hz body     | crack with a knock |
//! | hihat   | high band noise + faint shimmer     | tight "tss"        |
//! | tom     | swept sine at a tuned base pitch    | pitched thud       |
//! | cymbal  | bright noise + six metallic partials| splash and wash    |
//!
//! # Example
//!
//! ```
//! use saavy_drums::dsp::NoiseGenerator;
//! use saavy_drums::voices::{DrumKind, VoiceBody};
//!
//! let dt = 1.0 / 48_000.0;
//! let mut body = VoiceBody::new(DrumKind::Snare, 0.0, dt);
//! let mut noise = NoiseGenerator::new(1);
//! let sample = body.next_sample(0.0, dt, &mut noise);
//! assert!(sample.abs() < 2.0);
//! ```

mod cymbal;
mod hihat;
mod kick;
mod snare;
mod tom;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::dsp::{EnvelopeTimes, NoiseGenerator};

pub use cymbal::Cymbal;
pub use hihat::HiHat;
pub use kick::Kick;
pub use snare::Snare;
pub use tom::{Tom, TomPitch};

/// Per-drum synthesis algorithm.
///
/// `t` is the voice's elapsed time in seconds and `dt` the sample period.
/// Implementations advance their own phases and filters once per call.
pub trait DrumSynth {
    fn next_sample(&mut self, t: f64, dt: f64, noise: &mut NoiseGenerator) -> f64;

    /// Recompute anything derived from the sample period.
    fn set_sample_period(&mut self, _dt: f64) {}
}

/// The closed set of drum variants.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrumKind {
    #[default]
    Kick,
    Snare,
    HiHat,
    Tom(TomPitch),
    Cymbal,
}

/// Timing defaults for a drum variant.
///
/// `None` fields are taken from the note (duration) or from the engine's
/// configurable kick envelope (attack/decay/release).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrumProfile {
    pub times: Option<EnvelopeTimes>,
    pub duration: Option<f64>,
}

impl DrumKind {
    pub const ALL: [DrumKind; 7] = [
        DrumKind::Kick,
        DrumKind::Snare,
        DrumKind::HiHat,
        DrumKind::Tom(TomPitch::Low),
        DrumKind::Tom(TomPitch::Mid),
        DrumKind::Tom(TomPitch::High),
        DrumKind::Cymbal,
    ];

    pub fn profile(self) -> DrumProfile {
        match self {
            DrumKind::Kick => DrumProfile {
                times: None,
                duration: None,
            },
            DrumKind::Snare => DrumProfile {
                times: Some(EnvelopeTimes::new(0.0008, 0.080, 0.050)),
                duration: Some(0.07),
            },
            DrumKind::HiHat => DrumProfile {
                times: Some(EnvelopeTimes::new(0.0005, 0.030, 0.006)),
                duration: Some(0.04),
            },
            DrumKind::Tom(_) => DrumProfile {
                times: Some(EnvelopeTimes::new(0.001, 0.160, 0.080)),
                duration: None,
            },
            DrumKind::Cymbal => DrumProfile {
                times: Some(EnvelopeTimes::new(0.0008, 0.25, 0.90)),
                duration: Some(0.5),
            },
        }
    }

    /// Name used by the note attribute surface.
    pub fn name(self) -> &'static str {
        match self {
            DrumKind::Kick => "kick",
            DrumKind::Snare => "snare",
            DrumKind::HiHat => "hihat",
            DrumKind::Tom(TomPitch::Mid) => "tom",
            DrumKind::Tom(TomPitch::High) => "tom-hi",
            DrumKind::Tom(TomPitch::Low) => "tom-low",
            DrumKind::Cymbal => "cymbal",
        }
    }
}

impl fmt::Display for DrumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown drum type '{0}'")]
pub struct UnknownDrumKind(pub String);

impl FromStr for DrumKind {
    type Err = UnknownDrumKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "kick" => Ok(DrumKind::Kick),
            "snare" => Ok(DrumKind::Snare),
            "hihat" => Ok(DrumKind::HiHat),
            "tom" => Ok(DrumKind::Tom(TomPitch::Mid)),
            "tom-hi" => Ok(DrumKind::Tom(TomPitch::High)),
            "tom-low" | "tom-lo" => Ok(DrumKind::Tom(TomPitch::Low)),
            "cymbal" => Ok(DrumKind::Cymbal),
            other => Err(UnknownDrumKind(other.to_string())),
        }
    }
}

/// Synthesis state for one voice, one variant per drum type.
#[derive(Debug, Clone)]
pub enum VoiceBody {
    Kick(Kick),
    Snare(Snare),
    HiHat(HiHat),
    Tom(Tom),
    Cymbal(Cymbal),
}

impl VoiceBody {
    /// Fresh state for `kind`. `pitch` is a semitone offset; only toms use it.
    pub fn new(kind: DrumKind, pitch: f64, dt: f64) -> Self {
        match kind {
            DrumKind::Kick => VoiceBody::Kick(Kick::new()),
            DrumKind::Snare => VoiceBody::Snare(Snare::new(dt)),
            DrumKind::HiHat => VoiceBody::HiHat(HiHat::new(dt)),
            DrumKind::Tom(tom) => VoiceBody::Tom(Tom::new(tom, pitch)),
            DrumKind::Cymbal => VoiceBody::Cymbal(Cymbal::new(dt)),
        }
    }

    #[inline]
    pub fn next_sample(&mut self, t: f64, dt: f64, noise: &mut NoiseGenerator) -> f64 {
        match self {
            VoiceBody::Kick(v) => v.next_sample(t, dt, noise),
            VoiceBody::Snare(v) => v.next_sample(t, dt, noise),
            VoiceBody::HiHat(v) => v.next_sample(t, dt, noise),
            VoiceBody::Tom(v) => v.next_sample(t, dt, noise),
            VoiceBody::Cymbal(v) => v.next_sample(t, dt, noise),
        }
    }

    pub fn set_sample_period(&mut self, dt: f64) {
        match self {
            VoiceBody::Kick(v) => v.set_sample_period(dt),
            VoiceBody::Snare(v) => v.set_sample_period(dt),
            VoiceBody::HiHat(v) => v.set_sample_period(dt),
            VoiceBody::Tom(v) => v.set_sample_period(dt),
            VoiceBody::Cymbal(v) => v.set_sample_period(dt),
        }
    }
}
