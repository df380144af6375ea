//! Tom drum voice.
//!
//! A pitched drum similar to the kick but tuned higher. Great for fills,
//! tribal patterns, and melodic percussion.
//!
//! # How It Works
//!
//! 1. Base pitch from the tom size: low ≈ E2, mid ≈ A2, high ≈ D#3
//! 2. The note's pitch offset scales it by `2^(semitones / 12)`
//! 3. Pitch envelope: `f = base + 80·exp(-t / 40ms)` Hz, integrated into
//!    a phase and played as a sine
//!
//! The sweep gives the tom its characteristic "boing" quality.

use super::DrumSynth;
use crate::dsp::{
    oscillator::{sine01, Phase},
    NoiseGenerator,
};

const SWEEP_HZ: f64 = 80.0;
const SWEEP_TAU: f64 = 0.04;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TomPitch {
    Low,
    Mid,
    High,
}

impl TomPitch {
    pub fn base_hz(self) -> f64 {
        match self {
            TomPitch::Low => 82.41,
            TomPitch::Mid => 110.0,
            TomPitch::High => 155.56,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Tom {
    pitch_hz: f64,
    body: Phase,
}

impl Tom {
    pub fn new(size: TomPitch, semitones: f64) -> Self {
        Self {
            pitch_hz: size.base_hz() * 2.0_f64.powf(semitones / 12.0),
            body: Phase::new(),
        }
    }

    /// Frequency the sweep settles to.
    pub fn pitch_hz(&self) -> f64 {
        self.pitch_hz
    }

    pub fn frequency(&self, t: f64) -> f64 {
        self.pitch_hz + SWEEP_HZ * (-t / SWEEP_TAU).exp()
    }
}

impl DrumSynth for Tom {
    fn next_sample(&mut self, t: f64, dt: f64, _noise: &mut NoiseGenerator) -> f64 {
        let f = self.frequency(t);
        sine01(self.body.advance(f, dt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_are_ordered() {
        assert!(TomPitch::Low.base_hz() < TomPitch::Mid.base_hz());
        assert!(TomPitch::Mid.base_hz() < TomPitch::High.base_hz());
    }

    #[test]
    fn pitch_offset_is_in_semitones() {
        let octave_up = Tom::new(TomPitch::Mid, 12.0);
        assert!((octave_up.pitch_hz() - 220.0).abs() < 1e-9);

        let fifth_down = Tom::new(TomPitch::Mid, -7.0);
        assert!((fifth_down.pitch_hz() - 110.0 * 2f64.powf(-7.0 / 12.0)).abs() < 1e-9);
    }

    #[test]
    fn sweep_starts_80_hz_above_pitch() {
        let tom = Tom::new(TomPitch::Low, 0.0);
        assert!((tom.frequency(0.0) - (82.41 + 80.0)).abs() < 1e-9);
        assert!((tom.frequency(2.0) - 82.41).abs() < 1e-6);
    }
}
