//! Snare drum voice.
//!
//! Real snares have metal wires stretched across the bottom head that buzz
//! when the drum is struck. We simulate the wires with band-passed noise and
//! add a short sine for the drum head.
//!
//! # How It Works
//!
//! 1. White noise → HPF 1 kHz → LPF 4.5 kHz: the mid-band "crack"
//! 2. A 190 Hz sine body whose amplitude decays by a fixed factor every
//!    sample (`exp(-70·dt)`, i.e. a 70 s⁻¹ decay rate)
//! 3. For the first 15 ms a second, brighter noise burst
//!    (HPF 5 kHz → LPF 10 kHz) scaled by `0.15·exp(-t / 10ms)`
//!
//! The burst filters live on the voice. Two snares hit together each keep
//! their own filter history.
//!
//! # Variations
//!
//! - More body level = more "tom"-like
//! - Higher crack band = brighter, snappier
//! - Slower body decay = looser, ringing head

use super::DrumSynth;
use crate::dsp::{
    filter::BandPass,
    oscillator::{sine01, Phase},
    NoiseGenerator,
};

const CRACK_LOW_HZ: f64 = 1000.0;
const CRACK_HIGH_HZ: f64 = 4500.0;
const CRACK_LEVEL: f64 = 0.82;

const FIZZ_LOW_HZ: f64 = 5000.0;
const FIZZ_HIGH_HZ: f64 = 10_000.0;
const FIZZ_LEN: f64 = 0.015;
const FIZZ_TAU: f64 = 0.010;
const FIZZ_LEVEL: f64 = 0.15;

const BODY_HZ: f64 = 190.0;
const BODY_START: f64 = 0.45;
/// Body decay rate in 1/s.
const BODY_DECAY_RATE: f64 = 70.0;
const BODY_LEVEL: f64 = 0.12;

#[derive(Debug, Clone)]
pub struct Snare {
    crack: BandPass,
    fizz: BandPass,
    body: Phase,
    body_amp: f64,
    body_decay: f64,
}

impl Snare {
    pub fn new(dt: f64) -> Self {
        Self {
            crack: BandPass::new(CRACK_LOW_HZ, CRACK_HIGH_HZ, dt),
            fizz: BandPass::new(FIZZ_LOW_HZ, FIZZ_HIGH_HZ, dt),
            body: Phase::new(),
            body_amp: BODY_START,
            body_decay: body_decay_factor(dt),
        }
    }

    /// Current amplitude of the tonal body.
    pub fn body_amplitude(&self) -> f64 {
        self.body_amp
    }
}

fn body_decay_factor(dt: f64) -> f64 {
    (-BODY_DECAY_RATE * dt).exp()
}

impl DrumSynth for Snare {
    fn next_sample(&mut self, t: f64, dt: f64, noise: &mut NoiseGenerator) -> f64 {
        let crack = self.crack.process(noise.next11());

        let fizz = if t < FIZZ_LEN {
            FIZZ_LEVEL * self.fizz.process(noise.next11()) * (-t / FIZZ_TAU).exp()
        } else {
            0.0
        };

        self.body_amp *= self.body_decay;
        let body = self.body_amp * sine01(self.body.advance(BODY_HZ, dt));

        CRACK_LEVEL * crack + BODY_LEVEL * body + fizz
    }

    fn set_sample_period(&mut self, dt: f64) {
        self.crack.set_sample_period(dt);
        self.fizz.set_sample_period(dt);
        self.body_decay = body_decay_factor(dt);
    }
}
