//! Kick drum voice.
//!
//! A sine wave whose pitch starts high and falls quickly to the fundamental,
//! creating the characteristic "punch" of an electronic kick.
//!
//! # How It Works
//!
//! 1. Instantaneous frequency `f = 55 + 140·exp(-t / 35ms)` Hz
//! 2. The frequency is integrated into a phase, so the sweep stays smooth
//! 3. For the first 6 ms a 1 kHz sine "click" is layered on top
//!
//! Kick is also the fallback voice: unknown drum names play as a kick.
//!
//! # Variations
//!
//! - Longer sweep time constant = boomier, 808-style kick
//! - Higher sweep depth = more "click" in the attack

use super::DrumSynth;
use crate::dsp::{
    oscillator::{sine01, Phase},
    NoiseGenerator,
};

const BASE_HZ: f64 = 55.0;
const SWEEP_HZ: f64 = 140.0;
const SWEEP_TAU: f64 = 0.035;
const BODY_LEVEL: f64 = 0.95;

const CLICK_HZ: f64 = 1000.0;
const CLICK_LEN: f64 = 0.006;
const CLICK_LEVEL: f64 = 0.35;

#[derive(Debug, Clone, Default)]
pub struct Kick {
    body: Phase,
    click: Phase,
}

impl Kick {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instantaneous body frequency at `t`.
    pub fn frequency(t: f64) -> f64 {
        BASE_HZ + SWEEP_HZ * (-t / SWEEP_TAU).exp()
    }
}

impl DrumSynth for Kick {
    fn next_sample(&mut self, t: f64, dt: f64, _noise: &mut NoiseGenerator) -> f64 {
        let body = sine01(self.body.advance(Self::frequency(t), dt));

        let click = if t < CLICK_LEN {
            CLICK_LEVEL * sine01(self.click.advance(CLICK_HZ, dt))
        } else {
            0.0
        };

        BODY_LEVEL * body + click
    }
}
