//! Hi-hat voice (closed).
//!
//! A tight, short burst of filtered noise. Closed hi-hats are the backbone
//! of most drum patterns, providing rhythmic drive.
//!
//! # How It Works
//!
//! 1. White noise provides the "metallic" character
//! 2. HPF 4 kHz → LPF 12 kHz keeps a bright band around 9 kHz
//! 3. Two slow phase accumulators drive sines at large fixed multipliers
//!    (about 1.35 kHz and 2.75 kHz), adding a very quiet inharmonic shimmer
//! 4. The envelope (40 ms, 6 ms release) gives the "tss"
//!
//! # Variations
//!
//! - Longer duration = open hi-hat
//! - Lower band = darker, jazzier hat

use super::DrumSynth;
use crate::dsp::{
    filter::BandPass,
    oscillator::{sine01, Phase},
    NoiseGenerator,
};

const BAND_LOW_HZ: f64 = 4000.0;
const BAND_HIGH_HZ: f64 = 12_000.0;
const BAND_LEVEL: f64 = 0.95;

const SHIMMER_RATES: [f64; 2] = [0.123, 0.187];
const SHIMMER_MULTIPLIERS: [f64; 2] = [11_000.0, 14_700.0];
const SHIMMER_LEVEL: f64 = 0.05;

#[derive(Debug, Clone)]
pub struct HiHat {
    band: BandPass,
    shimmer: [Phase; 2],
}

impl HiHat {
    pub fn new(dt: f64) -> Self {
        Self {
            band: BandPass::new(BAND_LOW_HZ, BAND_HIGH_HZ, dt),
            shimmer: [Phase::new(); 2],
        }
    }
}

impl DrumSynth for HiHat {
    fn next_sample(&mut self, _t: f64, dt: f64, noise: &mut NoiseGenerator) -> f64 {
        let band = self.band.process(noise.next11());

        let mut metal = 0.0;
        for ((phase, rate), multiplier) in self
            .shimmer
            .iter_mut()
            .zip(SHIMMER_RATES)
            .zip(SHIMMER_MULTIPLIERS)
        {
            metal += sine01(phase.advance(rate, dt) * multiplier);
        }

        BAND_LEVEL * band + SHIMMER_LEVEL * metal
    }

    fn set_sample_period(&mut self, dt: f64) {
        self.band.set_sample_period(dt);
    }
}
