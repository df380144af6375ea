//! Cymbal voice.
//!
//! A bright, airy splash: mostly high-band noise with a cluster of
//! inharmonic sine partials for the metallic "zing".
//!
//! # How It Works
//!
//! 1. White noise → HPF 5.5 kHz → LPF 12 kHz: the wash
//! 2. Six partials at inharmonic ratios of a 1.1 kHz "clang" frequency
//!    (4.5 kHz up to 12.3 kHz), each with its own phase
//! 3. The partial cluster fades with its own `exp(-t / 0.9s)`, so the
//!    attack is bright and the tail is mostly noise
//! 4. Long release (0.9 s) after a 0.5 s nominal duration

use super::DrumSynth;
use crate::dsp::{
    filter::BandPass,
    oscillator::{sine01, Phase},
    NoiseGenerator,
};

const BAND_LOW_HZ: f64 = 5500.0;
const BAND_HIGH_HZ: f64 = 12_000.0;
const BAND_LEVEL: f64 = 0.80;

const CLANG_HZ: f64 = 1100.0;
const PARTIAL_RATIOS: [f64; 6] = [4.07, 5.41, 6.80, 8.21, 9.63, 11.2];
const PARTIAL_WEIGHTS: [f64; 6] = [0.22, 0.18, 0.16, 0.14, 0.12, 0.10];
const METAL_TAU: f64 = 0.9;
const METAL_LEVEL: f64 = 0.20;

#[derive(Debug, Clone)]
pub struct Cymbal {
    band: BandPass,
    partials: [Phase; 6],
}

impl Cymbal {
    pub fn new(dt: f64) -> Self {
        Self {
            band: BandPass::new(BAND_LOW_HZ, BAND_HIGH_HZ, dt),
            partials: [Phase::new(); 6],
        }
    }
}

impl DrumSynth for Cymbal {
    fn next_sample(&mut self, t: f64, dt: f64, noise: &mut NoiseGenerator) -> f64 {
        let band = self.band.process(noise.next11());

        let mut metal = 0.0;
        for ((phase, ratio), weight) in self
            .partials
            .iter_mut()
            .zip(PARTIAL_RATIOS)
            .zip(PARTIAL_WEIGHTS)
        {
            metal += weight * sine01(phase.advance(CLANG_HZ * ratio, dt));
        }
        metal *= (-t / METAL_TAU).exp();

        BAND_LEVEL * band + METAL_LEVEL * metal
    }

    fn set_sample_period(&mut self, dt: f64) {
        self.band.set_sample_period(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partials_stay_below_nyquist_at_44k() {
        for ratio in PARTIAL_RATIOS {
            assert!(CLANG_HZ * ratio < 22_050.0);
        }
    }

    #[test]
    fn output_bound_shrinks_as_metal_fades() {
        // HPF → LPF of noise in [-1, 1) never exceeds 2, and the partial
        // weights sum to 0.92, so the late bound is set by the fade.
        let weights: f64 = PARTIAL_WEIGHTS.iter().sum();
        assert!((weights - 0.92).abs() < 1e-12);

        let dt = 1.0 / 44_100.0;
        let mut cymbal = Cymbal::new(dt);
        let mut noise = NoiseGenerator::new(5);
        for n in 0..88_200 {
            let t = n as f64 * dt;
            let bound = BAND_LEVEL * 2.0 + METAL_LEVEL * weights * (-t / METAL_TAU).exp();
            let s = cymbal.next_sample(t, dt, &mut noise);
            assert!(s.abs() <= bound, "tick {n}: {s} > {bound}");
        }
    }
}
