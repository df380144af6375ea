use crate::{
    dsp::{distortion::soft_clip, filter::OnePoleLowPass},
    engine::config::BusConfig,
    Frame,
};

/*
Effects Bus
===========

Runs once per tick on the summed stereo frame:

    in ──► × gain ──► lowpass (per channel) ──► dry/wet blend ──► soft clip ──► out

The wet path carries a fixed level (the "room" signal is a constant 1.0),
so a non-zero wet adds a DC offset of `wet` to each channel before the
limiter. With the defaults, silence in gives soft_clip(0.2) ≈ 0.18 out.

| setting  | default | range        |
| -------- | ------- | ------------ |
| gain     | 0.90    | any finite   |
| lowpass  | 8 kHz   | > 0          |
| wet      | 0.20    | 0..=1        |
| feedback | 0.25    | 0..=0.95     |

Feedback is stored but no delay line reads it.
*/

/// Level of the wet path.
pub const WET_SIGNAL: f64 = 1.0;
/// Upper limit for the stored feedback amount.
pub const MAX_FEEDBACK: f64 = 0.95;

#[derive(Debug, Clone)]
pub struct EffectsBus {
    gain: f64,
    wet: f64,
    feedback: f64,
    sample_period: f64,
    lowpass: [OnePoleLowPass; 2],
}

impl EffectsBus {
    pub fn new(config: &BusConfig, sample_rate: f64) -> Self {
        let sample_period = 1.0 / sample_rate;
        let lowpass = OnePoleLowPass::new(config.lowpass_hz, sample_period);
        Self {
            gain: config.gain,
            wet: config.wet.clamp(0.0, 1.0),
            feedback: config.feedback.clamp(0.0, MAX_FEEDBACK),
            sample_period,
            lowpass: [lowpass; 2],
        }
    }

    /// Run one frame through the bus.
    ///
    /// Output magnitude is always below 2. It stays below 1 only while the
    /// blended signal does, which holds for any input frame below 2 in
    /// magnitude (two voices or fewer at full velocity).
    #[inline]
    pub fn process(&mut self, frame: Frame) -> Frame {
        let mut out = [0.0; 2];
        for ((y, x), lp) in out.iter_mut().zip(frame).zip(&mut self.lowpass) {
            let filtered = lp.process(x * self.gain);
            *y = soft_clip((1.0 - self.wet) * filtered + self.wet * WET_SIGNAL);
        }
        out
    }

    pub fn set_gain(&mut self, gain: f64) {
        self.gain = gain;
    }

    pub fn set_wet(&mut self, wet: f64) {
        self.wet = wet.clamp(0.0, 1.0);
    }

    pub fn set_feedback(&mut self, feedback: f64) {
        self.feedback = feedback.clamp(0.0, MAX_FEEDBACK);
    }

    pub fn set_lowpass_hz(&mut self, cutoff_hz: f64) {
        for lp in &mut self.lowpass {
            lp.set_cutoff(cutoff_hz, self.sample_period);
        }
    }

    pub fn set_sample_rate(&mut self, sample_rate: f64) {
        self.sample_period = 1.0 / sample_rate;
        for lp in &mut self.lowpass {
            lp.set_sample_period(self.sample_period);
        }
    }

    pub fn gain(&self) -> f64 {
        self.gain
    }

    pub fn wet(&self) -> f64 {
        self.wet
    }

    pub fn feedback(&self) -> f64 {
        self.feedback
    }

    pub fn lowpass_hz(&self) -> f64 {
        self.lowpass[0].cutoff_hz
    }
}
