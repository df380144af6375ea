use std::f64::consts::TAU;

/// Sine of a phase measured in cycles (one cycle = 1.0).
#[inline]
pub fn sine01(phase: f64) -> f64 {
    (phase * TAU).sin()
}

/// Phase accumulator wrapped to `[0, 1)`.
///
/// Frequency may change every sample (pitch sweeps); the phase integrates
/// it so the waveform stays continuous.
#[derive(Debug, Clone, Copy, Default)]
pub struct Phase(f64);

impl Phase {
    pub fn new() -> Self {
        Self(0.0)
    }

    /// Advance by `freq_hz · dt` cycles and return the wrapped phase.
    #[inline]
    pub fn advance(&mut self, freq_hz: f64, dt: f64) -> f64 {
        self.0 += freq_hz * dt;
        self.0 -= self.0.floor();
        self.0
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }
}
