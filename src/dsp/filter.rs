use std::f64::consts::TAU;

/*
One-Pole Filters
================

Drum voices only need gentle slopes, so every filter here is first order:
one feedback coefficient, one or two words of memory.

    a = exp(-2π · fc · dt)

  low-pass    y = (1 - a) · x + a · y_prev
  high-pass   y = (x - x_prev) + a · y_prev      (differentiator + leak)

| type      | constructed by       | passes          | rejects      |
| --------- | -------------------- | --------------- | ------------ |
| low-pass  | OnePoleLowPass       | below cutoff    | above cutoff |
| high-pass | OnePoleHighPass      | above cutoff    | below cutoff |
| band-pass | HPF → LPF (series)   | between cutoffs | outside      |

The coefficient depends on cutoff and sample period only. It is computed
once and again whenever either changes, never per sample.
*/

/// Feedback coefficient for a one-pole section at `cutoff_hz`.
#[inline]
pub fn one_pole_coefficient(cutoff_hz: f64, sample_period: f64) -> f64 {
    (-TAU * cutoff_hz * sample_period).exp()
}

#[derive(Debug, Clone, Copy)]
pub struct OnePoleLowPass {
    pub cutoff_hz: f64,
    a: f64,
    z: f64,
}

impl OnePoleLowPass {
    pub fn new(cutoff_hz: f64, sample_period: f64) -> Self {
        Self {
            cutoff_hz,
            a: one_pole_coefficient(cutoff_hz, sample_period),
            z: 0.0,
        }
    }

    #[inline]
    pub fn process(&mut self, x: f64) -> f64 {
        self.z = (1.0 - self.a) * x + self.a * self.z;
        self.z
    }

    pub fn set_cutoff(&mut self, cutoff_hz: f64, sample_period: f64) {
        self.cutoff_hz = cutoff_hz;
        self.a = one_pole_coefficient(cutoff_hz, sample_period);
    }

    pub fn set_sample_period(&mut self, sample_period: f64) {
        self.a = one_pole_coefficient(self.cutoff_hz, sample_period);
    }

    pub fn coefficient(&self) -> f64 {
        self.a
    }

    pub fn reset(&mut self) {
        self.z = 0.0;
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OnePoleHighPass {
    pub cutoff_hz: f64,
    a: f64,
    x_prev: f64,
    y_prev: f64,
}

impl OnePoleHighPass {
    pub fn new(cutoff_hz: f64, sample_period: f64) -> Self {
        Self {
            cutoff_hz,
            a: one_pole_coefficient(cutoff_hz, sample_period),
            x_prev: 0.0,
            y_prev: 0.0,
        }
    }

    #[inline]
    pub fn process(&mut self, x: f64) -> f64 {
        let y = (x - self.x_prev) + self.a * self.y_prev;
        self.x_prev = x;
        self.y_prev = y;
        y
    }

    pub fn set_sample_period(&mut self, sample_period: f64) {
        self.a = one_pole_coefficient(self.cutoff_hz, sample_period);
    }

    pub fn reset(&mut self) {
        self.x_prev = 0.0;
        self.y_prev = 0.0;
    }
}

/// Crude band-pass: high-pass into low-pass.
#[derive(Debug, Clone, Copy)]
pub struct BandPass {
    hp: OnePoleHighPass,
    lp: OnePoleLowPass,
}

impl BandPass {
    pub fn new(low_cut_hz: f64, high_cut_hz: f64, sample_period: f64) -> Self {
        Self {
            hp: OnePoleHighPass::new(low_cut_hz, sample_period),
            lp: OnePoleLowPass::new(high_cut_hz, sample_period),
        }
    }

    #[inline]
    pub fn process(&mut self, x: f64) -> f64 {
        self.lp.process(self.hp.process(x))
    }

    pub fn set_sample_period(&mut self, sample_period: f64) {
        self.hp.set_sample_period(sample_period);
        self.lp.set_sample_period(sample_period);
    }

    pub fn reset(&mut self) {
        self.hp.reset();
        self.lp.reset();
    }
}
