use crate::MIN_TIME;

/*
Drum Envelope
=============

A drum hit has no gate: it is struck and left to ring. The envelope is
therefore a pure function of the time since the hit, evaluated fresh every
tick instead of being stepped like a keyboard ADSR.

Vocabulary
----------

  attack      seconds to ramp 0 → 1
  decay       seconds to fall 1 → 0 along a mildly concave curve
  sustain     fixed level held until the nominal duration (shared by all
              voices, see SUSTAIN_LEVEL)
  duration    seconds from the hit to the start of release
  release     seconds to ramp sustain → 0


The Shape
---------

  Level
    1.0 ┐ ╱╲
        │╱  ╲
        │    ╲
    S   │     ╲ ·········┐
        │      ╲         │╲
    0.0 └───────╲────────┴─╲──→ Time
        A   D            dur  R

Decay reaches exactly zero at A + D:

    x = (t - A) / D
    level = (1 - x) · (1 - 0.2·x)

Then the level jumps up to the sustain plateau. That step is the only
discontinuity; percussive voices are short enough that the plateau mostly
serves as a quiet tail for the release to fade out.

If the nominal duration ends before attack + decay does, the decay curve
keeps running until A + D and release is measured from the duration.


The Stage Machine
-----------------

    ┌────────┐  t ≥ A   ┌───────┐  t ≥ A+D  ┌─────────┐  t ≥ dur  ┌─────────┐
    │ Attack │ ───────→ │ Decay │ ────────→ │ Sustain │ ────────→ │ Release │
    └────────┘          └───────┘           └─────────┘           └─────────┘
                                                                       │ t ≥ dur+R
                                                                       ↓
                                                                  ┌──────────┐
                                                                  │ Finished │
                                                                  └──────────┘

Attack, decay and release shorter than MIN_TIME are skipped rather than
divided by, so degenerate timings never produce NaN.
*/

/// Level held between the end of decay and the nominal duration.
pub const SUSTAIN_LEVEL: f64 = 0.08;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeStage {
    Attack,
    Decay,
    Sustain,
    Release,
    Finished,
}

/// Attack, decay and release times in seconds.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeTimes {
    pub attack: f64,
    pub decay: f64,
    pub release: f64,
}

impl EnvelopeTimes {
    pub const fn new(attack: f64, decay: f64, release: f64) -> Self {
        Self {
            attack,
            decay,
            release,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.attack.is_finite() && self.decay.is_finite() && self.release.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrumEnvelope {
    pub times: EnvelopeTimes,
    /// Seconds from the hit until release begins.
    pub duration: f64,
}

impl DrumEnvelope {
    pub fn new(times: EnvelopeTimes, duration: f64) -> Self {
        Self { times, duration }
    }

    pub fn stage(&self, t: f64) -> EnvelopeStage {
        let EnvelopeTimes {
            attack,
            decay,
            release,
        } = self.times;

        if t < attack && attack > MIN_TIME {
            EnvelopeStage::Attack
        } else if t >= attack && t < attack + decay && decay > MIN_TIME {
            EnvelopeStage::Decay
        } else if t < self.duration {
            EnvelopeStage::Sustain
        } else if release > MIN_TIME && t < self.duration + release {
            EnvelopeStage::Release
        } else {
            EnvelopeStage::Finished
        }
    }

    /// Gain in `[0, 1]` at `t` seconds after the hit.
    pub fn level(&self, t: f64) -> f64 {
        let EnvelopeTimes {
            attack,
            decay,
            release,
        } = self.times;

        match self.stage(t) {
            EnvelopeStage::Attack => t / attack,
            EnvelopeStage::Decay => {
                let x = (t - attack) / decay;
                (1.0 - x) * (1.0 - 0.2 * x)
            }
            EnvelopeStage::Sustain => SUSTAIN_LEVEL,
            EnvelopeStage::Release => {
                let progress = ((t - self.duration) / release).clamp(0.0, 1.0);
                SUSTAIN_LEVEL * (1.0 - progress)
            }
            EnvelopeStage::Finished => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kick() -> DrumEnvelope {
        DrumEnvelope::new(EnvelopeTimes::new(0.002, 0.12, 0.10), 0.25)
    }

    #[test]
    fn starts_at_zero() {
        assert_eq!(kick().level(0.0), 0.0);
    }

    #[test]
    fn attack_is_linear() {
        let env = kick();
        assert!((env.level(0.001) - 0.5).abs() < 1e-12);
        assert_eq!(env.stage(0.001), EnvelopeStage::Attack);
    }

    #[test]
    fn decay_is_continuous_with_attack_and_reaches_zero() {
        let env = kick();
        assert!((env.level(0.002) - 1.0).abs() < 1e-12);
        assert!((env.level(0.002 - 1e-9) - 1.0).abs() < 1e-5);

        // x = 0.5: 0.5 · 0.9
        assert!((env.level(0.062) - 0.45).abs() < 1e-12);

        let end = 0.002 + 0.12;
        assert!(env.level(end - 1e-9) < 1e-6);
    }

    #[test]
    fn jumps_to_fixed_sustain_after_decay() {
        let env = kick();
        assert_eq!(env.stage(0.2), EnvelopeStage::Sustain);
        assert_eq!(env.level(0.2), SUSTAIN_LEVEL);
    }

    #[test]
    fn release_ramps_to_zero() {
        let env = kick();
        assert_eq!(env.stage(0.25), EnvelopeStage::Release);
        assert!((env.level(0.25) - SUSTAIN_LEVEL).abs() < 1e-12);
        assert!((env.level(0.30) - SUSTAIN_LEVEL * 0.5).abs() < 1e-12);
        assert!(env.level(0.35) < 1e-12);
        assert_eq!(env.stage(0.36), EnvelopeStage::Finished);
    }

    #[test]
    fn zero_release_cuts_immediately() {
        let env = DrumEnvelope::new(EnvelopeTimes::new(0.001, 0.01, 0.0), 0.05);
        assert_eq!(env.level(0.049), SUSTAIN_LEVEL);
        assert_eq!(env.level(0.05), 0.0);
    }

    #[test]
    fn zero_attack_and_decay_never_divide() {
        let env = DrumEnvelope::new(EnvelopeTimes::new(0.0, 0.0, 0.0), 0.1);
        for i in 0..200 {
            let level = env.level(i as f64 * 0.001);
            assert!(level.is_finite());
        }
        assert_eq!(env.level(0.0), SUSTAIN_LEVEL);
    }

    #[test]
    fn decay_overrunning_duration_keeps_its_curve() {
        // Snare timings: decay ends at 0.0808, after the 0.07 duration.
        let env = DrumEnvelope::new(EnvelopeTimes::new(0.0008, 0.080, 0.050), 0.07);
        assert_eq!(env.stage(0.075), EnvelopeStage::Decay);
        assert_eq!(env.stage(0.09), EnvelopeStage::Release);
        let expected = SUSTAIN_LEVEL * (1.0 - (0.09 - 0.07) / 0.05);
        assert!((env.level(0.09) - expected).abs() < 1e-12);
    }

    #[test]
    fn level_stays_in_unit_range() {
        let env = kick();
        for i in 0..4000 {
            let level = env.level(i as f64 * 1e-4);
            assert!((0.0..=1.0).contains(&level));
        }
    }
}
