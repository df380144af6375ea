use thiserror::Error;

use crate::{dsp::EnvelopeTimes, DEFAULT_SAMPLE_RATE, MAX_POLYPHONY};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("sample rate must be a positive finite number, got {0}")]
    InvalidSampleRate(f64),

    #[error("polyphony must be at least one voice")]
    ZeroPolyphony,

    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },
}

/// Effects bus settings.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusConfig {
    pub gain: f64,
    pub lowpass_hz: f64,
    /// Dry/wet blend, clamped to `0..=1`.
    pub wet: f64,
    /// Clamped to `0..=0.95`. Stored only; nothing feeds back yet.
    pub feedback: f64,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            gain: 0.90,
            lowpass_hz: 8000.0,
            wet: 0.20,
            feedback: 0.25,
        }
    }
}

/// Values the pending note starts from before any attribute is applied.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteDefaults {
    pub duration: f64,
    pub velocity: f64,
}

impl Default for NoteDefaults {
    fn default() -> Self {
        Self {
            duration: 0.25,
            velocity: 0.9,
        }
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub sample_rate: f64,
    pub max_polyphony: usize,
    /// Engine identity mixed into every voice's noise seed.
    pub seed: u64,
    /// Attack/decay/release for the kick (and unknown drum types).
    pub kick: EnvelopeTimes,
    pub note: NoteDefaults,
    pub bus: BusConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            max_polyphony: MAX_POLYPHONY,
            seed: 0x5AA7_D5A5_0000_0001,
            kick: EnvelopeTimes::new(0.002, 0.12, 0.10),
            note: NoteDefaults::default(),
            bus: BusConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn with_sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_sample_rate(self.sample_rate)?;
        if self.max_polyphony == 0 {
            return Err(ConfigError::ZeroPolyphony);
        }

        let checks = [
            ("kick.attack", self.kick.attack),
            ("kick.decay", self.kick.decay),
            ("kick.release", self.kick.release),
            ("note.duration", self.note.duration),
            ("note.velocity", self.note.velocity),
            ("bus.gain", self.bus.gain),
            ("bus.lowpass_hz", self.bus.lowpass_hz),
            ("bus.wet", self.bus.wet),
            ("bus.feedback", self.bus.feedback),
        ];
        for (name, value) in checks {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }
        Ok(())
    }
}

pub(crate) fn validate_sample_rate(sample_rate: f64) -> Result<(), ConfigError> {
    if sample_rate.is_finite() && sample_rate > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidSampleRate(sample_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(EngineConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_sample_rates() {
        for sr in [0.0, -44_100.0, f64::NAN, f64::INFINITY] {
            let err = EngineConfig::default().with_sample_rate(sr).validate();
            assert!(matches!(err, Err(ConfigError::InvalidSampleRate(_))));
        }
    }

    #[test]
    fn rejects_zero_polyphony() {
        let config = EngineConfig {
            max_polyphony: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroPolyphony));
    }

    #[test]
    fn names_the_non_finite_field() {
        let mut config = EngineConfig::default();
        config.bus.gain = f64::NAN;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().starts_with("bus.gain must be finite"));
    }
}
