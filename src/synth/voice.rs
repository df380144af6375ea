use crate::{
    dsp::{distortion::soft_clip, DrumEnvelope, EnvelopeStage, EnvelopeTimes, NoiseGenerator},
    voices::{DrumKind, VoiceBody},
};

/// Seconds a voice lingers past its release before it is retired.
pub const TAIL_EPSILON: f64 = 1e-3;

/// A single drum hit request.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteOn {
    pub kind: DrumKind,
    /// Seconds before release begins. Ignored by drums with a fixed length.
    pub duration: f64,
    /// Linear level, clamped to `0..=1` at spawn.
    pub velocity: f64,
    /// Semitone offset; only toms are tuned by it.
    pub pitch: f64,
    /// Stereo position `-1..=1`. Stored on the voice, not applied.
    pub pan: f64,
}

impl NoteOn {
    pub fn new(kind: DrumKind) -> Self {
        Self {
            kind,
            duration: 0.25,
            velocity: 0.9,
            pitch: 0.0,
            pan: 0.0,
        }
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_velocity(mut self, velocity: f64) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_pitch(mut self, semitones: f64) -> Self {
        self.pitch = semitones;
        self
    }

    pub fn with_pan(mut self, pan: f64) -> Self {
        self.pan = pan;
        self
    }

    /// Whether every numeric field is finite.
    pub fn is_finite(&self) -> bool {
        [self.duration, self.velocity, self.pitch, self.pan]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Replace non-finite fields with the defaults of [`NoteOn::new`].
    pub fn sanitized(self) -> Self {
        let defaults = Self::new(self.kind);
        let pick = |v: f64, fallback: f64| if v.is_finite() { v } else { fallback };
        Self {
            kind: self.kind,
            duration: pick(self.duration, defaults.duration),
            velocity: pick(self.velocity, defaults.velocity),
            pitch: pick(self.pitch, defaults.pitch),
            pan: pick(self.pan, defaults.pan),
        }
    }
}

/// One sounding drum hit.
///
/// A voice has no gate. It is rendered until its elapsed time passes
/// `duration + release + TAIL_EPSILON`, then the pool drops it.
#[derive(Debug, Clone)]
pub struct Voice {
    kind: DrumKind,
    elapsed: f64,
    velocity: f64,
    pan: f64,
    envelope: DrumEnvelope,
    noise: NoiseGenerator,
    body: VoiceBody,
}

impl Voice {
    /// Build a voice for `note`. `fallback` supplies attack/decay/release
    /// for drums whose profile leaves them open (the kick).
    pub fn new(note: &NoteOn, fallback: EnvelopeTimes, noise: NoiseGenerator, dt: f64) -> Self {
        let profile = note.kind.profile();
        let times = profile.times.unwrap_or(fallback);
        let duration = profile.duration.unwrap_or(note.duration);

        Self {
            kind: note.kind,
            elapsed: 0.0,
            velocity: note.velocity.clamp(0.0, 1.0),
            pan: note.pan,
            envelope: DrumEnvelope::new(times, duration),
            noise,
            body: VoiceBody::new(note.kind, note.pitch, dt),
        }
    }

    /// Render one sample: envelope × velocity × drum output, soft-clipped.
    /// Advances the voice by `dt`.
    #[inline]
    pub fn next_sample(&mut self, dt: f64) -> f64 {
        let env = self.envelope.level(self.elapsed);
        let raw = self.body.next_sample(self.elapsed, dt, &mut self.noise);
        self.elapsed += dt;
        soft_clip(self.velocity * env * raw)
    }

    /// Time after which the voice is retired.
    pub fn tail(&self) -> f64 {
        self.envelope.duration + self.envelope.times.release.max(0.0) + TAIL_EPSILON
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed > self.tail()
    }

    pub fn set_sample_period(&mut self, dt: f64) {
        self.body.set_sample_period(dt);
    }

    pub fn kind(&self) -> DrumKind {
        self.kind
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn pan(&self) -> f64 {
        self.pan
    }

    pub fn envelope(&self) -> &DrumEnvelope {
        &self.envelope
    }

    pub fn stage(&self) -> EnvelopeStage {
        self.envelope.stage(self.elapsed)
    }
}
