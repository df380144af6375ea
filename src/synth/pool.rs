use crate::{
    dsp::{EnvelopeTimes, NoiseGenerator},
    synth::voice::{NoteOn, Voice},
    voices::DrumKind,
    Frame, MAX_POLYPHONY,
};

/// Owns every live voice, spawns new ones and mixes them each tick.
///
/// Voices are kept in spawn order. When the pool is full the oldest
/// surviving voice is dropped to make room, regardless of how loud it
/// still is.
pub struct VoicePool {
    voices: Vec<Voice>,
    max_voices: usize,
    sample_period: f64,
    kick_times: EnvelopeTimes,
    seed: u64,
    spawn_counter: u64,
}

impl VoicePool {
    pub fn new(sample_rate: f64, max_voices: usize, kick_times: EnvelopeTimes, seed: u64) -> Self {
        let max_voices = max_voices.max(1);
        Self {
            voices: Vec::with_capacity(max_voices),
            max_voices,
            sample_period: 1.0 / sample_rate,
            kick_times,
            seed,
            spawn_counter: 0,
        }
    }

    pub fn with_defaults(sample_rate: f64) -> Self {
        Self::new(
            sample_rate,
            MAX_POLYPHONY,
            EnvelopeTimes::new(0.002, 0.12, 0.10),
            0,
        )
    }

    /// Start a voice with no pan.
    pub fn spawn(&mut self, kind: DrumKind, duration: f64, velocity: f64, pitch: f64) {
        self.spawn_note(&NoteOn {
            kind,
            duration,
            velocity,
            pitch,
            pan: 0.0,
        });
    }

    /// Start a voice, evicting the oldest one if the pool is full.
    ///
    /// Non-finite fields fall back to the `NoteOn::new` defaults so a bad
    /// note can neither poison the mix nor outlive its tail.
    pub fn spawn_note(&mut self, note: &NoteOn) {
        let note = if note.is_finite() {
            *note
        } else {
            log::debug!("non-finite note fields replaced with defaults: {note:?}");
            note.sanitized()
        };
        let noise = NoiseGenerator::for_spawn(self.seed, self.spawn_counter);
        self.spawn_counter = self.spawn_counter.wrapping_add(1);

        if self.voices.len() >= self.max_voices {
            let evicted = self.voices.remove(0);
            log::trace!(
                "polyphony limit {} reached, evicting {} at {:.3}s",
                self.max_voices,
                evicted.kind(),
                evicted.elapsed()
            );
        }

        self.voices
            .push(Voice::new(&note, self.kick_times, noise, self.sample_period));
    }

    /// Render one tick.
    ///
    /// Every voice is soft-clipped on its own and summed into both channels.
    /// Voices past their tail are retired. Returns the frame and whether any
    /// voice is still live.
    pub fn render(&mut self) -> (Frame, bool) {
        let dt = self.sample_period;
        let mut mono = 0.0;

        self.voices.retain_mut(|voice| {
            mono += voice.next_sample(dt);
            !voice.is_finished()
        });

        ([mono, mono], !self.voices.is_empty())
    }

    /// Change the sample rate for new and live voices.
    pub fn set_sample_rate(&mut self, sample_rate: f64) {
        self.sample_period = 1.0 / sample_rate;
        for voice in &mut self.voices {
            voice.set_sample_period(self.sample_period);
        }
    }

    pub fn sample_period(&self) -> f64 {
        self.sample_period
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }

    pub fn max_voices(&self) -> usize {
        self.max_voices
    }

    /// Live voices, oldest first.
    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }

    /// Number of voices spawned so far, including evicted and retired ones.
    pub fn spawn_count(&self) -> u64 {
        self.spawn_counter
    }
}
