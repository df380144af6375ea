//! Per-tick audio interface.
//!
//! [`DrumEngine`] ties the voice pool to the effects bus. A host calls
//! [`DrumEngine::tick`] once per sample (or [`DrumEngine::render_block`] once
//! per callback) on a single audio thread. Note-ons arrive either directly
//! through [`DrumEngine::add_voice`], from string attributes via
//! [`DrumEngine::set_note`] + [`DrumEngine::note_on`], or as queued
//! [`DrumMessage`]s applied by [`DrumEngine::drain`].

pub mod bus;
pub mod config;

pub use bus::EffectsBus;
pub use config::{BusConfig, ConfigError, EngineConfig, NoteDefaults};

use crate::{
    synth::{DrumMessage, MessageReceiver, NoteConfig, NoteOn, VoicePool},
    voices::DrumKind,
    Frame,
};

pub struct DrumEngine {
    pool: VoicePool,
    bus: EffectsBus,
    note: NoteConfig,
    sample_rate: f64,
}

impl DrumEngine {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let default_note = NoteOn::new(DrumKind::Kick)
            .with_duration(config.note.duration)
            .with_velocity(config.note.velocity);

        log::info!(
            "drum engine at {} Hz, {} voices, seed {:#018x}",
            config.sample_rate,
            config.max_polyphony,
            config.seed
        );

        Ok(Self {
            pool: VoicePool::new(
                config.sample_rate,
                config.max_polyphony,
                config.kick,
                config.seed,
            ),
            bus: EffectsBus::new(&config.bus, config.sample_rate),
            note: NoteConfig::new(default_note),
            sample_rate: config.sample_rate,
        })
    }

    /// Change the sample rate. Live voices and the bus are retuned in place.
    pub fn set_sample_rate(&mut self, sample_rate: f64) -> Result<(), ConfigError> {
        config::validate_sample_rate(sample_rate)?;
        log::debug!("sample rate {} Hz -> {} Hz", self.sample_rate, sample_rate);

        self.sample_rate = sample_rate;
        self.pool.set_sample_rate(sample_rate);
        self.bus.set_sample_rate(sample_rate);
        Ok(())
    }

    /// Update the pending note from `name = value` attributes.
    ///
    /// Unknown names and bad values are skipped; the previous value stays.
    pub fn set_note<'a, I>(&mut self, attributes: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        self.note.apply_attributes(attributes);
    }

    /// Spawn a voice from the pending note.
    pub fn note_on(&mut self) {
        let note = self.note.note();
        self.pool.spawn_note(&note);
    }

    /// Spawn a voice right away, bypassing attribute parsing.
    pub fn add_voice(&mut self, note: NoteOn) {
        self.pool.spawn_note(&note);
    }

    /// Render one stereo frame through the bus.
    ///
    /// The flag is `false` once every voice has been retired. The bus keeps
    /// producing its wet offset after that, so hosts may stop calling.
    #[inline]
    pub fn tick(&mut self) -> (Frame, bool) {
        let (frame, live) = self.pool.render();
        (self.bus.process(frame), live)
    }

    /// Fill an interleaved buffer, one tick per frame.
    ///
    /// Even channels get the left sample, odd channels the right. Returns
    /// whether voices remain after the last frame.
    pub fn render_block(&mut self, out: &mut [f32], channels: usize) -> bool {
        let channels = channels.max(1);
        let mut live = !self.pool.is_empty();

        for frame in out.chunks_mut(channels) {
            let ([left, right], still_live) = self.tick();
            live = still_live;
            for (ch, sample) in frame.iter_mut().enumerate() {
                let value = if ch % 2 == 0 { left } else { right };
                *sample = value as f32;
            }
        }

        live
    }

    pub fn handle(&mut self, message: DrumMessage) {
        match message {
            DrumMessage::NoteOn(note) => self.add_voice(note),
            DrumMessage::SetGain(gain) if gain.is_finite() => self.bus.set_gain(gain),
            DrumMessage::SetLowpass(hz) if hz.is_finite() && hz > 0.0 => {
                self.bus.set_lowpass_hz(hz)
            }
            DrumMessage::SetWet(wet) if wet.is_finite() => self.bus.set_wet(wet),
            DrumMessage::SetFeedback(amount) if amount.is_finite() => {
                self.bus.set_feedback(amount)
            }
            other => log::debug!("ignoring out-of-range control message {other:?}"),
        }
    }

    /// Apply every pending control message. Call before rendering a block.
    pub fn drain<R: MessageReceiver + ?Sized>(&mut self, rx: &mut R) {
        while let Some(message) = rx.pop() {
            self.handle(message);
        }
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn active_voices(&self) -> usize {
        self.pool.len()
    }

    pub fn pending_note(&self) -> NoteOn {
        self.note.note()
    }

    pub fn pool(&self) -> &VoicePool {
        &self.pool
    }

    pub fn bus(&self) -> &EffectsBus {
        &self.bus
    }
}
