//! Step sequencer - sample-accurate drum pattern playback
//!
//! Runs in the audio callback. Once per output frame it checks whether the
//! next sixteenth-note step has been reached and, if so, spawns that step's
//! hits on the engine before the frame is rendered.

use saavy_drums::{
    engine::DrumEngine,
    synth::NoteOn,
    voices::{DrumKind, TomPitch},
};

/// Sixteenth notes per beat.
const STEPS_PER_BEAT: usize = 4;
/// Steps in one 4/4 bar.
pub const STEPS_PER_BAR: usize = 16;

/// One hit in the pattern.
#[derive(Debug, Clone, Copy)]
struct Hit {
    step: usize,
    note: NoteOn,
}

/// Sample-accurate sequencer playing a fixed kit pattern
pub struct StepSequencer {
    /// Samples per sixteenth note (fractional)
    samples_per_step: f64,
    /// Frames rendered so far
    frame: u64,
    /// Frame at which the next step fires
    next_step_at: f64,
    /// Absolute step counter
    step: usize,
    /// Bars to play; `None` loops forever
    bars: Option<usize>,
    pattern: Vec<Hit>,
    playing: bool,
}

impl StepSequencer {
    pub fn new(bpm: f64, sample_rate: f64, bars: Option<usize>) -> Self {
        Self {
            samples_per_step: Self::compute_samples_per_step(bpm, sample_rate),
            frame: 0,
            next_step_at: 0.0,
            step: 0,
            bars,
            pattern: kit_pattern(),
            playing: true,
        }
    }

    fn compute_samples_per_step(bpm: f64, sample_rate: f64) -> f64 {
        // steps per second = (bpm / 60) * steps per beat
        sample_rate / ((bpm / 60.0) * STEPS_PER_BEAT as f64)
    }

    /// Advance by one frame, triggering any hits due on it.
    ///
    /// Call once per frame before `DrumEngine::tick`.
    pub fn advance(&mut self, engine: &mut DrumEngine) {
        if !self.playing {
            return;
        }

        if self.frame as f64 >= self.next_step_at {
            if self.bars.is_some_and(|bars| self.step >= bars * STEPS_PER_BAR) {
                self.playing = false;
                return;
            }

            let bar_step = self.step % STEPS_PER_BAR;
            let last_bar = self
                .bars
                .is_some_and(|bars| self.step / STEPS_PER_BAR + 1 == bars);
            for hit in self.pattern.iter().filter(|h| h.step == bar_step) {
                engine.add_voice(hit.note);
            }
            if last_bar && bar_step >= 12 {
                engine.add_voice(fill_note(bar_step));
            }

            self.step += 1;
            self.next_step_at += self.samples_per_step;
        }

        self.frame += 1;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn step(&self) -> usize {
        self.step
    }
}

/// Four-on-the-floor kick, backbeat snare, eighth-note hats and a crash on one.
fn kit_pattern() -> Vec<Hit> {
    let mut hits = vec![Hit {
        step: 0,
        note: NoteOn::new(DrumKind::Cymbal).with_velocity(0.6),
    }];

    for step in [0, 4, 8, 12] {
        hits.push(Hit {
            step,
            note: NoteOn::new(DrumKind::Kick).with_duration(0.25),
        });
    }
    for step in [4, 12] {
        hits.push(Hit {
            step,
            note: NoteOn::new(DrumKind::Snare).with_velocity(0.8),
        });
    }
    for step in (0..STEPS_PER_BAR).step_by(2) {
        let velocity = if step % 4 == 0 { 0.5 } else { 0.35 };
        hits.push(Hit {
            step,
            note: NoteOn::new(DrumKind::HiHat).with_velocity(velocity),
        });
    }

    hits
}

/// Descending tom fill over the last beat of the final bar.
fn fill_note(bar_step: usize) -> NoteOn {
    let pitch = match bar_step {
        12 => TomPitch::High,
        13 | 14 => TomPitch::Mid,
        _ => TomPitch::Low,
    };
    NoteOn::new(DrumKind::Tom(pitch)).with_duration(0.18)
}
