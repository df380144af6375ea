//! DrumApp - audio stream setup and live input

use std::io::BufRead;

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::RingBuffer;

use saavy_drums::{
    engine::{DrumEngine, EngineConfig},
    synth::{DrumMessage, NoteOn},
    voices::{DrumKind, TomPitch},
};

use super::sequencer::StepSequencer;

/// Capacity of the stdin → audio thread queue.
const QUEUE_CAPACITY: usize = 256;

pub struct DrumApp {
    bpm: f64,
    bars: Option<usize>,
    seed: u64,
}

impl DrumApp {
    pub fn new(bpm: f64, bars: Option<usize>, seed: u64) -> Self {
        Self { bpm, bars, seed }
    }

    /// Open the default output device and play until stdin closes or `q`.
    pub fn run(self) -> EyreResult<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = config.sample_rate().0 as f64;
        let channels = config.channels() as usize;

        let mut engine = DrumEngine::new(
            EngineConfig::default()
                .with_sample_rate(sample_rate)
                .with_seed(self.seed),
        )?;
        let mut sequencer = StepSequencer::new(self.bpm, sample_rate, self.bars);
        let (mut tx, mut rx) = RingBuffer::<DrumMessage>::new(QUEUE_CAPACITY);

        tracing::info!(
            bpm = self.bpm,
            bars = ?self.bars,
            sample_rate,
            channels,
            "starting playback"
        );

        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                engine.drain(&mut rx);
                for frame in data.chunks_mut(channels) {
                    sequencer.advance(&mut engine);
                    engine.render_block(frame, channels);
                }
            },
            |err| tracing::error!("audio stream error: {err}"),
            None,
        )?;

        stream.play()?;

        println!("Playing... type k/s/h/t/c + Enter to hit, q to quit");
        for line in std::io::stdin().lock().lines() {
            let line = line.wrap_err("failed to read stdin")?;
            if line.trim() == "q" {
                break;
            }
            for note in line.chars().filter_map(hit_for_key) {
                if tx.push(DrumMessage::NoteOn(note)).is_err() {
                    tracing::warn!("control queue full, dropping hit");
                }
            }
        }

        Ok(())
    }
}

fn hit_for_key(key: char) -> Option<NoteOn> {
    let kind = match key.to_ascii_lowercase() {
        'k' => DrumKind::Kick,
        's' => DrumKind::Snare,
        'h' => DrumKind::HiHat,
        't' => DrumKind::Tom(TomPitch::Mid),
        'c' => DrumKind::Cymbal,
        _ => return None,
    };
    Some(NoteOn::new(kind))
}
