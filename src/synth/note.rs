//! Note-on configuration from loosely typed attributes.
//!
//! A score loader hands us `name = value` string pairs. Recognized names
//! update the pending note; anything unknown or unparsable is skipped and
//! the previous value is kept. Unknown drum types fall back to the kick.

use thiserror::Error;

use crate::{synth::voice::NoteOn, voices::DrumKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    #[error("unknown note attribute '{0}'")]
    Unknown(String),

    #[error("attribute '{name}' expects a finite number, got '{value}'")]
    InvalidNumber { name: String, value: String },
}

/// The note the next `note_on` will play.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteConfig {
    note: NoteOn,
}

impl Default for NoteConfig {
    fn default() -> Self {
        Self::new(NoteOn::new(DrumKind::Kick))
    }
}

impl NoteConfig {
    pub fn new(note: NoteOn) -> Self {
        Self { note }
    }

    /// Apply a single attribute.
    ///
    /// On error the configuration is left untouched.
    pub fn apply_attribute(&mut self, name: &str, value: &str) -> Result<(), AttributeError> {
        match name {
            "type" => {
                self.note.kind = value.parse().unwrap_or_else(|err| {
                    log::debug!("{err}, falling back to {}", DrumKind::Kick);
                    DrumKind::Kick
                });
            }
            "duration" => self.note.duration = parse_number(name, value)?,
            "velocity" => self.note.velocity = parse_number(name, value)?,
            "pitch" => self.note.pitch = parse_number(name, value)?,
            "pan" => self.note.pan = parse_number(name, value)?,
            _ => return Err(AttributeError::Unknown(name.to_string())),
        }
        Ok(())
    }

    /// Apply every attribute, skipping the ones that cannot be used.
    pub fn apply_attributes<'a, I>(&mut self, attributes: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (name, value) in attributes {
            if let Err(err) = self.apply_attribute(name, value) {
                log::debug!("ignoring note attribute: {err}");
            }
        }
    }

    pub fn note(&self) -> NoteOn {
        self.note
    }

    pub fn set_note(&mut self, note: NoteOn) {
        self.note = note;
    }
}

fn parse_number(name: &str, value: &str) -> Result<f64, AttributeError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AttributeError::InvalidNumber {
            name: name.to_string(),
            value: value.to_string(),
        })
}
