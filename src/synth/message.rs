use std::collections::VecDeque;

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::synth::voice::NoteOn;

/// Control messages delivered to the audio thread.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DrumMessage {
    NoteOn(NoteOn),
    SetGain(f64),
    SetLowpass(f64),
    SetWet(f64),
    SetFeedback(f64),
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<DrumMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<DrumMessage> {
    fn pop(&mut self) -> Option<DrumMessage> {
        Consumer::pop(self).ok()
    }
}

/// Offline rendering and tests queue messages in a plain deque.
impl MessageReceiver for VecDeque<DrumMessage> {
    fn pop(&mut self) -> Option<DrumMessage> {
        self.pop_front()
    }
}
