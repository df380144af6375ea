// Purpose: Voice lifecycle, polyphony, note-on configuration
// This layer sits above the drum voices and decides which ones are sounding

pub mod message;
pub mod note;
pub mod pool;
pub mod voice;

pub use message::{DrumMessage, MessageReceiver};
pub use note::{AttributeError, NoteConfig};
pub use pool::VoicePool;
pub use voice::{NoteOn, Voice, TAIL_EPSILON};
