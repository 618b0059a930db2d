// Purpose: single-voice lifecycle above the graph nodes.
// A voice owns one generator graph, drives the bounded render loop, and
// carries the note-on/note-off trigger protocol.

pub mod config;
pub mod voice;

pub use config::AudioConfig;
pub use voice::{Voice, VoiceState};
