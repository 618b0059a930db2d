#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DEFAULT_NOTE_DURATION, DEFAULT_SAMPLE_RATE};

/// Render and playback settings shared by voices and the output sink.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioConfig {
    /// Samples per second for every generator in a voice graph.
    pub sample_rate: f32,
    /// How long a triggered note sounds before its release begins, seconds.
    pub note_duration: f32,
    /// Output ring capacity in frames. Small enough for low-latency
    /// triggering, large enough to ride out scheduling jitter.
    pub buffer_frames: usize,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            note_duration: DEFAULT_NOTE_DURATION,
            buffer_frames: 1_024,
        }
    }
}

impl AudioConfig {
    /// Number of samples in one full note at this configuration.
    pub fn note_frames(&self) -> usize {
        (self.note_duration * self.sample_rate).round() as usize
    }
}
