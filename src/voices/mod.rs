//! Pre-built instrument voices.
//!
//! Each preset is a construction function taking a frequency in Hz (the
//! core never parses note names) and a sample rate, returning a fresh
//! generator graph ready to draw. One call builds one voice; nothing is
//! shared between voices, so every key press gets independent envelope and
//! oscillator state.
//!
//! # Example
//!
//! ```
//! use keywave::synth::Voice;
//! use keywave::voices;
//!
//! let graph = voices::organ(440.0, 44_100.0);
//! let mut voice = Voice::new(graph, 44_100.0);
//! let frames = voice.render(1_024);
//! assert_eq!(frames.len(), 1_024);
//! ```

mod organ;
mod saw_synth;
mod synth;

use std::error::Error;
use std::fmt;

use tracing::debug;

use crate::graph::node::Generator;

pub use organ::organ;
pub use saw_synth::saw_synth;
pub use synth::synth;

/// Names accepted by [`by_name`], in presentation order.
pub const PRESET_NAMES: &[&str] = &["synth", "organ", "saw_synth"];

/// Selecting a preset that does not exist is a construction-time error,
/// surfaced immediately rather than played as silence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPreset {
    name: String,
}

impl fmt::Display for UnknownPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown preset '{}' (available: {})",
            self.name,
            PRESET_NAMES.join(", ")
        )
    }
}

impl Error for UnknownPreset {}

/// Build a fresh voice graph for a named preset.
pub fn by_name(
    name: &str,
    frequency: f32,
    sample_rate: f32,
) -> Result<Box<dyn Generator>, UnknownPreset> {
    debug!(preset = name, frequency, sample_rate, "building voice graph");
    match name {
        "synth" => Ok(Box::new(synth(frequency, sample_rate))),
        "organ" => Ok(Box::new(organ(frequency, sample_rate))),
        "saw_synth" => Ok(Box::new(saw_synth(frequency, sample_rate))),
        _ => Err(UnknownPreset {
            name: name.to_string(),
        }),
    }
}
