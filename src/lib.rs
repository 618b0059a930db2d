pub mod dsp;
pub mod graph; // Composable per-sample generator nodes
pub mod io;
pub mod synth; // Voice lifecycle and render loop
pub mod voices; // Preset instrument graphs

pub const DEFAULT_SAMPLE_RATE: f32 = 44_100.0;
pub const DEFAULT_NOTE_DURATION: f32 = 1.5;
