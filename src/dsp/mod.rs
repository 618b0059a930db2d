//! Low-level DSP primitives used by the higher level graph nodes.
//!
//! These components are allocation-free and realtime-safe, making them safe to
//! embed directly inside voice graphs. They intentionally stay focused on the
//! per-sample math so graph nodes can layer on composition, modulation, and
//! lifecycle handling.

/// Attack/decay/sustain/release envelope stepper.
pub mod envelope;
/// Waveform shaping functions for the basic oscillator shapes.
pub mod oscillator;
/// Stereo pan law and bipolar/unipolar conversions.
pub mod pan;

pub use envelope::{AdsrEnvelope, EnvelopeStage};
pub use oscillator::Waveform;
