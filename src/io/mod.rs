//! Boundary adapters between the core's normalized float output and the
//! outside world: fixed-point conversion for sample sinks and a realtime
//! playback sink built on a lock-free ring buffer.

/// Normalized float to 16-bit signed conversion and interleaving.
pub mod convert;
/// Realtime audio output through cpal, fed by an rtrb ring buffer.
#[cfg(feature = "rtrb")]
pub mod output;
