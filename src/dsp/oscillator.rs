//! Waveform shaping functions.

use std::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Oscillator Waveforms
====================

All four shapes are defined as pure functions of a cycle phase in [0, 1).
The phase accumulator lives in the graph-level oscillator node; advancing it
by frequency/sample_rate per sample and wrapping keeps the math stable for
arbitrarily long notes (no growing time variable, no precision drift).

Shapes over one cycle (phase 0 → 1):

  Sine       sin(2π·phase)              smooth, fundamental only
  Triangle   4·|phase − 0.5| − 1        starts at +1, dips to −1 at mid-cycle
  Sawtooth   2·phase − 1                ramp from −1 up to +1, instant reset
  Square     sign(sin(2π·phase))        hard switch between +1 and −1

Each function returns values in [−1, +1]; amplitude scaling is applied by the
caller. Over one full cycle each shape averages to zero, which is what keeps
the generated audio free of DC offset.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
    Sawtooth,
    Square,
}

/// Wrap an arbitrary phase into the canonical [0, 1) cycle range.
///
/// Handles negative phases too, so phase modulation can push the
/// accumulator in either direction.
#[inline]
pub fn wrap_cycle(phase: f32) -> f32 {
    phase.rem_euclid(1.0)
}

/// Evaluate a waveform at the given cycle phase.
///
/// `phase` must already be wrapped into [0, 1); use [`wrap_cycle`] first
/// when combining an accumulator with a phase offset.
///
/// # Example
/// ```
/// use keywave::dsp::oscillator::{waveform_value, Waveform};
/// let v = waveform_value(Waveform::Sawtooth, 0.75);
/// assert!((v - 0.5).abs() < 1e-6); // 2·0.75 − 1
/// ```
#[inline]
pub fn waveform_value(waveform: Waveform, phase: f32) -> f32 {
    match waveform {
        Waveform::Sine => (TAU * phase).sin(),
        Waveform::Triangle => 4.0 * (phase - 0.5).abs() - 1.0,
        Waveform::Sawtooth => 2.0 * phase - 1.0,
        Waveform::Square => (TAU * phase).sin().signum(),
    }
}

/// Per-sample phase increment for a frequency at a sample rate.
#[inline]
pub fn phase_increment(frequency_hz: f32, sample_rate: f32) -> f32 {
    frequency_hz / sample_rate
}
