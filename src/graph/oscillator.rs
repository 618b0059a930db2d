use std::f32::consts::TAU;

use crate::dsp::oscillator::{phase_increment, waveform_value, wrap_cycle, Waveform};
use crate::graph::node::{Frame, Generator};

/// Periodic waveform source.
///
/// Each draw evaluates the waveform at the accumulated cycle phase, then
/// advances the accumulator by `frequency / sample_rate` wrapped into
/// [0, 1). Frequency, amplitude, and phase offset each keep their
/// construction-time value alongside the live one, so modulation can write
/// a new live value every sample while mapping functions stay anchored to
/// the original parameter. External writes take effect on the next draw.
pub struct Oscillator {
    waveform: Waveform,
    init_frequency: f32,
    frequency: f32,
    init_amplitude: f32,
    amplitude: f32,
    /// Phase offset in radians, as used by `sin(2π·phase + offset)`.
    init_phase: f32,
    phase: f32,
    /// Accumulated cycle position in [0, 1).
    cycle: f32,
    sample_rate: f32,
}

impl Oscillator {
    pub fn new(waveform: Waveform, frequency: f32, sample_rate: f32) -> Self {
        Self {
            waveform,
            init_frequency: frequency,
            frequency,
            init_amplitude: 1.0,
            amplitude: 1.0,
            init_phase: 0.0,
            phase: 0.0,
            cycle: 0.0,
            sample_rate,
        }
    }

    pub fn sine(frequency: f32, sample_rate: f32) -> Self {
        Self::new(Waveform::Sine, frequency, sample_rate)
    }

    pub fn triangle(frequency: f32, sample_rate: f32) -> Self {
        Self::new(Waveform::Triangle, frequency, sample_rate)
    }

    pub fn sawtooth(frequency: f32, sample_rate: f32) -> Self {
        Self::new(Waveform::Sawtooth, frequency, sample_rate)
    }

    pub fn square(frequency: f32, sample_rate: f32) -> Self {
        Self::new(Waveform::Square, frequency, sample_rate)
    }

    /// Set the construction-time amplitude (default 1.0).
    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.init_amplitude = amplitude;
        self.amplitude = amplitude;
        self
    }

    /// Set the construction-time phase offset in radians.
    pub fn with_phase(mut self, phase: f32) -> Self {
        self.init_phase = phase;
        self.phase = phase;
        self
    }

    pub fn init_frequency(&self) -> f32 {
        self.init_frequency
    }

    pub fn init_amplitude(&self) -> f32 {
        self.init_amplitude
    }

    pub fn init_phase(&self) -> f32 {
        self.init_phase
    }

    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
    }

    pub fn set_amplitude(&mut self, amplitude: f32) {
        self.amplitude = amplitude;
    }

    pub fn set_phase(&mut self, phase: f32) {
        self.phase = phase;
    }

    pub fn waveform(&self) -> Waveform {
        self.waveform
    }
}

impl Generator for Oscillator {
    fn next_frame(&mut self) -> Frame {
        let shifted = wrap_cycle(self.cycle + self.phase / TAU);
        let value = self.amplitude * waveform_value(self.waveform, shifted);
        self.cycle = wrap_cycle(self.cycle + phase_increment(self.frequency, self.sample_rate));
        Frame::Mono(value)
    }

    fn reset(&mut self) {
        self.frequency = self.init_frequency;
        self.amplitude = self.init_amplitude;
        self.phase = self.init_phase;
        self.cycle = 0.0;
    }
}
