//! Plucked synth voice - fast swell, no sustain.
//!
//! Three partials at the fundamental, the octave, and two octaves up. The
//! fundamental is a triangle for body; the upper partials are sines that
//! thin out into shimmer. Every partial is gated by a short no-sustain
//! envelope, so each key press is a discrete pluck with a long 0.7 s
//! release tail when the key comes up early.

use crate::dsp::oscillator::Waveform;
use crate::graph::envelope::EnvelopeNode;
use crate::graph::mixer::WaveAdder;
use crate::graph::modulated::{ModulatedOscillator, ParamMapping};
use crate::graph::node::Generator;
use crate::graph::oscillator::Oscillator;

/// Create a synth voice at the given frequency.
pub fn synth(frequency: f32, sample_rate: f32) -> impl Generator {
    WaveAdder::mono()
        .with_source(partial(Waveform::Triangle, frequency, sample_rate))
        .with_source(partial(Waveform::Sine, frequency * 2.0, sample_rate))
        .with_source(partial(Waveform::Sine, frequency * 4.0, sample_rate))
}

fn partial(waveform: Waveform, frequency: f32, sample_rate: f32) -> ModulatedOscillator {
    ModulatedOscillator::new(Oscillator::new(waveform, frequency, sample_rate))
        .with_amplitude_mod(
            EnvelopeNode::adsr(0.1, 0.0, 0.0, 0.7, sample_rate),
            ParamMapping::Scale,
        )
}
