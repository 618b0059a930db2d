//! Organ voice - held sine partials.
//!
//! Drawbar-style stack: pure sines at the fundamental, the octave, and two
//! octaves up, each gated by the same sustaining envelope. Holds at 70%
//! while the key is down and fades over 0.4 s on release.

use crate::graph::envelope::EnvelopeNode;
use crate::graph::mixer::WaveAdder;
use crate::graph::modulated::{ModulatedOscillator, ParamMapping};
use crate::graph::node::Generator;
use crate::graph::oscillator::Oscillator;

/// Create an organ voice at the given frequency.
pub fn organ(frequency: f32, sample_rate: f32) -> impl Generator {
    WaveAdder::mono()
        .with_source(partial(frequency, sample_rate))
        .with_source(partial(frequency * 2.0, sample_rate))
        .with_source(partial(frequency * 4.0, sample_rate))
}

fn partial(frequency: f32, sample_rate: f32) -> ModulatedOscillator {
    ModulatedOscillator::new(Oscillator::sine(frequency, sample_rate)).with_amplitude_mod(
        EnvelopeNode::adsr(0.1, 0.1, 0.7, 0.4, sample_rate),
        ParamMapping::Scale,
    )
}
