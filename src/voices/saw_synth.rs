//! Saw-swept synth voice.
//!
//! Three slowly-swelling triangle partials (fundamental, octave, two
//! octaves) run through a master volume driven by a 1 Hz sawtooth whose
//! own amplitude decays over a second. The sweep chops the swell into a
//! falling rhythmic throb that dies away as the decay completes.

use crate::graph::envelope::EnvelopeNode;
use crate::graph::extensions::GeneratorExt;
use crate::graph::mixer::WaveAdder;
use crate::graph::modulated::{ModulatedOscillator, ParamMapping};
use crate::graph::node::Generator;
use crate::graph::oscillator::Oscillator;
use crate::graph::volume::ModulatedVolume;

/// Create a saw-swept voice at the given frequency.
pub fn saw_synth(frequency: f32, sample_rate: f32) -> impl Generator {
    let partials = WaveAdder::mono()
        .with_source(partial(frequency, sample_rate))
        .with_source(partial(frequency * 2.0, sample_rate))
        .with_source(partial(frequency * 4.0, sample_rate));

    let sweep = ModulatedVolume::new(
        ModulatedOscillator::new(Oscillator::sawtooth(1.0, sample_rate)).with_amplitude_mod(
            EnvelopeNode::adsr(0.0, 1.0, 0.0, 0.3, sample_rate),
            ParamMapping::Scale,
        ),
    );

    partials.stage(sweep)
}

fn partial(frequency: f32, sample_rate: f32) -> ModulatedOscillator {
    ModulatedOscillator::new(Oscillator::triangle(frequency, sample_rate)).with_amplitude_mod(
        EnvelopeNode::adsr(0.33, 1.11, 0.0, 0.25, sample_rate),
        ParamMapping::Scale,
    )
}
