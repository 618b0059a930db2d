use crate::graph::node::{Frame, Generator};
use crate::graph::oscillator::Oscillator;

/*
Modulated Oscillator
====================

Routes modulator outputs (envelopes, LFO-style oscillators, or any other
generator) onto an oscillator's parameters, one write per sample.

Each draw:
  1. Every occupied slot pulls one value from its modulator.
  2. The slot's mapping combines that value with the oscillator's
     construction-time parameter and writes the result into the live
     parameter.
  3. The oscillator draws the sample with the freshly-written parameters.

Slots are named (amplitude, frequency, phase) and each is optional, so the
wiring is explicit at construction: there is no way to build a graph where
a modulator silently feeds the wrong parameter.

Mappings anchor to the construction-time parameter rather than the live
one, so repeated modulation never compounds: an envelope at 0.5 always
means "half the designed amplitude", every sample.
*/

/// How a modulator value is combined with an oscillator's initial parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamMapping {
    /// `value × initial`. The standard amplitude gate: an envelope in
    /// [0, 1] scales the designed amplitude.
    Scale,
    /// `initial + (value − center) × initial × amount`. Vibrato-style
    /// relative deviation around the initial parameter; `center` is the
    /// modulator's resting level (an envelope's sustain level), `amount`
    /// the relative depth.
    Deviate { center: f32, amount: f32 },
    /// `initial + value × depth`. Plain additive offset, the natural
    /// choice for phase modulation.
    Offset { depth: f32 },
}

impl ParamMapping {
    #[inline]
    pub fn apply(self, initial: f32, value: f32) -> f32 {
        match self {
            ParamMapping::Scale => value * initial,
            ParamMapping::Deviate { center, amount } => {
                initial + (value - center) * initial * amount
            }
            ParamMapping::Offset { depth } => initial + value * depth,
        }
    }
}

struct Slot {
    source: Box<dyn Generator>,
    mapping: ParamMapping,
}

impl Slot {
    fn new(source: impl Generator + 'static, mapping: ParamMapping) -> Self {
        Self {
            source: Box::new(source),
            mapping,
        }
    }
}

/// An oscillator plus up to three owned modulators, one per parameter.
pub struct ModulatedOscillator {
    oscillator: Oscillator,
    amplitude: Option<Slot>,
    frequency: Option<Slot>,
    phase: Option<Slot>,
}

impl ModulatedOscillator {
    pub fn new(oscillator: Oscillator) -> Self {
        Self {
            oscillator,
            amplitude: None,
            frequency: None,
            phase: None,
        }
    }

    /// Drive the oscillator's amplitude from a modulator.
    pub fn with_amplitude_mod(
        mut self,
        source: impl Generator + 'static,
        mapping: ParamMapping,
    ) -> Self {
        self.amplitude = Some(Slot::new(source, mapping));
        self
    }

    /// Drive the oscillator's frequency from a modulator.
    pub fn with_frequency_mod(
        mut self,
        source: impl Generator + 'static,
        mapping: ParamMapping,
    ) -> Self {
        self.frequency = Some(Slot::new(source, mapping));
        self
    }

    /// Drive the oscillator's phase offset from a modulator.
    pub fn with_phase_mod(
        mut self,
        source: impl Generator + 'static,
        mapping: ParamMapping,
    ) -> Self {
        self.phase = Some(Slot::new(source, mapping));
        self
    }
}

impl Generator for ModulatedOscillator {
    fn next_frame(&mut self) -> Frame {
        if let Some(slot) = &mut self.amplitude {
            let value = slot.source.next_frame().to_mono();
            let amplitude = slot.mapping.apply(self.oscillator.init_amplitude(), value);
            self.oscillator.set_amplitude(amplitude);
        }

        if let Some(slot) = &mut self.frequency {
            let value = slot.source.next_frame().to_mono();
            let frequency = slot.mapping.apply(self.oscillator.init_frequency(), value);
            self.oscillator.set_frequency(frequency);
        }

        if let Some(slot) = &mut self.phase {
            let value = slot.source.next_frame().to_mono();
            let phase = slot.mapping.apply(self.oscillator.init_phase(), value);
            self.oscillator.set_phase(phase);
        }

        self.oscillator.next_frame()
    }

    fn reset(&mut self) {
        self.oscillator.reset();
        for slot in [&mut self.amplitude, &mut self.frequency, &mut self.phase]
            .into_iter()
            .flatten()
        {
            slot.source.reset();
        }
    }

    fn trigger_release(&mut self) {
        for slot in [&mut self.amplitude, &mut self.frequency, &mut self.phase]
            .into_iter()
            .flatten()
        {
            slot.source.trigger_release();
        }
        self.oscillator.trigger_release();
    }

    fn is_ended(&self) -> bool {
        [&self.amplitude, &self.frequency, &self.phase]
            .into_iter()
            .flatten()
            .all(|slot| slot.source.is_ended())
            && self.oscillator.is_ended()
    }
}
