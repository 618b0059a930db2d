use crate::dsp::envelope::{AdsrEnvelope, EnvelopeStage};
use crate::graph::node::{Frame, Generator};

/// ADSR envelope as a generator node.
///
/// Yields the envelope value as a mono frame so it can modulate any
/// oscillator parameter or drive a volume stage. This is the node that
/// gives a voice its release/ended lifecycle.
pub struct EnvelopeNode {
    env: AdsrEnvelope,
}

impl EnvelopeNode {
    pub fn new(env: AdsrEnvelope) -> Self {
        Self { env }
    }

    pub fn adsr(
        attack_duration: f32,
        decay_duration: f32,
        sustain_level: f32,
        release_duration: f32,
        sample_rate: f32,
    ) -> Self {
        Self {
            env: AdsrEnvelope::new(
                attack_duration,
                decay_duration,
                sustain_level,
                release_duration,
                sample_rate,
            ),
        }
    }

    pub fn stage(&self) -> EnvelopeStage {
        self.env.stage()
    }

    pub fn value(&self) -> f32 {
        self.env.value()
    }
}

impl Generator for EnvelopeNode {
    fn next_frame(&mut self) -> Frame {
        Frame::Mono(self.env.next_value())
    }

    fn reset(&mut self) {
        self.env.reset();
    }

    fn trigger_release(&mut self) {
        self.env.trigger_release();
    }

    fn is_ended(&self) -> bool {
        self.env.is_ended()
    }
}
