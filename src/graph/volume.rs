use crate::graph::node::{Frame, Generator, Stage};

/// Fixed amplitude scaling, elementwise over mono or stereo frames.
pub struct Volume {
    amplitude: f32,
}

impl Volume {
    pub fn new(amplitude: f32) -> Self {
        Self {
            amplitude: amplitude.max(0.0),
        }
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }
}

impl Stage for Volume {
    fn apply(&mut self, frame: Frame) -> Frame {
        frame.scale(self.amplitude)
    }
}

/// Amplitude scaling driven by a modulator.
///
/// Reads one modulator value per step and applies it as the gain for that
/// draw. Unlike the plain [`Volume`], this stage has a lifecycle: releasing
/// it releases the modulator, and it reports ended when the modulator does,
/// so an envelope-driven master volume can close out a whole voice.
pub struct ModulatedVolume {
    amplitude: f32,
    modulator: Box<dyn Generator>,
}

impl ModulatedVolume {
    pub fn new(modulator: impl Generator + 'static) -> Self {
        Self {
            amplitude: 0.0,
            modulator: Box::new(modulator),
        }
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }
}

impl Stage for ModulatedVolume {
    fn step(&mut self) {
        self.amplitude = self.modulator.next_frame().to_mono();
    }

    fn apply(&mut self, frame: Frame) -> Frame {
        frame.scale(self.amplitude)
    }

    fn reset(&mut self) {
        self.amplitude = 0.0;
        self.modulator.reset();
    }

    fn trigger_release(&mut self) {
        self.modulator.trigger_release();
    }

    fn is_ended(&self) -> bool {
        self.modulator.is_ended()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::envelope::EnvelopeNode;

    #[test]
    fn scales_mono_and_stereo() {
        let mut volume = Volume::new(0.5);
        assert_eq!(volume.apply(Frame::Mono(0.8)), Frame::Mono(0.4));
        assert_eq!(
            volume.apply(Frame::Stereo(0.8, -0.8)),
            Frame::Stereo(0.4, -0.4)
        );
    }

    #[test]
    fn negative_amplitude_is_clamped() {
        assert_eq!(Volume::new(-1.0).amplitude(), 0.0);
    }

    #[test]
    fn plain_volume_has_no_lifecycle() {
        let mut volume = Volume::new(1.0);
        volume.trigger_release();
        assert!(volume.is_ended());
    }

    #[test]
    fn modulated_volume_follows_its_envelope() {
        let env = EnvelopeNode::adsr(0.0, 0.0, 0.5, 0.01, 1_000.0);
        let mut volume = ModulatedVolume::new(env);

        volume.step();
        assert_eq!(volume.apply(Frame::Mono(1.0)), Frame::Mono(0.5));
    }

    #[test]
    fn modulated_volume_delegates_lifecycle() {
        let env = EnvelopeNode::adsr(0.0, 0.0, 1.0, 0.01, 1_000.0);
        let mut volume = ModulatedVolume::new(env);
        assert!(!volume.is_ended());

        volume.trigger_release();
        for _ in 0..12 {
            volume.step();
        }
        assert!(volume.is_ended());
    }

    #[test]
    fn gain_applies_before_first_step_as_silence() {
        let env = EnvelopeNode::adsr(0.0, 0.0, 1.0, 0.1, 1_000.0);
        let mut volume = ModulatedVolume::new(env);
        // Before any step the stage mutes; the chain always steps first.
        assert_eq!(volume.apply(Frame::Mono(1.0)), Frame::Mono(0.0));
    }
}
