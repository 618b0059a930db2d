use crate::dsp::pan::{bipolar_to_unipolar, pan_gains};
use crate::graph::node::{Frame, Generator, Stage};

/// Fixed stereo placement.
///
/// Collapses the incoming frame to mono and splits it across the stereo
/// field with the constant-sum law from [`crate::dsp::pan`].
pub struct Panner {
    ratio: f32,
}

impl Panner {
    /// `ratio` 0.0 = full left, 0.5 = center, 1.0 = full right.
    pub fn new(ratio: f32) -> Self {
        Self {
            ratio: ratio.clamp(0.0, 1.0),
        }
    }

    pub fn ratio(&self) -> f32 {
        self.ratio
    }
}

impl Stage for Panner {
    fn apply(&mut self, frame: Frame) -> Frame {
        let value = frame.to_mono();
        let (left_gain, right_gain) = pan_gains(self.ratio);
        Frame::Stereo(left_gain * value, right_gain * value)
    }
}

/// Stereo placement swept by a modulator.
///
/// The modulator's bipolar output is remapped to a pan ratio every step:
/// -1 lands full left, 0 center, +1 full right. An LFO-rate oscillator
/// here gives the classic auto-pan.
pub struct ModulatedPanner {
    ratio: f32,
    modulator: Box<dyn Generator>,
}

impl ModulatedPanner {
    pub fn new(modulator: impl Generator + 'static) -> Self {
        Self {
            ratio: 0.0,
            modulator: Box::new(modulator),
        }
    }

    pub fn ratio(&self) -> f32 {
        self.ratio
    }
}

impl Stage for ModulatedPanner {
    fn step(&mut self) {
        self.ratio = bipolar_to_unipolar(self.modulator.next_frame().to_mono()).clamp(0.0, 1.0);
    }

    fn apply(&mut self, frame: Frame) -> Frame {
        let value = frame.to_mono();
        let (left_gain, right_gain) = pan_gains(self.ratio);
        Frame::Stereo(left_gain * value, right_gain * value)
    }

    fn reset(&mut self) {
        self.ratio = 0.0;
        self.modulator.reset();
    }
}
