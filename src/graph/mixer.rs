use crate::graph::node::{Frame, Generator};

/*
Averaging Mixer
===============

Combines N child generators into one signal by elementwise averaging.
Averaging rather than summing keeps the output level load-invariant: a
voice built from three partials sits at the same level as a voice built
from one, and adding a partial can never push the mix toward clipping.

The output channel shape (mono or stereo) is fixed at construction and is
the same for every draw. Children are reconciled per draw: a mono child
feeding a stereo mixer is duplicated into both channels, a stereo child
feeding a mono mixer is collapsed by averaging left and right.
*/

pub struct WaveAdder {
    sources: Vec<Box<dyn Generator>>,
    stereo: bool,
}

impl WaveAdder {
    pub fn mono() -> Self {
        Self {
            sources: Vec::new(),
            stereo: false,
        }
    }

    pub fn stereo() -> Self {
        Self {
            sources: Vec::new(),
            stereo: true,
        }
    }

    /// Add a child generator to the mix.
    pub fn with_source(mut self, source: impl Generator + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn is_stereo(&self) -> bool {
        self.stereo
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Generator for WaveAdder {
    fn next_frame(&mut self) -> Frame {
        if self.sources.is_empty() {
            return Frame::silence(self.stereo);
        }

        let count = self.sources.len() as f32;
        if self.stereo {
            let mut left_sum = 0.0;
            let mut right_sum = 0.0;
            for source in &mut self.sources {
                let (left, right) = source.next_frame().to_stereo();
                left_sum += left;
                right_sum += right;
            }
            Frame::Stereo(left_sum / count, right_sum / count)
        } else {
            let mut sum = 0.0;
            for source in &mut self.sources {
                sum += source.next_frame().to_mono();
            }
            Frame::Mono(sum / count)
        }
    }

    fn reset(&mut self) {
        for source in &mut self.sources {
            source.reset();
        }
    }

    fn trigger_release(&mut self) {
        for source in &mut self.sources {
            source.trigger_release();
        }
    }

    fn is_ended(&self) -> bool {
        self.sources.iter().all(|source| source.is_ended())
    }
}
