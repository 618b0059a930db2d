use crate::graph::{
    chain::Chain,
    node::{Generator, Stage},
    pan::Panner,
    volume::Volume,
};

pub trait GeneratorExt: Generator + Sized + 'static {
    fn stage<S: Stage + 'static>(self, stage: S) -> Chain {
        Chain::new(self).with_stage(stage)
    }

    fn volume(self, amplitude: f32) -> Chain {
        Chain::new(self).with_stage(Volume::new(amplitude))
    }

    fn pan(self, ratio: f32) -> Chain {
        Chain::new(self).with_stage(Panner::new(ratio))
    }
}

impl<T: Generator + 'static> GeneratorExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::node::Frame;
    use crate::graph::oscillator::Oscillator;

    const SAMPLE_RATE: f32 = 1_000.0;

    #[test]
    fn volume_helper_scales_like_an_explicit_chain() {
        let mut fluent = Oscillator::triangle(100.0, SAMPLE_RATE).volume(0.5);
        let mut reference = Oscillator::triangle(100.0, SAMPLE_RATE);

        for _ in 0..25 {
            let expected = reference.next_frame().to_mono() * 0.5;
            assert!((fluent.next_frame().to_mono() - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn pan_helper_produces_stereo() {
        let mut panned = Oscillator::sine(100.0, SAMPLE_RATE).pan(0.0);
        assert_eq!(panned.next_frame().channels(), 2);
    }

    #[test]
    fn helpers_compose_left_to_right() {
        // .volume then .pan nests the volume chain as the pan chain's source.
        let mut graph = Oscillator::triangle(100.0, SAMPLE_RATE).volume(0.5).pan(1.0);
        // Triangle starts at +1: halved, then routed fully right.
        assert_eq!(graph.next_frame(), Frame::Stereo(0.0, 1.0));
    }
}
