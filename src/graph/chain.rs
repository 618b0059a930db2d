use crate::graph::node::{Frame, Generator, Stage};

/// A source generator run through an ordered list of transform stages.
///
/// Each draw pulls one frame from the source, steps every stage (so
/// modulated stages read their modulators before anything is transformed),
/// then applies the stages to the frame in order. Ordering matters: a
/// volume before a panner scales the mono signal, a volume after it scales
/// the stereo pair.
pub struct Chain {
    source: Box<dyn Generator>,
    stages: Vec<Box<dyn Stage>>,
}

impl Chain {
    pub fn new(source: impl Generator + 'static) -> Self {
        Self {
            source: Box::new(source),
            stages: Vec::new(),
        }
    }

    /// Append a transform stage to the end of the chain.
    pub fn with_stage(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }
}

impl Generator for Chain {
    fn next_frame(&mut self) -> Frame {
        let mut frame = self.source.next_frame();

        // All stages advance before any of them transform the frame.
        for stage in &mut self.stages {
            stage.step();
        }
        for stage in &mut self.stages {
            frame = stage.apply(frame);
        }

        frame
    }

    fn reset(&mut self) {
        self.source.reset();
        for stage in &mut self.stages {
            stage.reset();
        }
    }

    fn trigger_release(&mut self) {
        self.source.trigger_release();
        for stage in &mut self.stages {
            stage.trigger_release();
        }
    }

    fn is_ended(&self) -> bool {
        self.source.is_ended() && self.stages.iter().all(|stage| stage.is_ended())
    }
}
