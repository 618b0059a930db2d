/// One output sample, mono or stereo.
///
/// Sources produce mono frames; panning stages widen them to stereo. The
/// mixer reconciles the two shapes when children disagree, so composite
/// nodes can combine either kind without caring which they were handed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    Mono(f32),
    Stereo(f32, f32),
}

impl Frame {
    /// Silence with the requested channel shape.
    pub fn silence(stereo: bool) -> Self {
        if stereo {
            Frame::Stereo(0.0, 0.0)
        } else {
            Frame::Mono(0.0)
        }
    }

    /// Collapse to a single channel, averaging a stereo pair.
    #[inline]
    pub fn to_mono(self) -> f32 {
        match self {
            Frame::Mono(value) => value,
            Frame::Stereo(left, right) => (left + right) * 0.5,
        }
    }

    /// Widen to a channel pair, duplicating a mono value.
    #[inline]
    pub fn to_stereo(self) -> (f32, f32) {
        match self {
            Frame::Mono(value) => (value, value),
            Frame::Stereo(left, right) => (left, right),
        }
    }

    /// Scale every channel by a gain.
    #[inline]
    pub fn scale(self, gain: f32) -> Self {
        match self {
            Frame::Mono(value) => Frame::Mono(value * gain),
            Frame::Stereo(left, right) => Frame::Stereo(left * gain, right * gain),
        }
    }

    pub fn channels(self) -> usize {
        match self {
            Frame::Mono(_) => 1,
            Frame::Stereo(_, _) => 2,
        }
    }

    pub fn is_finite(self) -> bool {
        match self {
            Frame::Mono(value) => value.is_finite(),
            Frame::Stereo(left, right) => left.is_finite() && right.is_finite(),
        }
    }
}

/// Core trait for per-sample signal generators.
///
/// One `next_frame()` call advances the node by exactly one sample; there is
/// no buffering or look-ahead. The release/ended methods are the optional
/// lifecycle capabilities: nodes without release semantics keep the
/// defaults, so propagation through a composite is a cheap no-op for them
/// and the ended aggregate treats them as vacuously finished.
pub trait Generator: Send {
    /// Produce the next sample, advancing internal state by one step.
    fn next_frame(&mut self) -> Frame;

    /// Rewind to the initially-constructed state so the node can be
    /// iterated again from the top.
    fn reset(&mut self);

    /// Begin the note-release transition.
    ///
    /// Default implementation does nothing (nodes without release state).
    fn trigger_release(&mut self) {
        // Default: do nothing
    }

    /// Whether this node has finished producing sound.
    ///
    /// Used by the voice layer to know when a released voice can be
    /// discarded. Nodes without an ending (plain oscillators, fixed
    /// transforms) report true so they never hold a composite open.
    fn is_ended(&self) -> bool {
        true
    }
}

impl core::fmt::Debug for Box<dyn Generator> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Box<dyn Generator>")
    }
}

/// Allow boxed generators to be used as generators (for dynamic dispatch)
impl Generator for Box<dyn Generator> {
    fn next_frame(&mut self) -> Frame {
        (**self).next_frame()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn trigger_release(&mut self) {
        (**self).trigger_release()
    }

    fn is_ended(&self) -> bool {
        (**self).is_ended()
    }
}

/// A per-sample transform applied inside a [`Chain`](crate::graph::chain::Chain).
///
/// Stages are stepped once per draw before any of them transform the
/// frame, so a stage that owns a modulator reads it during `step()` and
/// applies the resulting parameter during `apply()` of the same draw.
pub trait Stage: Send {
    /// Advance any internal modulation state by one sample.
    ///
    /// Default implementation does nothing (stateless transforms).
    fn step(&mut self) {
        // Default: do nothing
    }

    /// Transform one frame.
    fn apply(&mut self, frame: Frame) -> Frame;

    /// Rewind any internal state. Default: nothing to rewind.
    fn reset(&mut self) {
        // Default: do nothing
    }

    /// Forward a note release into the stage's modulator, if it has one.
    fn trigger_release(&mut self) {
        // Default: do nothing
    }

    /// Whether this stage still shapes the output. Stateless stages are
    /// vacuously finished.
    fn is_ended(&self) -> bool {
        true
    }
}

impl Stage for Box<dyn Stage> {
    fn step(&mut self) {
        (**self).step()
    }

    fn apply(&mut self, frame: Frame) -> Frame {
        (**self).apply(frame)
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn trigger_release(&mut self) {
        (**self).trigger_release()
    }

    fn is_ended(&self) -> bool {
        (**self).is_ended()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mono_collapses_and_widens() {
        assert_eq!(Frame::Mono(0.5).to_stereo(), (0.5, 0.5));
        assert_eq!(Frame::Stereo(1.0, 0.0).to_mono(), 0.5);
    }

    #[test]
    fn scale_is_elementwise() {
        assert_eq!(Frame::Mono(0.4).scale(0.5), Frame::Mono(0.2));
        assert_eq!(
            Frame::Stereo(1.0, -1.0).scale(0.25),
            Frame::Stereo(0.25, -0.25)
        );
    }

    #[test]
    fn silence_matches_requested_shape() {
        assert_eq!(Frame::silence(false).channels(), 1);
        assert_eq!(Frame::silence(true).channels(), 2);
    }
}
