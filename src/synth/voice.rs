use crate::graph::node::{Frame, Generator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceState {
    Active,    // Playing, graph in attack/decay/sustain
    Releasing, // Key released, graph fading out
    Finished,  // Graph reported ended; safe to discard
}

/// A single triggered note: one exclusively-owned generator graph plus the
/// bounded pull loop that drains it.
///
/// Constructing the voice is the "note on" of the trigger protocol;
/// [`release`](Voice::release) is the "note off". Rendering is a tight
/// synchronous loop with one `next_frame` per output sample and no
/// buffering, so a voice can run well ahead of real time.
pub struct Voice<G: Generator> {
    graph: G,
    sample_rate: f32,
    state: VoiceState,
    frames_rendered: u64,
}

impl<G: Generator> Voice<G> {
    pub fn new(graph: G, sample_rate: f32) -> Self {
        Self {
            graph,
            sample_rate,
            state: VoiceState::Active,
            frames_rendered: 0,
        }
    }

    /// Begin the release transition ("note off").
    ///
    /// Propagates to every node in the graph that has release state;
    /// calling it on a voice that is already releasing or finished does
    /// nothing. Only call between draws, never concurrently with one.
    pub fn release(&mut self) {
        if self.state == VoiceState::Active {
            self.graph.trigger_release();
            self.state = VoiceState::Releasing;
        }
    }

    /// Draw the next output sample.
    pub fn next_frame(&mut self) -> Frame {
        let frame = self.graph.next_frame();
        self.frames_rendered += 1;

        if self.state == VoiceState::Releasing && self.graph.is_ended() {
            self.state = VoiceState::Finished;
        }

        frame
    }

    /// Draw exactly `frames` samples.
    pub fn render(&mut self, frames: usize) -> Vec<Frame> {
        (0..frames).map(|_| self.next_frame()).collect()
    }

    /// Draw `seconds × sample_rate` samples.
    pub fn render_seconds(&mut self, seconds: f32) -> Vec<Frame> {
        self.render((seconds * self.sample_rate).round() as usize)
    }

    /// Fill a buffer in place, one draw per slot.
    pub fn render_into(&mut self, out: &mut [Frame]) {
        for slot in out.iter_mut() {
            *slot = self.next_frame();
        }
    }

    /// Rewind the graph for a fresh trigger of the same voice design.
    pub fn reset(&mut self) {
        self.graph.reset();
        self.state = VoiceState::Active;
        self.frames_rendered = 0;
    }

    /// True once the released graph has fully faded out.
    pub fn is_ended(&self) -> bool {
        self.graph.is_ended()
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::envelope::EnvelopeNode;
    use crate::graph::modulated::{ModulatedOscillator, ParamMapping};
    use crate::graph::oscillator::Oscillator;

    const SAMPLE_RATE: f32 = 1_000.0;

    fn gated_voice(release: f32) -> Voice<ModulatedOscillator> {
        let graph = ModulatedOscillator::new(Oscillator::sine(100.0, SAMPLE_RATE))
            .with_amplitude_mod(
                EnvelopeNode::adsr(0.01, 0.0, 0.0, release, SAMPLE_RATE),
                ParamMapping::Scale,
            );
        Voice::new(graph, SAMPLE_RATE)
    }

    #[test]
    fn renders_exactly_the_requested_count() {
        let mut voice = gated_voice(0.1);
        assert_eq!(voice.render(250).len(), 250);
        assert_eq!(voice.render_seconds(0.5).len(), 500);
        assert_eq!(voice.frames_rendered(), 750);
    }

    #[test]
    fn release_moves_through_the_states() {
        let mut voice = gated_voice(0.02);
        assert_eq!(voice.state(), VoiceState::Active);

        voice.render(30);
        voice.release();
        assert_eq!(voice.state(), VoiceState::Releasing);

        voice.render(25);
        assert_eq!(voice.state(), VoiceState::Finished);
        assert!(voice.is_ended());
    }

    #[test]
    fn releasing_twice_is_harmless() {
        let mut voice = gated_voice(0.02);
        voice.render(15);
        voice.release();
        voice.render(10);
        voice.release(); // second call must not restart the ramp

        // Still finishes on the original 20-sample release schedule.
        voice.render(12);
        assert_eq!(voice.state(), VoiceState::Finished);
    }

    #[test]
    fn reset_retriggers_the_voice() {
        let mut voice = gated_voice(0.01);
        voice.render(40);
        voice.release();
        voice.render(20);
        assert_eq!(voice.state(), VoiceState::Finished);

        voice.reset();
        assert_eq!(voice.state(), VoiceState::Active);
        assert!(!voice.is_ended());
        assert_eq!(voice.frames_rendered(), 0);
    }
}
