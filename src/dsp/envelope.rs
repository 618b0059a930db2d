/*
ADSR Envelope Implementation
============================

This module implements a linear ADSR envelope stepper, the control signal
that shapes a voice's amplitude (or any other parameter) over its lifetime.

Vocabulary
----------

  value       The envelope's current output (0.0 to 1.0). Multiplied into
              the audio signal to shape it over time.

  stage       Which phase the envelope is in: Attack, Decay, Sustain,
              Release, or Ended. A state machine governs transitions.

  release     The out-of-band "key up" event. `trigger_release()` moves the
              state machine into Release from wherever it currently is.

  step        How much `value` changes per sample, derived from the stage
              duration and the sample rate.


The Shape: Linear Ramps
-----------------------

  Value
    1.0 ┐     ╱╲
        │    ╱  ╲___________
    S   │   ╱               ╲
        │  ╱                 ╲
    0.0 └─╱───────────────────╲──→ Time
        Attack Decay  Sustain  Release
         (A)   (D)      (S)      (R)

All four ramps are straight lines. The attack climbs 0 → 1 over
`attack_duration` seconds, the decay falls 1 → `sustain_level` over
`decay_duration`, sustain holds until release is triggered, and the release
falls from wherever the value currently is down to exactly 0 over
`release_duration`.

A duration of zero is a "skip this stage" signal, not an error: attack 0
starts the note at the top of the decay ramp, attack and decay both 0 start
it directly in sustain, and release 0 snaps the value to silence. Zero
durations are never used as divisors.


Stepping Convention
-------------------

`next_value()` yields the current value, then advances. The first drawn
sample of a fresh envelope is therefore exactly 0.0 (or the sustain level if
attack and decay are both skipped), and the first sample after
`trigger_release()` repeats the last pre-release value before ramping down.
That re-yield is what keeps the output continuous across the transition and
the audio free of clicks, no matter where in the envelope the release lands.

Release is special: the starting value and total sample count are
snapshotted when the release is triggered, then interpolated linearly. This
ensures the ramp lands on exactly 0.0, at which point `is_ended()` turns
true and the value stays at 0 forever.
*/

/// The current stage of the envelope state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeStage {
    Attack,  // Ramping up to 1.0
    Decay,   // Ramping down to the sustain level
    Sustain, // Holding until release is triggered
    Release, // Ramping down to 0
    Ended,   // Release completed, value pinned at 0
}

pub struct AdsrEnvelope {
    // Envelope shape (set once at construction)
    attack_duration: f32,  // seconds to ramp 0 → 1
    decay_duration: f32,   // seconds to ramp 1 → sustain
    sustain_level: f32,    // level to hold (0.0 - 1.0)
    release_duration: f32, // seconds to ramp current → 0
    sample_rate: f32,

    // Runtime state (changes every sample)
    stage: EnvelopeStage,
    value: f32,

    // Release bookkeeping (snapshotted at trigger_release for precision)
    release_start_value: f32,
    release_total_samples: u32,
    release_elapsed_samples: u32,
}

impl AdsrEnvelope {
    pub fn new(
        attack_duration: f32,
        decay_duration: f32,
        sustain_level: f32,
        release_duration: f32,
        sample_rate: f32,
    ) -> Self {
        let attack_duration = attack_duration.max(0.0);
        let decay_duration = decay_duration.max(0.0);
        let sustain_level = sustain_level.clamp(0.0, 1.0);
        let (stage, value) = initial_stage(attack_duration, decay_duration, sustain_level);

        Self {
            attack_duration,
            decay_duration,
            sustain_level,
            release_duration: release_duration.max(0.0),
            sample_rate,
            stage,
            value,
            release_start_value: 0.0,
            release_total_samples: 0,
            release_elapsed_samples: 0,
        }
    }

    /// Yield the current value, then advance the state machine by one sample.
    pub fn next_value(&mut self) -> f32 {
        let out = self.value;
        self.advance();
        out
    }

    fn advance(&mut self) {
        match self.stage {
            EnvelopeStage::Attack => {
                // Guarded: we only enter Attack when attack_duration > 0.
                let step = 1.0 / (self.attack_duration * self.sample_rate);
                self.value += step;

                if self.value >= 1.0 {
                    self.value = 1.0;
                    self.enter_post_attack();
                }
            }

            EnvelopeStage::Decay => {
                let drop = 1.0 - self.sustain_level;
                let step = drop / (self.decay_duration * self.sample_rate);
                self.value -= step;

                if self.value <= self.sustain_level {
                    self.value = self.sustain_level;
                    self.stage = EnvelopeStage::Sustain;
                }
            }

            EnvelopeStage::Sustain => {
                self.value = self.sustain_level;
            }

            EnvelopeStage::Release => {
                self.release_elapsed_samples = self.release_elapsed_samples.saturating_add(1);

                if self.release_elapsed_samples >= self.release_total_samples {
                    self.value = 0.0;
                    self.stage = EnvelopeStage::Ended;
                } else {
                    let progress =
                        self.release_elapsed_samples as f32 / self.release_total_samples as f32;
                    self.value = (self.release_start_value * (1.0 - progress)).max(0.0);
                }
            }

            EnvelopeStage::Ended => {
                self.value = 0.0;
            }
        }

        debug_assert!((0.0..=1.0).contains(&self.value));
    }

    fn enter_post_attack(&mut self) {
        if self.decay_duration > 0.0 {
            self.stage = EnvelopeStage::Decay;
        } else {
            self.stage = EnvelopeStage::Sustain;
        }
    }

    /// Begin the release ramp from whatever value was last yielded.
    ///
    /// Valid from any stage. A zero release duration snaps the value to 0
    /// and ends the envelope immediately.
    pub fn trigger_release(&mut self) {
        if self.stage == EnvelopeStage::Ended {
            return;
        }

        if self.release_duration <= 0.0 {
            self.value = 0.0;
            self.stage = EnvelopeStage::Ended;
            return;
        }

        self.release_start_value = self.value;
        self.release_total_samples =
            (self.release_duration * self.sample_rate).round().max(1.0) as u32;
        self.release_elapsed_samples = 0;
        self.stage = EnvelopeStage::Release;
    }

    /// True once the release ramp has reached 0. Never true before.
    pub fn is_ended(&self) -> bool {
        self.stage == EnvelopeStage::Ended
    }

    /// Rewind to the initial stage for a fresh trigger.
    pub fn reset(&mut self) {
        let (stage, value) =
            initial_stage(self.attack_duration, self.decay_duration, self.sustain_level);
        self.stage = stage;
        self.value = value;
        self.release_start_value = 0.0;
        self.release_total_samples = 0;
        self.release_elapsed_samples = 0;
    }

    /// The value that the next `next_value()` call will yield.
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn stage(&self) -> EnvelopeStage {
        self.stage
    }
}

/// Zero-length stages are skipped in order: no attack starts at the top of
/// the decay ramp, no attack and no decay starts directly in sustain.
fn initial_stage(attack: f32, decay: f32, sustain_level: f32) -> (EnvelopeStage, f32) {
    if attack > 0.0 {
        (EnvelopeStage::Attack, 0.0)
    } else if decay > 0.0 {
        (EnvelopeStage::Decay, 1.0)
    } else {
        (EnvelopeStage::Sustain, sustain_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 1_000.0;

    fn drain(env: &mut AdsrEnvelope, samples: usize) -> Vec<f32> {
        (0..samples).map(|_| env.next_value()).collect()
    }

    #[test]
    fn first_sample_of_attack_is_zero() {
        let mut env = AdsrEnvelope::new(0.01, 0.1, 0.7, 0.2, SAMPLE_RATE);
        assert_eq!(env.next_value(), 0.0);
    }

    #[test]
    fn attack_reaches_full_level() {
        let mut env = AdsrEnvelope::new(0.01, 0.1, 0.7, 0.2, SAMPLE_RATE);
        let values = drain(&mut env, (0.01 * SAMPLE_RATE) as usize + 1);

        assert!(values.last().unwrap() > &0.99, "attack should reach peak");
        assert!(!matches!(env.stage(), EnvelopeStage::Attack));
    }

    #[test]
    fn attack_is_monotonically_non_decreasing() {
        let mut env = AdsrEnvelope::new(0.05, 0.1, 0.7, 0.2, SAMPLE_RATE);
        let values = drain(&mut env, (0.05 * SAMPLE_RATE) as usize);
        for pair in values.windows(2) {
            assert!(pair[1] >= pair[0], "attack must not decrease");
        }
    }

    #[test]
    fn decay_settles_on_sustain_level() {
        let sustain = 0.6;
        let mut env = AdsrEnvelope::new(0.01, 0.05, sustain, 0.2, SAMPLE_RATE);
        drain(&mut env, ((0.01 + 0.05) * SAMPLE_RATE) as usize + 5);

        assert!(matches!(env.stage(), EnvelopeStage::Sustain));
        assert!((env.value() - sustain).abs() < 1e-4, "sustain level held");
    }

    #[test]
    fn zero_attack_starts_at_decay_peak() {
        let mut env = AdsrEnvelope::new(0.0, 0.05, 0.5, 0.2, SAMPLE_RATE);
        assert_eq!(env.next_value(), 1.0);
    }

    #[test]
    fn zero_attack_and_decay_start_in_sustain() {
        let mut env = AdsrEnvelope::new(0.0, 0.0, 0.7, 0.2, SAMPLE_RATE);
        assert_eq!(env.next_value(), 0.7);
        assert!(matches!(env.stage(), EnvelopeStage::Sustain));
    }

    #[test]
    fn values_stay_in_unit_interval() {
        let mut env = AdsrEnvelope::new(0.01, 0.02, 0.4, 0.03, SAMPLE_RATE);
        let before_release = drain(&mut env, 60);
        env.trigger_release();
        let after_release = drain(&mut env, 60);

        for value in before_release.iter().chain(after_release.iter()) {
            assert!((0.0..=1.0).contains(value), "out of range: {value}");
        }
    }

    #[test]
    fn release_from_sustain_reaches_zero_and_ends() {
        let release = 0.03;
        let mut env = AdsrEnvelope::new(0.01, 0.01, 0.5, release, SAMPLE_RATE);
        drain(&mut env, 40); // well into sustain

        env.trigger_release();
        let release_samples = (release * SAMPLE_RATE) as usize;
        drain(&mut env, release_samples);

        assert!(env.is_ended(), "ended after the full release ramp");
        assert_eq!(env.next_value(), 0.0);
    }

    #[test]
    fn release_mid_attack_starts_from_current_value() {
        let mut env = AdsrEnvelope::new(0.1, 0.1, 0.7, 0.05, SAMPLE_RATE);
        drain(&mut env, 20); // partway up the attack ramp
        let level_before = env.value();
        assert!(level_before > 0.0 && level_before < 1.0);

        env.trigger_release();
        let first_released = env.next_value();
        assert!(
            (first_released - level_before).abs() < 1e-6,
            "release must re-yield the captured value, not jump"
        );

        // And the ramp from there is monotonically decreasing.
        let tail = drain(&mut env, 30);
        for pair in tail.windows(2) {
            assert!(pair[1] <= pair[0] + 1e-6);
        }
    }

    #[test]
    fn ended_is_never_set_early() {
        let release = 0.02;
        let mut env = AdsrEnvelope::new(0.0, 0.0, 0.8, release, SAMPLE_RATE);
        drain(&mut env, 10);

        env.trigger_release();
        let release_samples = (release * SAMPLE_RATE) as usize;
        for _ in 0..release_samples - 1 {
            env.next_value();
            assert!(!env.is_ended(), "ended before the ramp completed");
        }
        env.next_value();
        assert!(env.is_ended());
    }

    #[test]
    fn zero_release_snaps_to_silence() {
        let mut env = AdsrEnvelope::new(0.0, 0.0, 0.8, 0.0, SAMPLE_RATE);
        drain(&mut env, 5);

        env.trigger_release();
        assert!(env.is_ended());
        assert_eq!(env.next_value(), 0.0);
    }

    #[test]
    fn value_stays_zero_after_end() {
        let mut env = AdsrEnvelope::new(0.0, 0.0, 1.0, 0.005, SAMPLE_RATE);
        drain(&mut env, 3);
        env.trigger_release();
        drain(&mut env, 20);

        assert!(env.is_ended());
        for value in drain(&mut env, 10) {
            assert_eq!(value, 0.0);
        }
    }

    #[test]
    fn transitions_are_continuous() {
        // No step may jump more than the steepest ramp's single-sample slope.
        let mut env = AdsrEnvelope::new(0.01, 0.01, 0.5, 0.01, SAMPLE_RATE);
        let max_slope = 1.0 / (0.01 * SAMPLE_RATE) + 1e-5;

        let mut values = drain(&mut env, 35);
        env.trigger_release();
        values.extend(drain(&mut env, 20));

        for pair in values.windows(2) {
            assert!(
                (pair[1] - pair[0]).abs() <= max_slope,
                "discontinuity: {} -> {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn reset_restarts_the_envelope() {
        let mut env = AdsrEnvelope::new(0.01, 0.01, 0.5, 0.01, SAMPLE_RATE);
        drain(&mut env, 25);
        env.trigger_release();
        drain(&mut env, 15);
        assert!(env.is_ended());

        env.reset();
        assert!(!env.is_ended());
        assert_eq!(env.next_value(), 0.0);
        assert!(matches!(env.stage(), EnvelopeStage::Attack));
    }
}
