//! Stereo pan law and polarity conversions.

/*
Constant-Sum Panning
====================

A pan ratio in [0, 1] places a mono signal in the stereo field:

    ratio 0.0   full left
    ratio 0.5   center
    ratio 1.0   full right

The gains are complementary and always sum to 2:

    right_gain = 2 × ratio
    left_gain  = 2 − right_gain

so a centered signal (ratio 0.5) comes out at unity gain on both channels
and the total energy across the field stays level as the pan moves.
*/

/// Left/right gains for a pan ratio in [0, 1].
///
/// # Example
/// ```
/// use keywave::dsp::pan::pan_gains;
/// assert_eq!(pan_gains(0.5), (1.0, 1.0)); // center leaves amplitude unchanged
/// assert_eq!(pan_gains(0.0), (2.0, 0.0)); // full left
/// assert_eq!(pan_gains(1.0), (0.0, 2.0)); // full right
/// ```
#[inline]
pub fn pan_gains(ratio: f32) -> (f32, f32) {
    let right = 2.0 * ratio;
    (2.0 - right, right)
}

/// Convert a bipolar signal (-1.0 to +1.0) to unipolar (0.0 to 1.0).
///
/// Used to drive a pan ratio from an oscillator-style modulator.
#[inline]
pub fn bipolar_to_unipolar(bipolar: f32) -> f32 {
    (bipolar + 1.0) * 0.5
}

/// Convert a unipolar signal (0.0 to 1.0) to bipolar (-1.0 to +1.0).
#[inline]
pub fn unipolar_to_bipolar(unipolar: f32) -> f32 {
    (unipolar * 2.0) - 1.0
}
