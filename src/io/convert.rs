use crate::graph::node::Frame;

/// Full-scale factor for 16-bit signed output.
pub const I16_FULL_SCALE: f32 = 32_767.0;

/// Convert one normalized sample to 16-bit signed.
///
/// The sink owns clipping: the core avoids producing out-of-range values
/// but is not required to hard-limit, so anything beyond ±1.0 is clamped
/// here rather than wrapped.
#[inline]
pub fn sample_to_i16(value: f32) -> i16 {
    (value.clamp(-1.0, 1.0) * I16_FULL_SCALE) as i16
}

/// Convert a frame to a 16-bit stereo pair, duplicating mono output.
#[inline]
pub fn frame_to_i16_pair(frame: Frame) -> (i16, i16) {
    let (left, right) = frame.to_stereo();
    (sample_to_i16(left), sample_to_i16(right))
}

/// Interleave frames into a left/right 16-bit buffer ready for a stereo
/// sample sink.
pub fn interleave_i16(frames: &[Frame]) -> Vec<i16> {
    let mut out = Vec::with_capacity(frames.len() * 2);
    for &frame in frames {
        let (left, right) = frame_to_i16_pair(frame);
        out.push(left);
        out.push(right);
    }
    out
}
