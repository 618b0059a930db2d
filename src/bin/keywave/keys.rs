//! Keyboard-to-frequency lookup for the terminal instrument.
//!
//! The home row plays like a piano octave starting at middle C, with the
//! row above providing the sharps. The core itself only ever sees the
//! resolved frequency in Hz.

/// Resolve a key to its equal-temperament frequency, if it is mapped.
///
/// Layout (white keys on the home row, black keys above):
///
/// ```text
///   w e   t y u   o
///  a s d f g h j k l
///  C D E F G A B C D
/// ```
pub fn key_to_frequency(key: char) -> Option<f32> {
    let semitones_from_a4: i32 = match key {
        'a' => -9, // C4
        'w' => -8,
        's' => -7,
        'e' => -6,
        'd' => -5,
        'f' => -4,
        't' => -3,
        'g' => -2,
        'y' => -1,
        'h' => 0, // A4
        'u' => 1,
        'j' => 2,
        'k' => 3, // C5
        'o' => 4,
        'l' => 5,
        _ => return None,
    };
    Some(440.0 * 2.0_f32.powf(semitones_from_a4 as f32 / 12.0))
}
