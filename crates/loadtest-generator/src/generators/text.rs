//! Character and binary generators.

use rand::Rng;
use sync_core::Value;

/// Lowest character code emitted by [`generate_text`] (`'A'`).
pub const TEXT_CHAR_START: u8 = 65;
/// Exclusive upper bound of emitted character codes (`'Z'` is never emitted).
pub const TEXT_CHAR_END: u8 = 90;

/// Generate a random string of length in `[1, max_len)`.
///
/// `max_len <= 1` always yields a single character.
pub fn generate_text<R: Rng>(rng: &mut R, max_len: usize) -> Value {
    let len = if max_len > 1 {
        rng.random_range(1..max_len)
    } else {
        1
    };

    let s: String = (0..len)
        .map(|_| char::from(rng.random_range(TEXT_CHAR_START..TEXT_CHAR_END)))
        .collect();

    Value::Text(s)
}

/// Generate random bytes of length in `[0, max_len)`.
pub fn generate_bytes<R: Rng>(rng: &mut R, max_len: usize) -> Value {
    let len = if max_len > 0 {
        rng.random_range(0..max_len)
    } else {
        0
    };

    let mut bytes = vec![0u8; len];
    rng.fill(&mut bytes[..]);
    Value::Blob(bytes)
}
