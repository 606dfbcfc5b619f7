//! Character-to-value lookup for base64 decoding.

use crate::constants::ALPHABET_BYTES;

/// Sentinel returned by [`char_value`] for bytes outside the base64 alphabet.
///
/// Distinct from every valid 6-bit value (0..=63).
pub const INVALID: u8 = 0xff;

/// Reverse lookup table mapping alphabet bytes to their 6-bit values.
/// `=` and NUL map to 0; every other non-alphabet byte maps to [`INVALID`].
static DECODE_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as u8;
        i += 1;
    }
    // Padding reads as zero value rather than an error, so a decoder can
    // translate a whole buffer in one pass and trim by length afterwards.
    table[b'=' as usize] = 0;
    table[0] = 0;
    table
};

/// Maps a single base64 alphabet byte to its 6-bit value.
///
/// `A`-`Z` map to 0..=25, `a`-`z` to 26..=51, `0`-`9` to 52..=61, `+` to 62
/// and `/` to 63. The padding byte `=` and NUL both map to 0. Any other byte
/// yields [`INVALID`].
///
/// # Example
///
/// ```
/// use buf_base64::{char_value, INVALID};
///
/// assert_eq!(char_value(b'A'), 0);
/// assert_eq!(char_value(b'/'), 63);
/// assert_eq!(char_value(b'='), 0);
/// assert_eq!(char_value(b'$'), INVALID);
/// ```
pub fn char_value(ch: u8) -> u8 {
    DECODE_TABLE[ch as usize]
}
