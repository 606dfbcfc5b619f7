//! Size queries for decoding.

use crate::constants::PAD_BYTE;

/// Returns an upper bound on the decoded size of a base64 input of
/// `input_len` bytes, from the length alone.
///
/// The bound over-counts by 1-2 bytes when the input ends in padding; use
/// [`decoded_size`] for the exact value. Useful for sizing a reusable buffer
/// before the input is available.
pub fn max_decoded_size(input_len: usize) -> usize {
    input_len.div_ceil(4) * 3
}

/// Returns the exact number of bytes decoding `input` produces.
///
/// Counts trailing `=` padding (at most two characters) and unpadded tails:
/// an input whose length has remainder 2 or 3 modulo 4 decodes as if the
/// missing padding were present. For remainder 1 — a length no encoder
/// produces and [`decode_into`](crate::decode_into) rejects — the dangling
/// character is not counted.
///
/// # Example
///
/// ```
/// use buf_base64::decoded_size;
///
/// assert_eq!(decoded_size(b"TWFu"), 3);
/// assert_eq!(decoded_size(b"TQ=="), 1);
/// assert_eq!(decoded_size(b"TQ"), 1);
/// ```
pub fn decoded_size(input: &[u8]) -> usize {
    let len = input.len();
    match len % 4 {
        2 => (len / 4) * 3 + 1,
        3 => (len / 4) * 3 + 2,
        0 => {
            let mut padding = 0;
            if len >= 1 && input[len - 1] == PAD_BYTE {
                padding = 1;
                if len >= 2 && input[len - 2] == PAD_BYTE {
                    padding = 2;
                }
            }
            (len / 4) * 3 - padding
        }
        _ => (len / 4) * 3,
    }
}
