//! Allocating base64 decoding function.

use crate::decode_into::decode_into;
use crate::decoded_size::decoded_size;
use crate::Base64Error;

/// Decodes base64 text to a freshly allocated `Vec<u8>`.
///
/// Accepts the same inputs as [`decode_into`], including inputs with the
/// trailing padding omitted.
///
/// # Errors
///
/// See [`decode_into`].
///
/// # Example
///
/// ```
/// use buf_base64::decode;
///
/// assert_eq!(decode(b"aGVsbG8=").unwrap(), b"hello");
/// ```
pub fn decode(input: &[u8]) -> Result<Vec<u8>, Base64Error> {
    let mut buf = vec![0u8; decoded_size(input)];
    let written = decode_into(input, &mut buf)?;
    buf.truncate(written);
    Ok(buf)
}
