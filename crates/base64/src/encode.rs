//! Allocating base64 encoding function.

use crate::encode_into::encode_into;
use crate::encoded_size::encoded_size;

/// Encodes a byte slice to a base64 `String` with standard padding.
///
/// # Example
///
/// ```
/// use buf_base64::encode;
///
/// assert_eq!(encode(b"hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn encode(input: &[u8]) -> String {
    let mut buf = vec![0u8; encoded_size(input.len())];
    let written = encode_into(input, &mut buf).expect("buffer sized to encoded_size");
    debug_assert_eq!(written, buf.len());
    // Every output byte is an alphabet byte or '='.
    String::from_utf8(buf).expect("base64 output is ASCII")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(encode(b""), "");
    }

    #[test]
    fn test_single_byte() {
        assert_eq!(encode(b"f"), "Zg==");
    }

    #[test]
    fn test_two_bytes() {
        assert_eq!(encode(b"fo"), "Zm8=");
    }

    #[test]
    fn test_three_bytes() {
        assert_eq!(encode(b"foo"), "Zm9v");
    }

    #[test]
    fn test_various_lengths() {
        // Known test vectors
        assert_eq!(encode(b"foob"), "Zm9vYg==");
        assert_eq!(encode(b"fooba"), "Zm9vYmE=");
        assert_eq!(encode(b"foobar"), "Zm9vYmFy");
        assert_eq!(encode(b"Man"), "TWFu");
        assert_eq!(encode(b"Ma"), "TWE=");
        assert_eq!(encode(b"M"), "TQ==");
    }

    #[test]
    fn test_binary_data() {
        let data: Vec<u8> = (0..=255).collect();
        let encoded = encode(&data);
        assert_eq!(encoded.len(), 344);
        for c in encoded.chars() {
            assert!(
                c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '=',
                "Invalid base64 character: {}",
                c
            );
        }
    }
}
