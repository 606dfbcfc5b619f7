//! Buffer-oriented base64 encoding and decoding.
//!
//! This crate provides a base64 codec built around caller-supplied buffers:
//! - Explicit size queries ([`encoded_size`], [`decoded_size`],
//!   [`max_decoded_size`]) so callers can allocate exactly once.
//! - [`encode_into`]/[`decode_into`] writing into pre-sized mutable slices,
//!   never allocating output.
//! - [`encode`]/[`decode`] allocating conveniences for when the caller does
//!   not manage buffers.
//!
//! # Example
//!
//! ```
//! use buf_base64::{decode, encode};
//!
//! let data = b"hello world";
//! let encoded = encode(data);
//! let decoded = decode(encoded.as_bytes()).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod char_value;
mod constants;
mod decode;
mod decode_into;
mod decoded_size;
mod encode;
mod encode_into;
mod encoded_size;

pub use char_value::{char_value, INVALID};
pub use constants::{ALPHABET, ALPHABET_BYTES, PAD};
pub use decode::decode;
pub use decode_into::decode_into;
pub use decoded_size::{decoded_size, max_decoded_size};
pub use encode::encode;
pub use encode_into::encode_into;
pub use encoded_size::encoded_size;

/// Error type for base64 operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Base64Error {
    /// The output buffer is smaller than the required size.
    #[error("output buffer too small: {needed} bytes needed, {available} available")]
    BufferTooSmall {
        /// Bytes the operation would write.
        needed: usize,
        /// Capacity the caller provided.
        available: usize,
    },
    /// The decode input contains a byte outside the base64 alphabet.
    #[error("invalid base64 character 0x{byte:02x} at offset {offset}")]
    InvalidCharacter {
        /// The offending input byte.
        byte: u8,
        /// Its position in the input.
        offset: usize,
    },
    /// The decode input length leaves a single trailing character, which no
    /// encoder can produce.
    #[error("base64 input length {0} is invalid (remainder 1 after grouping by 4)")]
    InvalidLength(usize),
}
