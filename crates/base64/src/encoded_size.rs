//! Size query for encoding.

/// Returns the exact number of bytes base64 encoding produces for an input
/// of `input_len` bytes.
///
/// Always a multiple of 4; depends on the length only, never the content.
///
/// # Example
///
/// ```
/// use buf_base64::encoded_size;
///
/// assert_eq!(encoded_size(0), 0);
/// assert_eq!(encoded_size(3), 4);
/// assert_eq!(encoded_size(4), 8);
/// ```
pub fn encoded_size(input_len: usize) -> usize {
    input_len.div_ceil(3) * 4
}
