use crate::alphabet::{Alphabet, PADDING};
use crate::error::BufferTooSmall;

/// Calculates the encoded length for a given input length.
///
/// # Example
///
/// ```
/// use radix64::encoded_len;
///
/// assert_eq!(encoded_len(3, true), 4);
/// assert_eq!(encoded_len(1, true), 4);
/// assert_eq!(encoded_len(1, false), 2);
/// ```
pub const fn encoded_len(len: usize, padding: bool) -> usize {
    let full_groups = len / 3;
    let remainder = len % 3;

    if padding {
        (full_groups + (remainder != 0) as usize) * 4
    } else {
        // A trailing group of n bytes needs n + 1 symbols.
        full_groups * 4 + if remainder == 0 { 0 } else { remainder + 1 }
    }
}

/// Maps up to three bytes to four symbols. Absent bytes are passed as zero.
#[inline]
fn encode_group(b0: u8, b1: u8, b2: u8, alphabet: &Alphabet) -> [u8; 4] {
    [
        alphabet.symbol(b0 >> 2),
        alphabet.symbol(((b0 << 4) | (b1 >> 4)) & 0x3F),
        alphabet.symbol(((b1 << 2) | (b2 >> 6)) & 0x3F),
        alphabet.symbol(b2 & 0x3F),
    ]
}

/// Symbols carrying data for a trailing group of `remainder` bytes.
#[inline]
const fn trailing_symbols(remainder: usize) -> usize {
    remainder + 1
}

/// Encodes binary data to a base64 string using the specified alphabet.
///
/// # Arguments
///
/// * `data` - The binary data to encode.
/// * `alphabet` - The alphabet used for encoding.
/// * `padding` - Whether to add padding characters ('=') to the output.
///
/// # Example
///
/// ```
/// use radix64::{encode, STANDARD};
///
/// assert_eq!(encode(b"Hello", &STANDARD, true), "SGVsbG8=");
/// assert_eq!(encode(b"Hello", &STANDARD, false), "SGVsbG8");
/// ```
pub fn encode(data: &[u8], alphabet: &Alphabet, padding: bool) -> String {
    let mut result = String::with_capacity(encoded_len(data.len(), padding));

    let chunks = data.chunks_exact(3);
    let remainder = chunks.remainder();

    for chunk in chunks {
        for symbol in encode_group(chunk[0], chunk[1], chunk[2], alphabet) {
            result.push(symbol as char);
        }
    }

    if !remainder.is_empty() {
        let b1 = remainder.get(1).copied().unwrap_or(0);
        let group = encode_group(remainder[0], b1, 0, alphabet);
        let used = trailing_symbols(remainder.len());

        for &symbol in &group[..used] {
            result.push(symbol as char);
        }
        if padding {
            for _ in used..4 {
                result.push(PADDING as char);
            }
        }
    }

    result
}

/// Encodes data directly into a caller-provided buffer.
///
/// Returns the number of bytes written, which is always
/// [`encoded_len`]`(data.len(), padding)`. Nothing is written when the
/// buffer is too short.
pub fn encode_to_slice(
    output: &mut [u8],
    data: &[u8],
    alphabet: &Alphabet,
    padding: bool,
) -> Result<usize, BufferTooSmall> {
    let needed = encoded_len(data.len(), padding);
    if output.len() < needed {
        return Err(BufferTooSmall {
            needed,
            available: output.len(),
        });
    }

    let chunks = data.chunks_exact(3);
    let remainder = chunks.remainder();
    let mut out_idx = 0;

    for chunk in chunks {
        output[out_idx..out_idx + 4].copy_from_slice(&encode_group(chunk[0], chunk[1], chunk[2], alphabet));
        out_idx += 4;
    }

    if !remainder.is_empty() {
        let b1 = remainder.get(1).copied().unwrap_or(0);
        let group = encode_group(remainder[0], b1, 0, alphabet);
        let used = trailing_symbols(remainder.len());

        output[out_idx..out_idx + used].copy_from_slice(&group[..used]);
        out_idx += used;
        if padding {
            output[out_idx..out_idx + 4 - used].fill(PADDING);
            out_idx += 4 - used;
        }
    }

    debug_assert_eq!(out_idx, needed);
    Ok(out_idx)
}
