use tracing::trace;

use crate::alphabet::{Alphabet, PADDING};
use crate::error::DecodeError;

/// Upper bound on the decoded size of `len` input symbols.
///
/// ```
/// use radix64::decoded_len;
///
/// assert_eq!(decoded_len(0), 0);
/// assert_eq!(decoded_len(4), 3);
/// assert_eq!(decoded_len(6), 6);
/// ```
pub const fn decoded_len(len: usize) -> usize {
    len.div_ceil(4) * 3
}

/// Reads the symbol at `index`. Past the end of input this is a framing
/// error, unless padding is optional, in which case the missing symbol reads
/// as padding.
#[inline]
fn symbol_at(input: &[u8], index: usize, padding: bool) -> Result<u8, DecodeError> {
    match input.get(index) {
        Some(&symbol) => Ok(symbol),
        None if !padding => Ok(PADDING),
        None => Err(DecodeError::WrongPadding),
    }
}

/// Looks up a symbol in a position that must carry data.
#[inline]
fn data_value(input: &[u8], index: usize, alphabet: &Alphabet) -> Result<u8, DecodeError> {
    let symbol = *input.get(index).ok_or(DecodeError::WrongPadding)?;
    match alphabet.value(symbol) {
        Some(value) => Ok(value),
        None if symbol == PADDING => Err(DecodeError::WrongPadding),
        None => Err(DecodeError::Malformed),
    }
}

/// Decodes the group starting at `offset` into three bytes and the number of
/// padding symbols that close it (0, 1 or 2).
#[inline]
fn decode_group(
    input: &[u8],
    offset: usize,
    alphabet: &Alphabet,
    padding: bool,
) -> Result<([u8; 3], usize), DecodeError> {
    let a = data_value(input, offset, alphabet)?;
    let b = data_value(input, offset + 1, alphabet)?;

    // The last position is read first: padding there is what allows
    // padding in position 2.
    let symbol = symbol_at(input, offset + 3, padding)?;
    let (d, pad) = match alphabet.value(symbol) {
        Some(value) => (value, 0),
        None if symbol == PADDING => (0, 1),
        None => return Err(DecodeError::Malformed),
    };

    let symbol = symbol_at(input, offset + 2, padding)?;
    let (c, pad) = match alphabet.value(symbol) {
        Some(value) => (value, pad),
        None if symbol == PADDING && pad == 1 => (0, 2),
        None => return Err(DecodeError::Malformed),
    };

    let x = (u32::from(a) << 18) | (u32::from(b) << 12) | (u32::from(c) << 6) | u32::from(d);
    Ok(([(x >> 16) as u8, ((x >> 8) & 0xFF) as u8, (x & 0xFF) as u8], pad))
}

/// Decodes a base64 string, choosing whether the final group must be padded.
///
/// With `padding` set, input must consist of whole 4-symbol groups. Without
/// it, a final group may also omit its padding symbols, which is what
/// [`crate::encode`] produces when padding is disabled. Padded input is
/// accepted either way.
///
/// # Example
///
/// ```
/// use radix64::{decode_result_with, DecodeError, STANDARD};
///
/// assert_eq!(decode_result_with("Zm8", &STANDARD, false).unwrap(), b"fo");
/// assert_eq!(decode_result_with("Zm8", &STANDARD, true), Err(DecodeError::WrongPadding));
/// ```
pub fn decode_result_with(input: &str, alphabet: &Alphabet, padding: bool) -> Result<Vec<u8>, DecodeError> {
    let input = input.as_bytes();
    let mut result = Vec::with_capacity(decoded_len(input.len()));

    let fail = |offset: usize, err: DecodeError| {
        trace!(offset, %err, "rejected base64 input");
        err
    };

    let mut offset = 0;
    while offset < input.len() {
        // A truncated group is a framing error whatever its symbols are.
        if padding && offset + 4 > input.len() {
            return Err(fail(offset, DecodeError::WrongPadding));
        }

        let (bytes, pad) = decode_group(input, offset, alphabet, padding).map_err(|err| fail(offset, err))?;
        result.extend_from_slice(&bytes[..3 - pad]);

        if pad > 0 {
            // A padded group closes the input.
            if offset + 4 < input.len() {
                return Err(fail(offset + 4, DecodeError::WrongPadding));
            }
            break;
        }
        offset += 4;
    }

    Ok(result)
}

/// Decodes a base64 string to binary data using the specified alphabet.
///
/// Input must be made of whole 4-symbol groups; only the last one may carry
/// padding.
///
/// # Example
///
/// ```
/// use radix64::{decode_result, DecodeError, STANDARD};
///
/// assert_eq!(decode_result("SGVsbG8=", &STANDARD).unwrap(), b"Hello");
/// assert_eq!(decode_result("Zg@=", &STANDARD), Err(DecodeError::Malformed));
/// ```
pub fn decode_result(input: &str, alphabet: &Alphabet) -> Result<Vec<u8>, DecodeError> {
    decode_result_with(input, alphabet, true)
}

/// Like [`decode_result`], discarding the kind of error.
pub fn decode_opt(input: &str, alphabet: &Alphabet) -> Option<Vec<u8>> {
    decode_result(input, alphabet).ok()
}

/// Like [`decode_result`], for input known to be valid.
///
/// # Panics
///
/// Panics if `input` is not valid base64 for `alphabet`.
pub fn decode(input: &str, alphabet: &Alphabet) -> Vec<u8> {
    decode_result(input, alphabet).unwrap_or_else(|err| panic!("base64 decoding failed: {err}"))
}
