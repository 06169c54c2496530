use thiserror::Error;

/// Error returned when an alphabet specification is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlphabetError {
    /// The specification does not hold exactly 64 symbols.
    #[error("invalid alphabet: expected 64 symbols, got {0}")]
    InvalidLength(usize),
    /// The padding character appears among the symbols.
    #[error("invalid alphabet: padding character '=' at index {index}")]
    ContainsPadding { index: usize },
    /// A symbol is not a single ASCII byte.
    #[error("invalid alphabet: non-ASCII symbol at index {index}")]
    NonAscii { index: usize },
}

/// Error type for base64 decoding operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Padding in the wrong place, a padded group that is not the last one,
    /// or input that ends in the middle of a group.
    #[error("wrong padding")]
    WrongPadding,
    /// A symbol outside the alphabet where a data symbol is required.
    #[error("malformed input")]
    Malformed,
}

/// The output buffer handed to [`crate::encode_to_slice`] is too short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("output buffer too small: need {needed} bytes, have {available}")]
pub struct BufferTooSmall {
    pub needed: usize,
    pub available: usize,
}
