//! A library for base64 encoding and decoding.
//!
//! This library provides functions to encode binary data to base64 strings
//! and decode base64 strings back to binary data over configurable 64-symbol
//! alphabets, with or without `=` padding.
//!
//! # Example
//!
//! ```
//! use radix64::{decode_result, encode, make_alphabet, DecodeError, STANDARD, URL_SAFE};
//!
//! assert_eq!(encode(b"foo", &STANDARD, true), "Zm9v");
//! assert_eq!(decode_result("Zm9v", &STANDARD).unwrap(), b"foo");
//! assert_eq!(decode_result("Zm9v====", &STANDARD), Err(DecodeError::WrongPadding));
//!
//! let encoded = encode(&[0xfb, 0xff], &URL_SAFE, false);
//! assert_eq!(encoded, "-_8");
//!
//! assert!(make_alphabet("short").is_err());
//! ```

mod alphabet;
mod config;
mod decode;
mod encode;
mod error;


pub use alphabet::{make_alphabet, Alphabet, PADDING, STANDARD, URL_SAFE};
pub use config::Config;
pub use decode::{decode, decode_opt, decode_result, decode_result_with, decoded_len};
pub use encode::{encode, encode_to_slice, encoded_len};
pub use error::{AlphabetError, BufferTooSmall, DecodeError};
