//! Base64 alphabets: the 64 data symbols and their reverse lookup table.

use std::fmt::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AlphabetError;

/// The padding symbol shared by every alphabet.
pub const PADDING: u8 = b'=';

/// Marks a byte that is not one of the alphabet's symbols.
const UNMAPPED: u8 = 0xFF;

/// Standard base64 alphabet (RFC 4648).
pub static STANDARD: Alphabet =
    match Alphabet::from_symbols(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/") {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("could not build the standard alphabet"),
    };

/// URL and filename safe base64 alphabet (RFC 4648).
pub static URL_SAFE: Alphabet =
    match Alphabet::from_symbols(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_") {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("could not build the url-safe alphabet"),
    };

/// An immutable mapping between 6-bit values and their ASCII symbols.
///
/// The reverse table covers every byte value, so decoding can classify any
/// input byte with a single lookup. Duplicate symbols are not rejected: the
/// later occurrence wins in the reverse table.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    symbols: [u8; 64],
    values: [u8; 256],
}

impl Alphabet {
    /// Builds an alphabet from a 64-character specification string.
    ///
    /// # Example
    ///
    /// ```
    /// use radix64::Alphabet;
    ///
    /// let alphabet = Alphabet::new("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789.,").unwrap();
    /// assert_eq!(alphabet.symbol_count(), 64);
    /// assert!(Alphabet::new("short").is_err());
    /// ```
    pub fn new(spec: &str) -> Result<Self, AlphabetError> {
        let count = spec.chars().count();
        if count != 64 {
            debug!(count, "rejected alphabet with wrong symbol count");
            return Err(AlphabetError::InvalidLength(count));
        }

        let mut symbols = [0u8; 64];
        for (index, c) in spec.chars().enumerate() {
            if !c.is_ascii() {
                debug!(index, symbol = %c, "rejected alphabet with non-ASCII symbol");
                return Err(AlphabetError::NonAscii { index });
            }
            symbols[index] = c as u8;
        }

        Self::from_symbols(&symbols).inspect_err(|err| debug!(%err, "rejected alphabet"))
    }

    /// Builds an alphabet from 64 raw symbol bytes. Usable in const context.
    pub const fn from_symbols(symbols: &[u8; 64]) -> Result<Self, AlphabetError> {
        let mut values = [UNMAPPED; 256];
        let mut index = 0;
        while index < 64 {
            let symbol = symbols[index];
            if symbol == PADDING {
                return Err(AlphabetError::ContainsPadding { index });
            }
            if !symbol.is_ascii() {
                return Err(AlphabetError::NonAscii { index });
            }
            values[symbol as usize] = index as u8;
            index += 1;
        }

        Ok(Self {
            symbols: *symbols,
            values,
        })
    }

    /// Resolves a built-in alphabet by name: `"standard"` or `"url_safe"`.
    pub fn named(name: &str) -> Option<&'static Alphabet> {
        match name {
            "standard" => Some(&STANDARD),
            "url_safe" => Some(&URL_SAFE),
            _ => None,
        }
    }

    /// The built-in name of this alphabet, if it is one of them.
    pub fn name(&self) -> Option<&'static str> {
        if *self == STANDARD {
            Some("standard")
        } else if *self == URL_SAFE {
            Some("url_safe")
        } else {
            None
        }
    }

    /// Always 64.
    pub const fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// The symbols in value order.
    pub const fn symbols(&self) -> &[u8; 64] {
        &self.symbols
    }

    /// Returns the symbol for a 6-bit value. Higher bits are ignored.
    #[inline]
    pub const fn symbol(&self, value: u8) -> u8 {
        self.symbols[(value & 0x3F) as usize]
    }

    /// Returns the 6-bit value of a symbol, or `None` for bytes outside the
    /// alphabet (the padding symbol included).
    #[inline]
    pub const fn value(&self, byte: u8) -> Option<u8> {
        match self.values[byte as usize] {
            UNMAPPED => None,
            value => Some(value),
        }
    }
}

/// Builds an alphabet from a 64-character specification string.
pub fn make_alphabet(spec: &str) -> Result<Alphabet, AlphabetError> {
    Alphabet::new(spec)
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &symbol in &self.symbols {
            f.write_char(symbol as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet").field(&self.to_string()).finish()
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        Self::new(spec)
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = AlphabetError;

    fn try_from(spec: &str) -> Result<Self, Self::Error> {
        Self::new(spec)
    }
}

impl TryFrom<String> for Alphabet {
    type Error = AlphabetError;

    fn try_from(spec: String) -> Result<Self, Self::Error> {
        Self::new(&spec)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.to_string()
    }
}
