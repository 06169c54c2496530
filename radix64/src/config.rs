//! Codec configuration: an alphabet plus a padding policy.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::alphabet::{Alphabet, STANDARD};
use crate::error::DecodeError;

/// An alphabet paired with a padding policy.
///
/// The default is the standard alphabet with padding. When `pad` is set the
/// encoder emits padding and the decoder requires whole groups; when it is
/// cleared the encoder omits padding and the decoder tolerates its absence.
///
/// Deserializes from e.g. `{"alphabet": "url_safe", "pad": false}`. The
/// alphabet is either a built-in name or a 64-symbol string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(
        default = "default_alphabet",
        deserialize_with = "deserialize_alphabet",
        serialize_with = "serialize_alphabet"
    )]
    pub alphabet: Alphabet,
    #[serde(default = "default_pad")]
    pub pad: bool,
}

fn default_alphabet() -> Alphabet {
    STANDARD.clone()
}

fn default_pad() -> bool {
    true
}

fn deserialize_alphabet<'de, D>(deserializer: D) -> Result<Alphabet, D::Error>
where
    D: Deserializer<'de>,
{
    let spec = String::deserialize(deserializer)?;
    match Alphabet::named(&spec) {
        Some(alphabet) => Ok(alphabet.clone()),
        None => Alphabet::new(&spec).map_err(de::Error::custom),
    }
}

fn serialize_alphabet<S>(alphabet: &Alphabet, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match alphabet.name() {
        Some(name) => serializer.serialize_str(name),
        None => serializer.collect_str(alphabet),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(default_alphabet())
    }
}

impl Config {
    /// A padded configuration over `alphabet`.
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet, pad: true }
    }

    pub fn with_padding(mut self, pad: bool) -> Self {
        self.pad = pad;
        self
    }

    pub fn encode(&self, data: &[u8]) -> String {
        crate::encode(data, &self.alphabet, self.pad)
    }

    pub fn encoded_len(&self, len: usize) -> usize {
        crate::encoded_len(len, self.pad)
    }

    pub fn decode_result(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        crate::decode_result_with(input, &self.alphabet, self.pad)
    }

    pub fn decode_opt(&self, input: &str) -> Option<Vec<u8>> {
        self.decode_result(input).ok()
    }

    /// # Panics
    ///
    /// Panics if `input` is not valid base64 under this configuration.
    pub fn decode(&self, input: &str) -> Vec<u8> {
        self.decode_result(input)
            .unwrap_or_else(|err| panic!("base64 decoding failed: {err}"))
    }
}
