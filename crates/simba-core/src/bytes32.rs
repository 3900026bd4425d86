// Simba Core — Solidity bytes32 Codec
// Packs UTF-8 strings into fixed-width 32-byte words (right-padded with zero
// bytes, as Solidity stores `bytes32`) and unpacks them again.
//
// Truncation works on raw bytes, not code points: a multi-byte character
// split across the capacity boundary is dropped partially, and decoding such
// a word fails with `InvalidUtf8`.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::SimbaResult;
use crate::hexutil::{emit_hex, parse_hex};

/// Width of one Solidity `bytes32` word.
pub const WORD_SIZE: usize = 32;

/// A single hex word or an ordered array of hex words.
///
/// Deserializes from either a JSON string or a JSON array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bytes32Value {
    Single(String),
    Words(Vec<String>),
}

impl Bytes32Value {
    /// The hex words in order; a single word becomes a one-element vector.
    pub fn into_words(self) -> Vec<String> {
        match self {
            Self::Single(word) => vec![word],
            Self::Words(words) => words,
        }
    }

    /// The word when this is [`Bytes32Value::Single`].
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(word) => Some(word),
            Self::Words(_) => None,
        }
    }
}

impl From<String> for Bytes32Value {
    fn from(word: String) -> Self {
        Self::Single(word)
    }
}

impl From<Vec<String>> for Bytes32Value {
    fn from(words: Vec<String>) -> Self {
        Self::Words(words)
    }
}

/// Output shape switches for [`convert_to_bytes32_array`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bytes32Options {
    /// Return a bare string instead of a one-element array when `length == 1`.
    pub extract_single: bool,
    /// Prefix every word with `0x`.
    pub prefix: bool,
}

impl Default for Bytes32Options {
    fn default() -> Self {
        Self { extract_single: false, prefix: true }
    }
}

/// Encode `value` into `length` consecutive bytes32 hex words.
///
/// Bytes beyond `32 * length` are dropped with a warning.
pub fn convert_to_bytes32_array(value: &str, length: usize, options: Bytes32Options) -> Bytes32Value {
    let capacity = WORD_SIZE * length;
    let bytes = value.as_bytes();
    if bytes.len() > capacity {
        warn!(
            "[bytes32] Truncating {} bytes to {} ({} word(s))",
            bytes.len(),
            capacity,
            length
        );
    }

    let mut buffer = vec![0u8; capacity];
    let copied = bytes.len().min(capacity);
    buffer[..copied].copy_from_slice(&bytes[..copied]);

    let mut words: Vec<String> = buffer
        .chunks_exact(WORD_SIZE)
        .map(|word| emit_hex(word, options.prefix))
        .collect();

    if options.extract_single && words.len() == 1 {
        if let Some(single) = words.pop() {
            return Bytes32Value::Single(single);
        }
    }
    Bytes32Value::Words(words)
}

/// Decode a bytes32 value (single word or word array) back into a string.
///
/// For arrays only the first `length` words are used (all of them when
/// `None`); for a single word `length` is ignored. Trailing NULs are stripped.
pub fn convert_bytes32_to_string(input: &Bytes32Value, length: Option<usize>) -> SimbaResult<String> {
    match input {
        Bytes32Value::Single(word) => decode_bytes32(word),
        Bytes32Value::Words(words) => decode_bytes32_words(words, length),
    }
}

/// Decode one hex word (with or without `0x`).
pub fn decode_bytes32(word: &str) -> SimbaResult<String> {
    bytes_to_string(parse_hex(word)?)
}

/// Concatenate the first `length` hex words and decode them as one string.
pub fn decode_bytes32_words<S: AsRef<str>>(words: &[S], length: Option<usize>) -> SimbaResult<String> {
    let requested = length.unwrap_or(words.len());
    if requested > words.len() {
        warn!(
            "[bytes32] Requested {} word(s) but only {} supplied",
            requested,
            words.len()
        );
    }

    let mut buffer = Vec::with_capacity(WORD_SIZE * requested.min(words.len()));
    for word in words.iter().take(requested) {
        buffer.extend_from_slice(&parse_hex(word.as_ref())?);
    }
    bytes_to_string(buffer)
}

fn bytes_to_string(bytes: Vec<u8>) -> SimbaResult<String> {
    let mut decoded = String::from_utf8(bytes)?;
    let trimmed = decoded.trim_end_matches('\0').len();
    decoded.truncate(trimmed);
    Ok(decoded)
}
