// Simba Core — Hex Helpers
// `0x`-prefix discipline on top of the `hex` crate: lenient prefix on parse,
// lowercase on emit.

use crate::error::{SimbaError, SimbaResult};

/// Strip a leading `0x` / `0X` if present.
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Decode hex with or without a `0x` prefix. Case-insensitive.
///
/// Odd-length input and non-hex characters are rejected with
/// [`SimbaError::InvalidHex`]; `""` and `"0x"` decode to an empty vector.
pub fn parse_hex(s: &str) -> SimbaResult<Vec<u8>> {
    ::hex::decode(strip_hex_prefix(s)).map_err(|e| SimbaError::InvalidHex(e.to_string()))
}

/// Decode hex into a fixed-width array, rejecting any other length.
pub fn parse_hex_array<const N: usize>(s: &str) -> SimbaResult<[u8; N]> {
    let bytes = parse_hex(s)?;
    bytes.as_slice().try_into().map_err(|_| {
        SimbaError::InvalidHex(format!("expected {} bytes, got {}", N, bytes.len()))
    })
}

/// Lowercase hex, optionally `0x`-prefixed.
pub fn emit_hex(data: &[u8], prefix: bool) -> String {
    if prefix {
        format!("0x{}", ::hex::encode(data))
    } else {
        ::hex::encode(data)
    }
}
