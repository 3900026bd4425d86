// ── Simba Core ─────────────────────────────────────────────────────────────
// Pure helpers shared by the wallet engine and exposed directly to callers:
//   error    — SimbaError taxonomy + SimbaResult alias
//   hexutil  — 0x-prefixed hex parse/emit
//   keccak   — Keccak-256 (and 224/384/512) digests, string → uint256
//   bytes32  — Solidity bytes32 string codec
//
// Dependency rule: no I/O, no global state, nothing secret.

pub mod bytes32;
pub mod error;
pub mod hexutil;
pub mod keccak;

pub use alloy_primitives::U256;
pub use bytes32::{
    convert_bytes32_to_string, convert_to_bytes32_array, decode_bytes32, decode_bytes32_words,
    Bytes32Options, Bytes32Value,
};
pub use error::{SimbaError, SimbaResult, TransactionError};
pub use hexutil::{emit_hex, parse_hex, parse_hex_array, strip_hex_prefix};
pub use keccak::{keccak256, keccak_hash, keccak_hash_hex, string_to_uint256, ByteOrder, KeccakBits};
