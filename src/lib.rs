// ── Simba Utils ────────────────────────────────────────────────────────────
// In-memory EVM wallet: BIP-39/44 key derivation, legacy (EIP-155) and
// EIP-1559 transaction signing, plus the Solidity/keccak helpers from
// `simba-core`.
//
//   atoms/   — constants and plain data types (no behaviour)
//   engine/  — key handling, RLP, signing, the Wallet facade

pub mod atoms;
pub mod engine;

pub use atoms::types::{
    AccessListItem, Eip1559Transaction, LegacyTransaction, SignedTransaction, Transaction,
    WalletConfig,
};
pub use engine::evm::{eip55_checksum, transaction_from_payload, Wallet, WalletBackend};
pub use simba_core::{
    convert_bytes32_to_string, convert_to_bytes32_array, decode_bytes32, decode_bytes32_words,
    emit_hex, keccak256, keccak_hash, keccak_hash_hex, parse_hex, string_to_uint256,
    Bytes32Options, Bytes32Value, ByteOrder, KeccakBits, SimbaError, SimbaResult,
    TransactionError, U256,
};
