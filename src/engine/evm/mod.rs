// Simba Wallet Engine — EVM
//   primitives — address derivation, EIP-55 checksum, address parsing
//   rlp        — Recursive Length Prefix encoding
//   signer     — low-S recoverable secp256k1 signatures
//   keys       — BIP-39/32/44 derivation and raw key import
//   config     — WalletConfig TOML loading and validation
//   tx         — legacy/EIP-155 and EIP-1559 encoding + signing
//   payload    — JSON payload → typed Transaction
//   wallet     — WalletBackend trait and the in-memory Wallet

pub(crate) mod config;
pub(crate) mod keys;
pub mod payload;
pub(crate) mod primitives;
pub(crate) mod rlp;
pub(crate) mod signer;
pub(crate) mod tx;
pub mod wallet;

pub use payload::transaction_from_payload;
pub use primitives::eip55_checksum;
pub use wallet::{Wallet, WalletBackend};
