// ── Simba Atoms: Pure Data Types ─────────────────────────────────────────────
// Plain struct/enum definitions shared by the wallet engine.
// Atoms layer rule: no I/O, no side effects, no imports from engine/.

use serde::{Deserialize, Serialize, Serializer};
use simba_core::U256;

use super::constants::{DEFAULT_DERIVATION_PATH, DEFAULT_MNEMONIC_WORDS};

// ── Transactions ───────────────────────────────────────────────────────────

/// One EIP-2930 access list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessListItem {
    pub address: [u8; 20],
    pub storage_keys: Vec<[u8; 32]>,
}

/// Pre-EIP-2718 transaction; EIP-155 replay protection when `chain_id` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyTransaction {
    pub nonce: u64,
    pub gas_price: U256,
    pub gas: u64,
    pub to: [u8; 20],
    pub value: U256,
    pub data: Vec<u8>,
    pub chain_id: Option<u64>,
}

/// EIP-1559 (type 0x02) fee-market transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eip1559Transaction {
    pub chain_id: u64,
    pub nonce: u64,
    pub max_priority_fee_per_gas: U256,
    pub max_fee_per_gas: U256,
    pub gas: u64,
    pub to: [u8; 20],
    pub value: U256,
    pub data: Vec<u8>,
    pub access_list: Vec<AccessListItem>,
}

/// A fully-populated transaction ready for signing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    Legacy(LegacyTransaction),
    Eip1559(Eip1559Transaction),
}

/// Signed transaction as returned to callers.
///
/// Serializes with the `rawTransaction`/`hash`/`r`/`s`/`v` keys; `r` and `s`
/// are rendered as decimal integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedTransaction {
    /// `0x`-prefixed hex of the final wire bytes.
    #[serde(rename = "rawTransaction")]
    pub raw_transaction: String,
    /// `0x`-prefixed keccak256 of the wire bytes.
    pub hash: String,
    #[serde(serialize_with = "serialize_decimal")]
    pub r: U256,
    #[serde(serialize_with = "serialize_decimal")]
    pub s: U256,
    /// Legacy: 27/28 or EIP-155 `35 + 2·chainId + parity`. EIP-1559: parity.
    pub v: u64,
}

fn serialize_decimal<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

// ── Wallet configuration ───────────────────────────────────────────────────

/// serde default helpers — must live in this module so #[serde(default = "fn")] resolves correctly
pub(crate) fn default_derivation_path() -> String { DEFAULT_DERIVATION_PATH.to_string() }
pub(crate) fn default_mnemonic_words() -> usize { DEFAULT_MNEMONIC_WORDS }

/// Key-derivation settings for [`crate::Wallet`].
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletConfig {
    /// BIP-32 path of the signing key.
    #[serde(default = "default_derivation_path")]
    pub derivation_path: String,
    /// BIP-39 passphrase (the optional "25th word"). Empty by default.
    #[serde(default)]
    pub passphrase: String,
    /// Word count for freshly generated mnemonics (12, 15, 18, 21 or 24).
    #[serde(default = "default_mnemonic_words")]
    pub mnemonic_words: usize,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            derivation_path: default_derivation_path(),
            passphrase: String::new(),
            mnemonic_words: default_mnemonic_words(),
        }
    }
}

// Passphrase is secret material and stays out of Debug output.
impl std::fmt::Debug for WalletConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletConfig")
            .field("derivation_path", &self.derivation_path)
            .field("passphrase", &if self.passphrase.is_empty() { "" } else { "<redacted>" })
            .field("mnemonic_words", &self.mnemonic_words)
            .finish()
    }
}
