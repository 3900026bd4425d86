// ── Simba Core: Error Types ────────────────────────────────────────────────
// Single canonical error enum for the wallet and codec, built with `thiserror`.
//
// Design rules:
//   • One variant per failure kind callers are expected to match on.
//   • Transaction failures nest a small enum so the two message shapes
//     ("Missing field…" / "Transaction had invalid fields…") stay exact.
//   • No variant carries secret material (private keys, seeds, mnemonics).

use thiserror::Error;

// ── Primary error enum ─────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum SimbaError {
    /// BIP-39 phrase failed word-list or checksum validation.
    #[error("Invalid mnemonic words: {0}")]
    Mnemonic(String),

    /// Private key is not 32 bytes of hex or is outside `[1, n-1]`.
    #[error("Invalid private key")]
    PrivateKey,

    /// Operation needs a loaded key-pair but the wallet is empty.
    #[error("No wallet loaded!")]
    WalletNotFound,

    /// Transaction payload could not be turned into a signable transaction.
    #[error(transparent)]
    Transaction(#[from] TransactionError),

    /// Malformed hex input (odd length or a non-hex character).
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Decoded bytes are not valid UTF-8.
    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// secp256k1 signing failed or produced an unsupported recovery id.
    #[error("Signature failure: {0}")]
    SignatureFailure(String),

    /// Wallet configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Reasons a transaction payload is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransactionError {
    /// A required key is absent from the payload.
    #[error("Missing field in transaction: '{0}'")]
    MissingField(String),

    /// A key is present but its contents cannot be used.
    #[error("Transaction had invalid fields: {0}")]
    InvalidFields(String),
}

// ── Convenience constructors ───────────────────────────────────────────────

impl SimbaError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::Transaction(TransactionError::MissingField(field.into()))
    }

    pub fn invalid_fields(message: impl Into<String>) -> Self {
        Self::Transaction(TransactionError::InvalidFields(message.into()))
    }
}

// ── Convenience alias ──────────────────────────────────────────────────────

/// All wallet and codec operations return this type.
pub type SimbaResult<T> = Result<T, SimbaError>;
