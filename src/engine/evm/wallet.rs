// Simba Wallet Engine — Wallet Facade
// In-memory EVM wallet: load a key from a mnemonic or a raw private key,
// report its address, and sign caller-populated transaction payloads.

use log::info;
use serde_json::Value;
use simba_core::{SimbaError, SimbaResult};
use zeroize::Zeroizing;

use super::keys::{self, KeyMaterial};
use super::payload::transaction_from_payload;
use super::tx;
use crate::atoms::types::{SignedTransaction, Transaction, WalletConfig};

// ── Capability trait ───────────────────────────────────────────────────────

/// Operations every wallet backend provides. [`Wallet`] keeps keys in memory;
/// other key stores implement the same set.
pub trait WalletBackend {
    /// Accepted for interface compatibility; in-memory keys need no unlock.
    fn unlock_wallet(&mut self, passkey: &str) -> SimbaResult<()>;

    /// Load from `mnemonic`, or from a freshly generated one when `None`.
    fn generate_from_mnemonic(&mut self, mnemonic: Option<&str>) -> SimbaResult<()>;

    fn generate_from_private_key(&mut self, private_key: &str) -> SimbaResult<()>;

    /// Forget the loaded key. Safe to call on an empty wallet.
    fn delete_wallet(&mut self);

    fn wallet_exists(&self) -> bool;

    /// EIP-55 checksummed address of the loaded key.
    fn get_address(&self) -> SimbaResult<String>;

    /// Decode a JSON transaction payload and sign it.
    fn sign_transaction(&self, payload: &Value) -> SimbaResult<SignedTransaction>;
}

// ── In-memory wallet ───────────────────────────────────────────────────────

/// Holds at most one key-pair. Secrets are wiped when the key is replaced,
/// deleted, or the wallet is dropped.
#[derive(Debug, Default)]
pub struct Wallet {
    config: WalletConfig,
    keys: Option<KeyMaterial>,
}

impl Wallet {
    /// Empty wallet with the default BIP-44 account 0 configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty wallet with a custom derivation path, passphrase or word count.
    pub fn with_config(config: WalletConfig) -> SimbaResult<Self> {
        config.validate()?;
        Ok(Self { config, keys: None })
    }

    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    /// Sign an already-typed transaction.
    pub fn sign_typed(&self, tx: &Transaction) -> SimbaResult<SignedTransaction> {
        tx::sign_transaction(tx, self.loaded()?.signing_key())
    }

    /// The phrase the key was derived from, if it came from a mnemonic.
    pub fn mnemonic(&self) -> Option<&str> {
        self.keys.as_ref().and_then(KeyMaterial::mnemonic)
    }

    /// 64-byte BIP-39 seed, when the key came from a mnemonic.
    pub fn seed(&self) -> Option<&[u8; 64]> {
        self.keys.as_ref().and_then(KeyMaterial::seed)
    }

    /// Lowercase hex private key without `0x`, wiped when the returned value drops.
    pub fn export_private_key(&self) -> SimbaResult<Zeroizing<String>> {
        Ok(self.loaded()?.private_key_hex())
    }

    /// Uncompressed public key, X || Y.
    pub fn public_key(&self) -> SimbaResult<[u8; 64]> {
        Ok(*self.loaded()?.public_key())
    }

    fn loaded(&self) -> SimbaResult<&KeyMaterial> {
        self.keys.as_ref().ok_or(SimbaError::WalletNotFound)
    }

    fn store(&mut self, material: KeyMaterial, source: &str) {
        info!("[wallet] Loaded {} from {}", material.checksum_address(), source);
        // Replacing drops the previous key, which zeroizes it.
        self.keys = Some(material);
    }
}

impl WalletBackend for Wallet {
    fn unlock_wallet(&mut self, _passkey: &str) -> SimbaResult<()> {
        Ok(())
    }

    fn generate_from_mnemonic(&mut self, mnemonic: Option<&str>) -> SimbaResult<()> {
        let material = match mnemonic {
            Some(phrase) => keys::from_mnemonic(phrase, &self.config)?,
            None => {
                let phrase = keys::generate_mnemonic(&self.config)?;
                keys::from_mnemonic(&phrase, &self.config)?
            }
        };
        self.store(material, "mnemonic");
        Ok(())
    }

    fn generate_from_private_key(&mut self, private_key: &str) -> SimbaResult<()> {
        let material = keys::from_private_key(private_key)?;
        self.store(material, "private key");
        Ok(())
    }

    fn delete_wallet(&mut self) {
        if let Some(material) = self.keys.take() {
            info!("[wallet] Deleted {}", material.checksum_address());
        }
    }

    fn wallet_exists(&self) -> bool {
        self.keys.is_some()
    }

    fn get_address(&self) -> SimbaResult<String> {
        Ok(self.loaded()?.checksum_address())
    }

    fn sign_transaction(&self, payload: &Value) -> SimbaResult<SignedTransaction> {
        let material = self.loaded()?;
        let tx = transaction_from_payload(payload)?;
        tx::sign_transaction(&tx, material.signing_key())
    }
}
