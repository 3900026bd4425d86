// Simba Wallet Engine — Key Material
// BIP-39 mnemonic → seed → BIP-32/44 derivation, raw private key import, and
// the in-memory key-pair the wallet holds. Secrets live in zeroizing buffers
// (`SigningKey` wipes its scalar on drop) and never reach Debug output.

use bip32::XPrv;
use bip39::{Language, Mnemonic};
use k256::ecdsa::SigningKey;
use rand_core::{OsRng, RngCore};
use simba_core::{emit_hex, parse_hex, SimbaError, SimbaResult};
use zeroize::Zeroizing;

use super::primitives::{address_from_pubkey, eip55_checksum};
use crate::atoms::types::WalletConfig;

/// A loaded secp256k1 key-pair plus the mnemonic/seed it came from, if any.
pub(crate) struct KeyMaterial {
    signing_key: SigningKey,
    /// Uncompressed X || Y.
    public_key: [u8; 64],
    address: [u8; 20],
    mnemonic: Option<Zeroizing<String>>,
    seed: Option<Zeroizing<[u8; 64]>>,
}

impl KeyMaterial {
    fn new(
        signing_key: SigningKey,
        mnemonic: Option<Zeroizing<String>>,
        seed: Option<Zeroizing<[u8; 64]>>,
    ) -> Self {
        let encoded = signing_key.verifying_key().to_encoded_point(false);
        let mut public_key = [0u8; 64];
        // Skip the 0x04 SEC1 tag
        public_key.copy_from_slice(&encoded.as_bytes()[1..]);
        let address = address_from_pubkey(&public_key);
        Self { signing_key, public_key, address, mnemonic, seed }
    }

    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    pub fn public_key(&self) -> &[u8; 64] {
        &self.public_key
    }

    pub fn checksum_address(&self) -> String {
        eip55_checksum(&self.address)
    }

    pub fn mnemonic(&self) -> Option<&str> {
        self.mnemonic.as_ref().map(|m| m.as_str())
    }

    pub fn seed(&self) -> Option<&[u8; 64]> {
        self.seed.as_deref()
    }

    /// Lowercase hex of the scalar, no prefix.
    pub fn private_key_hex(&self) -> Zeroizing<String> {
        let mut bytes = Zeroizing::new([0u8; 32]);
        bytes.copy_from_slice(&self.signing_key.to_bytes());
        Zeroizing::new(emit_hex(&bytes[..], false))
    }
}

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("address", &self.checksum_address())
            .field("from_mnemonic", &self.mnemonic.is_some())
            .finish_non_exhaustive()
    }
}

/// Generate a fresh English mnemonic with `config.mnemonic_words` words.
pub(crate) fn generate_mnemonic(config: &WalletConfig) -> SimbaResult<Zeroizing<String>> {
    let mut entropy = Zeroizing::new(vec![0u8; config.entropy_len()]);
    OsRng.fill_bytes(&mut entropy);
    let mnemonic = Mnemonic::from_entropy_in(Language::English, &entropy)
        .map_err(|e| SimbaError::Mnemonic(e.to_string()))?;
    Ok(Zeroizing::new(mnemonic.to_string()))
}

/// Validate `phrase`, stretch it into the BIP-39 seed and derive the key at
/// `config.derivation_path`.
pub(crate) fn from_mnemonic(phrase: &str, config: &WalletConfig) -> SimbaResult<KeyMaterial> {
    let path = config.parsed_derivation_path()?;
    let mnemonic = Mnemonic::parse_in(Language::English, phrase)
        .map_err(|e| SimbaError::Mnemonic(e.to_string()))?;

    // PBKDF2-HMAC-SHA512, 2048 rounds, salt "mnemonic" || passphrase
    let seed = Zeroizing::new(mnemonic.to_seed(config.passphrase.as_str()));

    let xprv = XPrv::derive_from_path(&seed[..], &path).map_err(|_| SimbaError::PrivateKey)?;
    let mut key_bytes = Zeroizing::new([0u8; 32]);
    key_bytes.copy_from_slice(&xprv.private_key().to_bytes());
    let signing_key = SigningKey::from_slice(&key_bytes[..]).map_err(|_| SimbaError::PrivateKey)?;

    Ok(KeyMaterial::new(
        signing_key,
        Some(Zeroizing::new(mnemonic.to_string())),
        Some(seed),
    ))
}

/// Import a raw 32-byte private key (hex, `0x` optional).
///
/// Malformed hex, the wrong length, zero, and scalars ≥ n all fail with
/// [`SimbaError::PrivateKey`].
pub(crate) fn from_private_key(private_key: &str) -> SimbaResult<KeyMaterial> {
    let bytes = Zeroizing::new(parse_hex(private_key.trim()).map_err(|_| SimbaError::PrivateKey)?);
    if bytes.len() != 32 {
        return Err(SimbaError::PrivateKey);
    }
    let signing_key = SigningKey::from_slice(&bytes).map_err(|_| SimbaError::PrivateKey)?;
    Ok(KeyMaterial::new(signing_key, None, None))
}
