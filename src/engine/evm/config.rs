// Simba Wallet Engine — Wallet Configuration
// TOML loading and validation for `WalletConfig`.

use bip32::DerivationPath;
use simba_core::{SimbaError, SimbaResult};

use crate::atoms::constants::VALID_MNEMONIC_WORDS;
use crate::atoms::types::WalletConfig;

impl WalletConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    ///
    /// ```toml
    /// derivation_path = "m/44'/60'/0'/0/1"
    /// mnemonic_words = 24
    /// ```
    pub fn from_toml_str(source: &str) -> SimbaResult<Self> {
        let config: WalletConfig =
            toml::from_str(source).map_err(|e| SimbaError::Config(e.message().to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject unsupported word counts and unparsable derivation paths.
    pub fn validate(&self) -> SimbaResult<()> {
        if !VALID_MNEMONIC_WORDS.contains(&self.mnemonic_words) {
            return Err(SimbaError::Config(format!(
                "mnemonic_words must be one of {:?}, got {}",
                VALID_MNEMONIC_WORDS, self.mnemonic_words
            )));
        }
        self.parsed_derivation_path()?;
        Ok(())
    }

    pub(crate) fn parsed_derivation_path(&self) -> SimbaResult<DerivationPath> {
        self.derivation_path.parse().map_err(|_| {
            SimbaError::Config(format!("invalid derivation path '{}'", self.derivation_path))
        })
    }

    /// Entropy size for a freshly generated mnemonic (4 bytes per 3 words).
    pub(crate) fn entropy_len(&self) -> usize {
        self.mnemonic_words / 3 * 4
    }
}
