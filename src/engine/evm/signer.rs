// Simba Wallet Engine — secp256k1 Signing
// Deterministic ECDSA (RFC 6979, HMAC-SHA-256 nonces) over a 32-byte keccak
// digest, normalized to low-S with the recovery parity adjusted to match.

use k256::ecdsa::{RecoveryId, SigningKey};
use simba_core::{SimbaError, SimbaResult};

/// `(r, s)` plus the y-parity of the ephemeral point `k·G`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RecoverableSignature {
    pub r: [u8; 32],
    pub s: [u8; 32],
    /// 0 or 1.
    pub parity: u8,
}

/// Sign a prehashed digest.
///
/// k256 retries RFC 6979 candidates internally until `r` and `s` are valid.
/// A recovery id with the x-reduced flag set cannot be expressed in
/// Ethereum's `v` and is reported as [`SimbaError::SignatureFailure`].
pub(crate) fn sign_digest(key: &SigningKey, digest: &[u8; 32]) -> SimbaResult<RecoverableSignature> {
    let (mut signature, mut recovery_id) = key
        .sign_prehash_recoverable(digest)
        .map_err(|e| SimbaError::SignatureFailure(e.to_string()))?;

    // Negating s mirrors k·G, so the y-parity flips with it.
    if let Some(normalized) = signature.normalize_s() {
        signature = normalized;
        recovery_id = RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced());
    }

    if recovery_id.is_x_reduced() {
        return Err(SimbaError::SignatureFailure(
            "r overflowed the curve order; recovery id not representable".into(),
        ));
    }

    let sig_bytes = signature.to_bytes();
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&sig_bytes[..32]);
    s.copy_from_slice(&sig_bytes[32..]);

    Ok(RecoverableSignature {
        r,
        s,
        parity: u8::from(recovery_id.is_y_odd()),
    })
}
