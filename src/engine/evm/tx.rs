// Simba Wallet Engine — Transaction Encoding & Signing
//
// Legacy (EIP-155):
//   pre-image  RLP([nonce, gasPrice, gas, to, value, data, chainId, 0, 0])
//              RLP([nonce, gasPrice, gas, to, value, data])   (no chainId)
//   signed     RLP([nonce, gasPrice, gas, to, value, data, v, r, s])
//
// EIP-1559 (type 0x02):
//   pre-image  0x02 || RLP([chainId, nonce, maxPriorityFee, maxFee, gas, to, value, data, accessList])
//   signed     0x02 || RLP([... , accessList, yParity, r, s])

use k256::ecdsa::SigningKey;
use log::debug;
use simba_core::{emit_hex, keccak256, SimbaError, SimbaResult, U256};

use super::rlp::{rlp_encode_bytes, rlp_encode_list, rlp_encode_u256, rlp_encode_u64, strip_leading_zeros};
use super::signer::{sign_digest, RecoverableSignature};
use crate::atoms::constants::{EIP155_V_OFFSET, EIP1559_TX_TYPE, LEGACY_V_OFFSET};
use crate::atoms::types::{
    AccessListItem, Eip1559Transaction, LegacyTransaction, SignedTransaction, Transaction,
};

impl Transaction {
    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Legacy(tx) if tx.chain_id.is_some() => "legacy (EIP-155)",
            Self::Legacy(_) => "legacy",
            Self::Eip1559(_) => "EIP-1559",
        }
    }

    pub fn chain_id(&self) -> Option<u64> {
        match self {
            Self::Legacy(tx) => tx.chain_id,
            Self::Eip1559(tx) => Some(tx.chain_id),
        }
    }

    /// Bytes whose keccak256 is signed.
    pub fn signing_preimage(&self) -> Vec<u8> {
        match self {
            Self::Legacy(tx) => {
                let mut items = legacy_fields(tx);
                if let Some(chain_id) = tx.chain_id {
                    items.push(rlp_encode_u64(chain_id));
                    items.push(rlp_encode_u64(0));
                    items.push(rlp_encode_u64(0));
                }
                rlp_encode_list(&items)
            }
            Self::Eip1559(tx) => typed_envelope(&rlp_encode_list(&eip1559_fields(tx))),
        }
    }

    /// keccak256 of [`Transaction::signing_preimage`].
    pub fn signing_hash(&self) -> [u8; 32] {
        keccak256(&self.signing_preimage())
    }

    /// Assemble the wire bytes for a signature; returns them with the `v`
    /// reported to callers.
    pub(crate) fn encode_signed(&self, sig: &RecoverableSignature) -> SimbaResult<(Vec<u8>, u64)> {
        match self {
            Self::Legacy(tx) => {
                let v = legacy_v(tx.chain_id, sig.parity)?;
                let mut items = legacy_fields(tx);
                items.push(rlp_encode_u64(v));
                items.extend(signature_fields(sig));
                Ok((rlp_encode_list(&items), v))
            }
            Self::Eip1559(tx) => {
                let v = u64::from(sig.parity);
                let mut items = eip1559_fields(tx);
                items.push(rlp_encode_u64(v));
                items.extend(signature_fields(sig));
                Ok((typed_envelope(&rlp_encode_list(&items)), v))
            }
        }
    }
}

/// Sign `tx` with `key` and package the result for callers.
pub(crate) fn sign_transaction(tx: &Transaction, key: &SigningKey) -> SimbaResult<SignedTransaction> {
    debug!("[tx] Signing {} transaction (chain_id={:?})", tx.kind(), tx.chain_id());

    let sig = sign_digest(key, &tx.signing_hash())?;
    let (raw, v) = tx.encode_signed(&sig)?;
    let hash = keccak256(&raw);

    debug!("[tx] Signed transaction {}", emit_hex(&hash, true));

    Ok(SignedTransaction {
        raw_transaction: emit_hex(&raw, true),
        hash: emit_hex(&hash, true),
        r: U256::from_be_bytes(sig.r),
        s: U256::from_be_bytes(sig.s),
        v,
    })
}

fn legacy_fields(tx: &LegacyTransaction) -> Vec<Vec<u8>> {
    vec![
        rlp_encode_u64(tx.nonce),
        rlp_encode_u256(&tx.gas_price),
        rlp_encode_u64(tx.gas),
        rlp_encode_bytes(&tx.to),
        rlp_encode_u256(&tx.value),
        rlp_encode_bytes(&tx.data),
    ]
}

fn eip1559_fields(tx: &Eip1559Transaction) -> Vec<Vec<u8>> {
    vec![
        rlp_encode_u64(tx.chain_id),
        rlp_encode_u64(tx.nonce),
        rlp_encode_u256(&tx.max_priority_fee_per_gas),
        rlp_encode_u256(&tx.max_fee_per_gas),
        rlp_encode_u64(tx.gas),
        rlp_encode_bytes(&tx.to),
        rlp_encode_u256(&tx.value),
        rlp_encode_bytes(&tx.data),
        encode_access_list(&tx.access_list),
    ]
}

/// RLP([[address, [storageKey, ...]], ...])
fn encode_access_list(access_list: &[AccessListItem]) -> Vec<u8> {
    let entries: Vec<Vec<u8>> = access_list
        .iter()
        .map(|item| {
            let keys: Vec<Vec<u8>> = item.storage_keys.iter().map(|k| rlp_encode_bytes(k)).collect();
            rlp_encode_list(&[rlp_encode_bytes(&item.address), rlp_encode_list(&keys)])
        })
        .collect();
    rlp_encode_list(&entries)
}

fn signature_fields(sig: &RecoverableSignature) -> [Vec<u8>; 2] {
    [
        rlp_encode_bytes(strip_leading_zeros(&sig.r)),
        rlp_encode_bytes(strip_leading_zeros(&sig.s)),
    ]
}

fn typed_envelope(rlp_payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(1 + rlp_payload.len());
    out.push(EIP1559_TX_TYPE);
    out.extend_from_slice(rlp_payload);
    out
}

fn legacy_v(chain_id: Option<u64>, parity: u8) -> SimbaResult<u64> {
    let parity = u64::from(parity);
    match chain_id {
        None => Ok(LEGACY_V_OFFSET + parity),
        Some(id) => id
            .checked_mul(2)
            .and_then(|v| v.checked_add(EIP155_V_OFFSET + parity))
            .ok_or_else(|| SimbaError::invalid_fields("'chainId' too large for EIP-155 v")),
    }
}
