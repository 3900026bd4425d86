// Simba Wallet Engine — Transaction Payload Decoding
// Lenient boundary decoder: caller-supplied JSON mappings (web3-style keys)
// become a typed `Transaction`. Numeric fields accept JSON integers, `0x` hex
// strings, or decimal strings.

use log::{debug, warn};
use serde_json::{Map, Value};
use simba_core::{parse_hex, parse_hex_array, SimbaError, SimbaResult, U256};

use super::primitives::parse_address;
use crate::atoms::constants::DEFAULT_EIP1559_CHAIN_ID;
use crate::atoms::types::{AccessListItem, Eip1559Transaction, LegacyTransaction, Transaction};

// Checked in this order so the first absent key is the one reported.
const COMMON_FIELDS: [&str; 5] = ["to", "nonce", "gas", "data", "value"];

impl TryFrom<&Value> for Transaction {
    type Error = SimbaError;

    fn try_from(payload: &Value) -> SimbaResult<Self> {
        transaction_from_payload(payload)
    }
}

/// Decode a payload; `maxFeePerGas` selects EIP-1559, otherwise legacy.
pub fn transaction_from_payload(payload: &Value) -> SimbaResult<Transaction> {
    let obj = payload
        .as_object()
        .ok_or_else(|| SimbaError::invalid_fields("payload must be a JSON object"))?;

    for field in COMMON_FIELDS {
        require(obj, field)?;
    }

    let is_eip1559 = present(obj, "maxFeePerGas").is_some();
    if is_eip1559 {
        require(obj, "maxPriorityFeePerGas")?;
    } else {
        require(obj, "gasPrice")?;
    }

    let to = parse_address(as_str(obj, "to")?)
        .map_err(|_| SimbaError::invalid_fields("'to' is not a 20-byte hex address"))?;
    let nonce = parse_u64(obj, "nonce")?;
    let gas = parse_u64(obj, "gas")?;
    let data = parse_hex(as_str(obj, "data")?)
        .map_err(|e| SimbaError::invalid_fields(format!("'data': {}", e)))?;
    let value = parse_u256(obj, "value")?;
    let chain_id = match present(obj, "chainId") {
        Some(_) => Some(parse_u64(obj, "chainId")?),
        None => None,
    };

    let tx = if is_eip1559 {
        let chain_id = chain_id.unwrap_or_else(|| {
            warn!(
                "[tx] EIP-1559 payload has no chainId, defaulting to {}",
                DEFAULT_EIP1559_CHAIN_ID
            );
            DEFAULT_EIP1559_CHAIN_ID
        });
        Transaction::Eip1559(Eip1559Transaction {
            chain_id,
            nonce,
            max_priority_fee_per_gas: parse_u256(obj, "maxPriorityFeePerGas")?,
            max_fee_per_gas: parse_u256(obj, "maxFeePerGas")?,
            gas,
            to,
            value,
            data,
            access_list: parse_access_list(present(obj, "accessList"))?,
        })
    } else {
        Transaction::Legacy(LegacyTransaction {
            nonce,
            gas_price: parse_u256(obj, "gasPrice")?,
            gas,
            to,
            value,
            data,
            chain_id,
        })
    };

    debug!("[tx] Decoded {} payload", tx.kind());
    Ok(tx)
}

// ── Field helpers ──────────────────────────────────────────────────────────

/// `null` counts as absent.
fn present<'a>(obj: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    obj.get(field).filter(|v| !v.is_null())
}

fn require<'a>(obj: &'a Map<String, Value>, field: &str) -> SimbaResult<&'a Value> {
    present(obj, field).ok_or_else(|| SimbaError::missing_field(field))
}

fn as_str<'a>(obj: &'a Map<String, Value>, field: &str) -> SimbaResult<&'a str> {
    require(obj, field)?
        .as_str()
        .ok_or_else(|| SimbaError::invalid_fields(format!("'{}' must be a hex string", field)))
}

fn parse_u64(obj: &Map<String, Value>, field: &str) -> SimbaResult<u64> {
    let invalid = || SimbaError::invalid_fields(format!("'{}' is not an unsigned 64-bit integer", field));
    match require(obj, field)? {
        Value::Number(n) => n.as_u64().ok_or_else(invalid),
        Value::String(s) => quantity_digits(s)
            .and_then(|(digits, radix)| u64::from_str_radix(digits, radix).ok())
            .ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

fn parse_u256(obj: &Map<String, Value>, field: &str) -> SimbaResult<U256> {
    let invalid = || SimbaError::invalid_fields(format!("'{}' is not an unsigned 256-bit integer", field));
    match require(obj, field)? {
        Value::Number(n) => n.as_u64().map(U256::from).ok_or_else(invalid),
        Value::String(s) => quantity_digits(s)
            .and_then(|(digits, radix)| U256::from_str_radix(digits, u64::from(radix)).ok())
            .ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

/// Split a quantity string into digits and radix (`0x` → 16, else 10).
/// Empty digits and stray characters such as a `+` sign are rejected.
fn quantity_digits(s: &str) -> Option<(&str, u32)> {
    let s = s.trim();
    let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (s, 10),
    };
    let valid = !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
    valid.then_some((digits, radix))
}

fn parse_access_list(value: Option<&Value>) -> SimbaResult<Vec<AccessListItem>> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };
    let entries = value
        .as_array()
        .ok_or_else(|| SimbaError::invalid_fields("'accessList' must be an array"))?;

    entries
        .iter()
        .map(|entry| {
            let address = entry
                .get("address")
                .and_then(Value::as_str)
                .ok_or_else(|| SimbaError::invalid_fields("'accessList' entry has no address"))?;
            let address = parse_address(address)
                .map_err(|_| SimbaError::invalid_fields("'accessList' address is not 20 bytes"))?;

            let storage_keys = match entry.get("storageKeys") {
                None | Some(Value::Null) => Vec::new(),
                Some(Value::Array(keys)) => keys
                    .iter()
                    .map(|key| {
                        key.as_str()
                            .and_then(|k| parse_hex_array::<32>(k).ok())
                            .ok_or_else(|| {
                                SimbaError::invalid_fields("'accessList' storage key is not 32 bytes")
                            })
                    })
                    .collect::<SimbaResult<Vec<_>>>()?,
                Some(_) => {
                    return Err(SimbaError::invalid_fields("'accessList' storageKeys must be an array"))
                }
            };

            Ok(AccessListItem { address, storage_keys })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use simba_core::TransactionError;

    fn legacy_payload() -> Value {
        json!({
            "to": "0xdea35e452b7367c43330e0065ec22538f545333b",
            "value": 0,
            "gas": "0x5d6a",
            "gasPrice": "0x3b9aca00",
            "data": "0xdb7eff7c00000000",
            "nonce": "0x2",
        })
    }

    fn missing(err: SimbaError) -> String {
        match err {
            SimbaError::Transaction(TransactionError::MissingField(field)) => field,
            other => panic!("expected missing field, got {:?}", other),
        }
    }

    #[test]
    fn test_legacy_payload_decodes() {
        let tx = Transaction::try_from(&legacy_payload()).unwrap();
        match tx {
            Transaction::Legacy(tx) => {
                assert_eq!(tx.nonce, 2);
                assert_eq!(tx.gas, 0x5d6a);
                assert_eq!(tx.gas_price, U256::from(1_000_000_000u64));
                assert_eq!(tx.value, U256::ZERO);
                assert_eq!(tx.chain_id, None);
                assert_eq!(tx.data.len(), 8);
            }
            other => panic!("expected legacy, got {:?}", other),
        }
    }

    #[test]
    fn test_max_fee_selects_eip1559_with_defaults() {
        let mut payload = legacy_payload();
        let obj = payload.as_object_mut().unwrap();
        obj.remove("gasPrice");
        obj.insert("maxFeePerGas".into(), json!("0x3b9aca00"));
        obj.insert("maxPriorityFeePerGas".into(), json!(1_000_000_000u64));

        match Transaction::try_from(&payload).unwrap() {
            Transaction::Eip1559(tx) => {
                assert_eq!(tx.chain_id, 1);
                assert!(tx.access_list.is_empty());
                assert_eq!(tx.max_fee_per_gas, tx.max_priority_fee_per_gas);
            }
            other => panic!("expected EIP-1559, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_to_reported_first() {
        let mut payload = legacy_payload();
        payload.as_object_mut().unwrap().remove("to");
        payload.as_object_mut().unwrap().remove("nonce");
        let err = transaction_from_payload(&payload).unwrap_err();
        assert_eq!(err.to_string(), "Missing field in transaction: 'to'");
    }

    #[test]
    fn test_missing_fee_fields() {
        let mut payload = legacy_payload();
        payload.as_object_mut().unwrap().remove("gasPrice");
        assert_eq!(missing(transaction_from_payload(&payload).unwrap_err()), "gasPrice");

        payload.as_object_mut().unwrap().insert("maxFeePerGas".into(), json!("0x1"));
        assert_eq!(
            missing(transaction_from_payload(&payload).unwrap_err()),
            "maxPriorityFeePerGas"
        );
    }

    #[test]
    fn test_null_counts_as_missing() {
        let mut payload = legacy_payload();
        payload.as_object_mut().unwrap().insert("data".into(), Value::Null);
        assert_eq!(missing(transaction_from_payload(&payload).unwrap_err()), "data");
    }

    #[test]
    fn test_short_address_is_invalid() {
        let mut payload = legacy_payload();
        payload.as_object_mut().unwrap().insert("to".into(), json!("0xdea35e452b"));
        let err = transaction_from_payload(&payload).unwrap_err();
        assert!(err.to_string().starts_with("Transaction had invalid fields"));
    }

    #[test]
    fn test_numeric_forms() {
        let mut payload = legacy_payload();
        let obj = payload.as_object_mut().unwrap();
        obj.insert("nonce".into(), json!("7"));
        obj.insert("value".into(), json!("0xde0b6b3a7640000"));
        obj.insert("chainId".into(), json!(137));
        match transaction_from_payload(&payload).unwrap() {
            Transaction::Legacy(tx) => {
                assert_eq!(tx.nonce, 7);
                assert_eq!(tx.value, U256::from(1_000_000_000_000_000_000u64));
                assert_eq!(tx.chain_id, Some(137));
            }
            other => panic!("expected legacy, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_numbers_are_invalid() {
        for (field, bad) in [
            ("nonce", json!(-1)),
            ("gas", json!(1.5)),
            ("nonce", json!("0x")),
            ("gas", json!("0xzz")),
            ("value", json!("12abc")),
            ("nonce", json!("0x1ffffffffffffffff")),
            ("gasPrice", json!(true)),
        ] {
            let mut payload = legacy_payload();
            payload.as_object_mut().unwrap().insert(field.into(), bad);
            let err = transaction_from_payload(&payload).unwrap_err();
            assert!(
                matches!(err, SimbaError::Transaction(TransactionError::InvalidFields(_))),
                "{} should be invalid",
                field
            );
        }
    }

    #[test]
    fn test_bad_data_is_invalid() {
        let mut payload = legacy_payload();
        payload.as_object_mut().unwrap().insert("data".into(), json!("0xabc"));
        assert!(transaction_from_payload(&payload)
            .unwrap_err()
            .to_string()
            .starts_with("Transaction had invalid fields"));
    }

    #[test]
    fn test_access_list_decodes() {
        let mut payload = legacy_payload();
        let obj = payload.as_object_mut().unwrap();
        obj.insert("maxFeePerGas".into(), json!("0x2"));
        obj.insert("maxPriorityFeePerGas".into(), json!("0x1"));
        obj.insert(
            "accessList".into(),
            json!([{
                "address": "0xdea35e452b7367c43330e0065ec22538f545333b",
                "storageKeys": ["0x0000000000000000000000000000000000000000000000000000000000000001"]
            }]),
        );
        match transaction_from_payload(&payload).unwrap() {
            Transaction::Eip1559(tx) => {
                assert_eq!(tx.access_list.len(), 1);
                assert_eq!(tx.access_list[0].storage_keys[0][31], 1);
            }
            other => panic!("expected EIP-1559, got {:?}", other),
        }
    }

    #[test]
    fn test_non_object_payload() {
        assert!(transaction_from_payload(&json!([1, 2])).is_err());
    }
}
