// Simba Wallet Engine — RLP Encoding
// Recursive-length prefix encoding as used in Ethereum transactions.

use simba_core::U256;

/// RLP-encode a single byte string
pub(crate) fn rlp_encode_bytes(data: &[u8]) -> Vec<u8> {
    if data.len() == 1 && data[0] < 0x80 {
        return data.to_vec();
    }
    let mut encoded = length_prefix(0x80, 0xb7, data.len());
    encoded.extend_from_slice(data);
    encoded
}

/// RLP-encode a list of already-RLP-encoded items
pub(crate) fn rlp_encode_list(items: &[Vec<u8>]) -> Vec<u8> {
    let payload = items.concat();
    let mut encoded = length_prefix(0xc0, 0xf7, payload.len());
    encoded.extend_from_slice(&payload);
    encoded
}

/// RLP-encode an unsigned integer (minimal big-endian, zero = empty string)
pub(crate) fn rlp_encode_u64(val: u64) -> Vec<u8> {
    rlp_encode_bytes(&u64_to_minimal_be(val))
}

/// RLP-encode a 256-bit unsigned integer
pub(crate) fn rlp_encode_u256(val: &U256) -> Vec<u8> {
    rlp_encode_bytes(strip_leading_zeros(&val.to_be_bytes::<32>()))
}

// Short form: `short_base + len` for payloads up to 55 bytes.
// Long form: `long_base + len(len_be)` followed by the big-endian length.
fn length_prefix(short_base: u8, long_base: u8, len: usize) -> Vec<u8> {
    if len <= 55 {
        // len <= 55 keeps the sum within u8
        vec![short_base + len as u8]
    } else {
        let len_bytes = u64_to_minimal_be(len as u64);
        let mut prefix = Vec::with_capacity(1 + len_bytes.len());
        prefix.push(long_base + len_bytes.len() as u8);
        prefix.extend_from_slice(&len_bytes);
        prefix
    }
}

/// Encode a u64 as minimal big-endian bytes (for RLP)
pub(crate) fn u64_to_minimal_be(val: u64) -> Vec<u8> {
    strip_leading_zeros(&val.to_be_bytes()).to_vec()
}

/// Drop leading zero bytes; all-zero input yields an empty slice.
pub(crate) fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let first_nonzero = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[first_nonzero..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_low_byte_is_itself() {
        assert_eq!(rlp_encode_bytes(&[0x00]), vec![0x00]);
        assert_eq!(rlp_encode_bytes(&[0x7f]), vec![0x7f]);
        assert_eq!(rlp_encode_bytes(&[0x80]), vec![0x81, 0x80]);
    }

    #[test]
    fn test_empty_string_and_list() {
        assert_eq!(rlp_encode_bytes(&[]), vec![0x80]);
        assert_eq!(rlp_encode_list(&[]), vec![0xc0]);
    }

    #[test]
    fn test_short_string() {
        assert_eq!(rlp_encode_bytes(b"dog"), vec![0x83, b'd', b'o', b'g']);
    }

    #[test]
    fn test_long_string() {
        let data = vec![b'a'; 56];
        let encoded = rlp_encode_bytes(&data);
        assert_eq!(&encoded[..2], &[0xb8, 56]);
        assert_eq!(encoded.len(), 58);

        let data = vec![b'a'; 1024];
        let encoded = rlp_encode_bytes(&data);
        assert_eq!(&encoded[..3], &[0xb9, 0x04, 0x00]);
    }

    #[test]
    fn test_list_of_strings() {
        let items = vec![rlp_encode_bytes(b"cat"), rlp_encode_bytes(b"dog")];
        assert_eq!(
            rlp_encode_list(&items),
            vec![0xc8, 0x83, b'c', b'a', b't', 0x83, b'd', b'o', b'g']
        );
    }

    #[test]
    fn test_long_list() {
        let items: Vec<Vec<u8>> = (0..60).map(|_| rlp_encode_bytes(&[0x01])).collect();
        let encoded = rlp_encode_list(&items);
        assert_eq!(&encoded[..2], &[0xf8, 60]);
    }

    #[test]
    fn test_integers_are_minimal() {
        assert_eq!(rlp_encode_u64(0), vec![0x80]);
        assert_eq!(rlp_encode_u64(15), vec![0x0f]);
        assert_eq!(rlp_encode_u64(1024), vec![0x82, 0x04, 0x00]);
        assert_eq!(rlp_encode_u256(&U256::ZERO), vec![0x80]);
        assert_eq!(
            rlp_encode_u256(&U256::from(0x3b9aca00u64)),
            vec![0x84, 0x3b, 0x9a, 0xca, 0x00]
        );
    }

    #[test]
    fn test_address_keeps_leading_zeros() {
        let mut address = [0u8; 20];
        address[19] = 1;
        let encoded = rlp_encode_bytes(&address);
        assert_eq!(encoded[0], 0x94);
        assert_eq!(encoded.len(), 21);
    }
}
