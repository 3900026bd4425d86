// Simba Core — Keccak Hashing
// Original Keccak padding (0x01…0x80), as used by Ethereum and Solidity's
// keccak256 — not the finalized SHA3 variant.

use alloy_primitives::U256;
use tiny_keccak::{Hasher, Keccak};

/// Keccak digest width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeccakBits {
    B224,
    #[default]
    B256,
    B384,
    B512,
}

impl KeccakBits {
    /// Digest length in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            Self::B224 => 28,
            Self::B256 => 32,
            Self::B384 => 48,
            Self::B512 => 64,
        }
    }

    fn hasher(self) -> Keccak {
        match self {
            Self::B224 => Keccak::v224(),
            Self::B256 => Keccak::v256(),
            Self::B384 => Keccak::v384(),
            Self::B512 => Keccak::v512(),
        }
    }
}

/// Byte order used when reading a digest as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Solidity's `uint256(keccak256(...))` order.
    #[default]
    BigEndian,
    LittleEndian,
}

/// Keccak-256 hash (Ethereum's hash function)
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(data);
    hasher.finalize(&mut output);
    output
}

/// Hash the UTF-8 bytes of `value` with the requested Keccak width.
pub fn keccak_hash(value: &str, bits: KeccakBits) -> Vec<u8> {
    let mut hasher = bits.hasher();
    let mut output = vec![0u8; bits.output_len()];
    hasher.update(value.as_bytes());
    hasher.finalize(&mut output);
    output
}

/// Hex digest (lowercase, no `0x`) of the UTF-8 bytes of `value`.
pub fn keccak_hash_hex(value: &str, bits: KeccakBits) -> String {
    crate::hexutil::emit_hex(&keccak_hash(value, bits), false)
}

/// Map any string to a `uint256` via keccak256 of its UTF-8 bytes.
///
/// With [`ByteOrder::BigEndian`] this equals Solidity's
/// `uint256(keccak256(bytes(value)))`.
pub fn string_to_uint256(value: &str, order: ByteOrder) -> U256 {
    let digest = keccak256(value.as_bytes());
    match order {
        ByteOrder::BigEndian => U256::from_be_bytes(digest),
        ByteOrder::LittleEndian => U256::from_le_bytes(digest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak256_empty() {
        assert_eq!(
            crate::hexutil::emit_hex(&keccak256(b""), false),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_keccak_hash_hex_short_string() {
        assert_eq!(
            keccak_hash_hex("A short string", KeccakBits::B256),
            "c02616352442fd8d6b29e47623743b0644e7168b988c4545b71df141245db363"
        );
    }

    #[test]
    fn test_keccak_hash_widths() {
        assert_eq!(keccak_hash("abc", KeccakBits::B224).len(), 28);
        assert_eq!(keccak_hash("abc", KeccakBits::B384).len(), 48);
        assert_eq!(keccak_hash("abc", KeccakBits::B512).len(), 64);
        assert_eq!(keccak_hash("abc", KeccakBits::default()), keccak256(b"abc").to_vec());
    }

    #[test]
    fn test_string_to_uint256_big_endian() {
        let expected: U256 =
            "86911360387564328691877682441780275511611438275732502394544537523081168401251"
                .parse()
                .unwrap();
        assert_eq!(string_to_uint256("A short string", ByteOrder::BigEndian), expected);
    }

    #[test]
    fn test_string_to_uint256_little_endian_is_byte_reversed() {
        let mut digest = keccak256("A short string".as_bytes());
        digest.reverse();
        assert_eq!(
            string_to_uint256("A short string", ByteOrder::LittleEndian),
            U256::from_be_bytes(digest)
        );
    }
}
