// Simba Wallet Engine — EVM Primitives
// Address derivation, EIP-55 checksums, and strict address parsing.

use simba_core::{keccak256, parse_hex_array, SimbaResult};

/// Derive the 20-byte Ethereum address from an uncompressed secp256k1 key.
///
/// Accepts either the SEC1 form (`0x04 || X || Y`, 65 bytes) or the raw
/// 64-byte `X || Y`.
pub(crate) fn address_from_pubkey(pubkey_uncompressed: &[u8]) -> [u8; 20] {
    // Skip the 0x04 prefix (uncompressed key marker), hash the 64-byte x||y
    let xy = match pubkey_uncompressed.len() {
        65 => &pubkey_uncompressed[1..],
        _ => pubkey_uncompressed,
    };
    let hash = keccak256(xy);
    let mut address = [0u8; 20];
    // Address is last 20 bytes
    address.copy_from_slice(&hash[12..]);
    address
}

/// EIP-55 mixed-case checksum address
pub fn eip55_checksum(addr_bytes: &[u8; 20]) -> String {
    let hex_addr = simba_core::emit_hex(addr_bytes, false);
    let hash = keccak256(hex_addr.as_bytes());
    let mut checksummed = String::with_capacity(42);
    checksummed.push_str("0x");
    for (i, c) in hex_addr.chars().enumerate() {
        let hash_nibble = if i % 2 == 0 { hash[i / 2] >> 4 } else { hash[i / 2] & 0x0f };
        if hash_nibble >= 8 {
            checksummed.push(c.to_ascii_uppercase());
        } else {
            checksummed.push(c);
        }
    }
    checksummed
}

/// Parse an address string to 20 bytes. Checksum casing is not enforced.
pub(crate) fn parse_address(addr: &str) -> SimbaResult<[u8; 20]> {
    parse_hex_array::<20>(addr.trim())
}
