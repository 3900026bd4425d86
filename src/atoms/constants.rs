// ── Simba Atoms: Constants ─────────────────────────────────────────────────
// Named constants for the wallet engine.

// ── HD derivation ─────────────────────────────────────────────────────────
// BIP-44 path for the first Ethereum account: purpose 44', coin type 60'.
pub const DEFAULT_DERIVATION_PATH: &str = "m/44'/60'/0'/0/0";

// Mnemonic lengths BIP-39 allows; 12 words = 128 bits of entropy.
pub const DEFAULT_MNEMONIC_WORDS: usize = 12;
pub(crate) const VALID_MNEMONIC_WORDS: [usize; 5] = [12, 15, 18, 21, 24];

// ── Transactions ──────────────────────────────────────────────────────────
// EIP-2718 type byte prefixed to EIP-1559 envelopes.
pub(crate) const EIP1559_TX_TYPE: u8 = 0x02;

// EIP-155: v = chain_id * 2 + 35 + parity; pre-EIP-155: v = 27 + parity.
pub(crate) const EIP155_V_OFFSET: u64 = 35;
pub(crate) const LEGACY_V_OFFSET: u64 = 27;

// Chain used for EIP-1559 payloads that omit `chainId` (Ethereum mainnet).
pub(crate) const DEFAULT_EIP1559_CHAIN_ID: u64 = 1;

// ── secp256k1 ─────────────────────────────────────────────────────────────
// floor(n / 2) for the curve order n, big-endian. Signatures with s above
// this are normalized to n - s.
pub const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, 0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b, 0x20, 0xa0,
];
