// Simba Utils — Benchmarks
// Run: cargo bench --bench signing_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;
use simba_utils::{
    convert_bytes32_to_string, convert_to_bytes32_array, keccak256, transaction_from_payload,
    Bytes32Options, Wallet, WalletBackend,
};

const TEST_KEY: &str = "1837c1be8e2995ec11cda2b066151be2cfb48adf9e47b151d46adab3a21cdf67";
const ABANDON: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

fn bench_signing(c: &mut Criterion) {
    let mut wallet = Wallet::new();
    wallet.generate_from_private_key(TEST_KEY).unwrap();
    let legacy = json!({
        "to": "0xdea35e452b7367c43330e0065ec22538f545333b",
        "value": 0,
        "gas": "0x5d6a",
        "gasPrice": "0x3b9aca00",
        "data": "0xdb7eff7c00000000",
        "nonce": "0x2",
        "chainId": "0x1",
    });
    let mut eip1559 = legacy.clone();
    eip1559["maxFeePerGas"] = json!("0x3b9aca00");
    eip1559["maxPriorityFeePerGas"] = json!("0x3b9aca00");

    c.bench_function("sign_legacy_payload", |b| {
        b.iter(|| wallet.sign_transaction(black_box(&legacy)).unwrap())
    });
    c.bench_function("sign_eip1559_payload", |b| {
        b.iter(|| wallet.sign_transaction(black_box(&eip1559)).unwrap())
    });

    let typed = transaction_from_payload(&eip1559).unwrap();
    c.bench_function("sign_eip1559_typed", |b| {
        b.iter(|| wallet.sign_typed(black_box(&typed)).unwrap())
    });
}

fn bench_keys(c: &mut Criterion) {
    // Dominated by the 2048-round PBKDF2 seed stretch.
    c.bench_function("load_from_mnemonic", |b| {
        b.iter(|| {
            let mut wallet = Wallet::new();
            wallet.generate_from_mnemonic(Some(black_box(ABANDON))).unwrap();
            wallet
        })
    });
}

fn bench_codec(c: &mut Criterion) {
    let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut lab";
    let encoded = convert_to_bytes32_array(text, 4, Bytes32Options::default());

    c.bench_function("bytes32_encode_4_words", |b| {
        b.iter(|| convert_to_bytes32_array(black_box(text), 4, Bytes32Options::default()))
    });
    c.bench_function("bytes32_decode_4_words", |b| {
        b.iter(|| convert_bytes32_to_string(black_box(&encoded), None).unwrap())
    });
    c.bench_function("keccak256_96_bytes", |b| {
        b.iter(|| keccak256(black_box(text.as_bytes())))
    });
}

criterion_group!(benches, bench_signing, bench_keys, bench_codec);
criterion_main!(benches);
