//! Common test utilities for genptconfig integration tests

#![allow(dead_code)]

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

pub use genptconfig::{ResultBundle, DRBG_SEED_LENGTH, KEY_LENGTH, NODE_ID_LENGTH};

/// Keys every JSON bundle must carry
pub const REQUIRED_KEYS: [&str; 5] = ["node_id", "private_key", "public_key", "drbg_seed", "iat_mode"];

/// Decode a hex field and check its length
pub fn decode_hex_field(value: &str, expected_len: usize) -> Vec<u8> {
    assert!(
        value.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
        "not lowercase hex: {}",
        value
    );
    let bytes = hex::decode(value).expect("valid hex");
    assert_eq!(bytes.len(), expected_len);
    bytes
}

/// Decode a certificate the way a client does: re-add "==" and base64 decode
pub fn decode_cert(cert: &str) -> Vec<u8> {
    BASE64
        .decode(format!("{}==", cert))
        .expect("certificate is base64 once padding is restored")
}

/// Check every documented property of a bundle
pub fn assert_bundle_well_formed(bundle: &ResultBundle) {
    let node_id = decode_hex_field(&bundle.node_id, NODE_ID_LENGTH);
    let private_key: [u8; 32] = decode_hex_field(&bundle.private_key, KEY_LENGTH)
        .try_into()
        .unwrap();
    let public_key = decode_hex_field(&bundle.public_key, KEY_LENGTH);
    decode_hex_field(&bundle.drbg_seed, DRBG_SEED_LENGTH);
    assert_eq!(bundle.iat_mode, 0);

    let derived = x25519_dalek::x25519(private_key, x25519_dalek::X25519_BASEPOINT_BYTES);
    assert_eq!(derived.as_slice(), public_key.as_slice());

    if let Some(cert) = &bundle.cert {
        let raw = decode_cert(cert);
        assert_eq!(&raw[..NODE_ID_LENGTH], node_id.as_slice());
        assert_eq!(&raw[NODE_ID_LENGTH..], public_key.as_slice());
    }
}
