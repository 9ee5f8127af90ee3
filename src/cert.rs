//! Bridge certificate: node id followed by the server's public key
//!
//! The certificate is not X.509. It is the 52-byte concatenation
//! `node_id || public_key`, base64 encoded with the standard alphabet and
//! the trailing `==` dropped. Clients put it back before decoding.

use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::error::{GenError, Result};
use crate::keypair::{PublicKey, KEY_LENGTH};
use crate::types::{NodeId, NODE_ID_LENGTH};

/// Raw certificate length in bytes
pub const CERT_LENGTH: usize = NODE_ID_LENGTH + KEY_LENGTH;

const PADDING: &str = "==";

#[derive(Clone, PartialEq, Eq)]
pub struct Certificate(String);

impl Certificate {
    /// Encode a certificate from its two parts
    pub fn encode(node_id: &NodeId, public_key: &PublicKey) -> Self {
        let mut raw = Vec::with_capacity(CERT_LENGTH);
        raw.extend_from_slice(node_id.as_bytes());
        raw.extend_from_slice(public_key.as_bytes());

        let encoded = BASE64.encode(raw);
        // Only the exact "==" suffix is trimmed. 52 bytes always yields it.
        let trimmed = encoded.strip_suffix(PADDING).unwrap_or(&encoded);
        Certificate(trimmed.to_string())
    }

    /// Parse a certificate string back into node id and public key
    ///
    /// Accepts the certificate with or without its trailing `==`.
    pub fn decode(cert: &str) -> Result<(NodeId, PublicKey)> {
        let raw = if cert.len() % 4 == 2 {
            BASE64.decode(format!("{cert}{PADDING}"))?
        } else {
            BASE64.decode(cert)?
        };
        if raw.len() != CERT_LENGTH {
            return Err(GenError::InvalidLength {
                what: "certificate",
                expected: CERT_LENGTH,
                got: raw.len(),
            });
        }
        let (node_id, public_key) = raw.split_at(NODE_ID_LENGTH);
        Ok((NodeId::from_slice(node_id)?, PublicKey::from_slice(public_key)?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Certificate({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypair::HandshakeKeypair;
    use rand::rngs::OsRng;

    #[test]
    fn test_encode_known_cert() {
        // Node id of zeros with the public key of a fixed development private key
        let node_id = NodeId::from_slice(&[0u8; NODE_ID_LENGTH]).unwrap();
        let keypair = HandshakeKeypair::from_private_slice(b"0123456789abcdeffedcba9876543210")
            .unwrap();
        let cert = Certificate::encode(&node_id, keypair.public_key());
        assert_eq!(
            cert.as_str(),
            "AAAAAAAAAAAAAAAAAAAAAAAAAADTSFvsGKxNFPBcGdOCBSgpEtJInG9zCYZezBPVBuBWag"
        );
    }

    #[test]
    fn test_encode_shape() {
        let node_id = NodeId::generate(&mut OsRng).unwrap();
        let keypair = HandshakeKeypair::generate(&mut OsRng, false).unwrap();
        let cert = Certificate::encode(&node_id, keypair.public_key());

        assert_eq!(cert.as_str().len(), 70);
        assert!(!cert.as_str().ends_with('='));
    }

    #[test]
    fn test_decode_recovers_parts() {
        let node_id = NodeId::generate(&mut OsRng).unwrap();
        let keypair = HandshakeKeypair::generate(&mut OsRng, false).unwrap();
        let cert = Certificate::encode(&node_id, keypair.public_key());

        let (decoded_id, decoded_key) = Certificate::decode(cert.as_str()).unwrap();
        assert_eq!(decoded_id, node_id);
        assert_eq!(&decoded_key, keypair.public_key());
    }

    #[test]
    fn test_decode_accepts_padded_cert() {
        let node_id = NodeId::from_slice(&[0u8; NODE_ID_LENGTH]).unwrap();
        let keypair = HandshakeKeypair::from_private_slice(b"0123456789abcdeffedcba9876543210")
            .unwrap();
        let padded = format!(
            "{}{}",
            Certificate::encode(&node_id, keypair.public_key()),
            PADDING
        );

        let (decoded_id, decoded_key) = Certificate::decode(&padded).unwrap();
        assert_eq!(decoded_id, node_id);
        assert_eq!(&decoded_key, keypair.public_key());
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(matches!(
            Certificate::decode("not base64!").unwrap_err(),
            GenError::InvalidBase64(_)
        ));
        // 49 bytes of payload also ends in "==" but is too short
        let short = BASE64.encode([7u8; 49]);
        let short = short.strip_suffix(PADDING).unwrap();
        assert!(matches!(
            Certificate::decode(short).unwrap_err(),
            GenError::InvalidLength { got: 49, .. }
        ));
    }
}
