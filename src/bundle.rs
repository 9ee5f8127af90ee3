//! The finished server configuration
//!
//! Field order is the emission order: `node_id`, `private_key`,
//! `public_key`, `cert`, `drbg_seed`, `iat_mode`. `cert` is absent from
//! the output entirely when certificates are disabled.

use serde::{Deserialize, Serialize};

use crate::cert::Certificate;
use crate::error::Result;
use crate::keypair::HandshakeKeypair;
use crate::types::{DrbgSeed, NodeId};

/// Inter-arrival-time obfuscation mode emitted in every bundle (disabled)
pub const IAT_MODE_NONE: u8 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultBundle {
    pub node_id: String,
    pub private_key: String,
    pub public_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert: Option<String>,
    pub drbg_seed: String,
    pub iat_mode: u8,
}

impl ResultBundle {
    /// Compose the bundle from freshly generated parts
    pub fn assemble(
        node_id: &NodeId,
        keypair: &HandshakeKeypair,
        seed: &DrbgSeed,
        cert: Option<&Certificate>,
    ) -> Self {
        Self {
            node_id: node_id.to_hex(),
            private_key: keypair.private_hex(),
            public_key: keypair.public_key().to_hex(),
            cert: cert.map(|c| c.as_str().to_string()),
            drbg_seed: seed.to_hex(),
            iat_mode: IAT_MODE_NONE,
        }
    }

    /// Compact JSON, with no trailing newline
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Server-side transport arguments
    pub fn server_args(&self) -> String {
        format!(
            "drbg-seed={};node-id={};private-key={};iat-mode={}",
            self.drbg_seed, self.node_id, self.private_key, self.iat_mode
        )
    }

    /// Client-side transport arguments, as published in a bridge line
    ///
    /// Without a certificate the client needs the node id and public key
    /// separately.
    pub fn client_args(&self) -> String {
        match &self.cert {
            Some(cert) => format!("cert={};iat-mode={}", cert, self.iat_mode),
            None => format!(
                "node-id={};public-key={};iat-mode={}",
                self.node_id, self.public_key, self.iat_mode
            ),
        }
    }
}
