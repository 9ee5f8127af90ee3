//! Fixed-size identity and seed types
//!
//! Both types are exact-length byte arrays. Construction from caller-supplied
//! bytes is a hard precondition check: values of the wrong length are
//! rejected, never truncated or padded.

use std::fmt;

use crate::error::{GenError, Result};
use crate::random::{random_array, RandomSource};

/// Length of an obfs4 node identifier in bytes
pub const NODE_ID_LENGTH: usize = 20;

/// Length of an obfs4 DRBG seed in bytes (16-byte SipHash key + 8-byte initial block)
pub const DRBG_SEED_LENGTH: usize = 24;

/// Node identifier (20 bytes) naming a server instance to its clients
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId([u8; NODE_ID_LENGTH]);

impl NodeId {
    /// Generate a new random node identifier
    pub fn generate(rng: &mut (impl RandomSource + ?Sized)) -> Result<Self> {
        Ok(NodeId(random_array(rng)?))
    }

    /// Create a node identifier from a 20-byte slice
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != NODE_ID_LENGTH {
            return Err(GenError::InvalidLength {
                what: "node id",
                expected: NODE_ID_LENGTH,
                got: bytes.len(),
            });
        }
        let mut id = [0u8; NODE_ID_LENGTH];
        id.copy_from_slice(bytes);
        Ok(NodeId(id))
    }

    /// Parse a node identifier from its hex form
    pub fn from_hex(s: &str) -> Result<Self> {
        Self::from_slice(&hex::decode(s)?)
    }

    /// Get a reference to the identifier bytes
    pub fn as_bytes(&self) -> &[u8; NODE_ID_LENGTH] {
        &self.0
    }

    /// Lowercase hex encoding
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.to_hex())
    }
}

/// Seed for the transport's traffic-shaping DRBG
///
/// The seed is secret server state. `Debug` does not print it.
#[derive(Clone, PartialEq, Eq)]
pub struct DrbgSeed([u8; DRBG_SEED_LENGTH]);

impl DrbgSeed {
    /// Generate a new random seed
    ///
    /// Any bytes from the source are acceptable seed material, so there is
    /// no rejection step.
    pub fn generate(rng: &mut (impl RandomSource + ?Sized)) -> Result<Self> {
        Ok(DrbgSeed(random_array(rng)?))
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let seed: [u8; DRBG_SEED_LENGTH] =
            bytes.try_into().map_err(|_| GenError::InvalidLength {
                what: "drbg seed",
                expected: DRBG_SEED_LENGTH,
                got: bytes.len(),
            })?;
        Ok(DrbgSeed(seed))
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        Self::from_slice(&hex::decode(s)?)
    }

    pub fn as_bytes(&self) -> &[u8; DRBG_SEED_LENGTH] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for DrbgSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DrbgSeed(..)")
    }
}
