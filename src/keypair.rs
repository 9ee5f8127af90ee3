//! ntor handshake keypair (X25519)

use std::fmt;

use sha2::{Digest, Sha256};
use tracing::debug;
use x25519_dalek::{x25519, X25519_BASEPOINT_BYTES};
use zeroize::Zeroizing;

use crate::elligator;
use crate::error::{GenError, Result};
use crate::random::{random_array, RandomSource};

/// Length of an X25519 private scalar or public key in bytes
pub const KEY_LENGTH: usize = 32;

/// X25519 public key (Montgomery u-coordinate)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; KEY_LENGTH]);

impl PublicKey {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let key: [u8; KEY_LENGTH] = bytes.try_into().map_err(|_| GenError::InvalidLength {
            what: "public key",
            expected: KEY_LENGTH,
            got: bytes.len(),
        })?;
        Ok(PublicKey(key))
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        Self::from_slice(&hex::decode(s)?)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Returns true if this key can be sent as an Elligator2 representative
    pub fn is_elligator_representable(&self) -> bool {
        elligator::is_representable(&self.0)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

/// Keypair for the transport's ntor-style handshake
///
/// The private scalar zeroizes on drop and is never printed by `Debug`.
#[derive(Clone)]
pub struct HandshakeKeypair {
    private_key: Zeroizing<[u8; KEY_LENGTH]>,
    public_key: PublicKey,
}

impl HandshakeKeypair {
    /// Generate a new random keypair
    ///
    /// When `elligator_compatible` is set, keys are redrawn until the public
    /// key has an Elligator2 representative. Each attempt succeeds with
    /// probability about one half, so the loop is left uncapped rather than
    /// biasing which keys can come out of it.
    pub fn generate(
        rng: &mut (impl RandomSource + ?Sized),
        elligator_compatible: bool,
    ) -> Result<Self> {
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            let keypair = Self::generate_once(rng)?;
            if !elligator_compatible || keypair.public_key.is_elligator_representable() {
                debug!(attempts, elligator_compatible, "handshake keypair generated");
                return Ok(keypair);
            }
        }
    }

    fn generate_once(rng: &mut (impl RandomSource + ?Sized)) -> Result<Self> {
        // CSPRNG output is run through SHA-256 before clamping
        let raw: Zeroizing<[u8; KEY_LENGTH]> = Zeroizing::new(random_array(rng)?);
        let mut private_key = Zeroizing::new([0u8; KEY_LENGTH]);
        private_key.copy_from_slice(&Sha256::digest(raw.as_slice()));
        clamp(&mut private_key);
        Ok(Self::from_private_bytes(private_key))
    }

    /// Rebuild a keypair from its private scalar, deriving the public half
    pub fn from_private_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != KEY_LENGTH {
            return Err(GenError::InvalidLength {
                what: "private key",
                expected: KEY_LENGTH,
                got: bytes.len(),
            });
        }
        let mut private_key = Zeroizing::new([0u8; KEY_LENGTH]);
        private_key.copy_from_slice(bytes);
        Ok(Self::from_private_bytes(private_key))
    }

    /// Parse a hex private key, as found in a server's `private-key` argument
    pub fn from_private_hex(s: &str) -> Result<Self> {
        let bytes = Zeroizing::new(hex::decode(s)?);
        Self::from_private_slice(&bytes)
    }

    fn from_private_bytes(private_key: Zeroizing<[u8; KEY_LENGTH]>) -> Self {
        let public_key = PublicKey(x25519(*private_key, X25519_BASEPOINT_BYTES));
        Self {
            private_key,
            public_key,
        }
    }

    /// Get the private scalar bytes
    pub fn private_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.private_key
    }

    /// Lowercase hex encoding of the private scalar
    pub fn private_hex(&self) -> String {
        hex::encode(self.private_key.as_slice())
    }

    /// Get the public key
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }
}

impl fmt::Debug for HandshakeKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandshakeKeypair")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

/// RFC 7748 scalar clamping
fn clamp(scalar: &mut [u8; KEY_LENGTH]) {
    scalar[0] &= 248;
    scalar[31] &= 127;
    scalar[31] |= 64;
}
