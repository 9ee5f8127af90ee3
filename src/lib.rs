//! Randomized pluggable transport server configurations
//!
//! Generates everything an obfs4 server needs to start: a node id, an
//! X25519 handshake keypair, a DRBG seed and, optionally, the bridge
//! certificate clients use to reach it.
//!
//! ```
//! use genptconfig::{Generator, GeneratorConfig};
//! use rand::rngs::OsRng;
//!
//! # fn example() -> Result<(), genptconfig::GenError> {
//! let bundle = Generator::new(GeneratorConfig::default()).generate(&mut OsRng)?;
//! assert_eq!(bundle.node_id.len(), 40);
//! assert_eq!(bundle.iat_mode, 0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod bundle;
mod cert;
mod config;
mod elligator;
mod error;
mod generator;
mod keypair;
mod random;
mod transport;
mod types;

pub use bundle::{ResultBundle, IAT_MODE_NONE};
pub use cert::{Certificate, CERT_LENGTH};
pub use config::{GeneratorConfig, OutputFormat};
pub use elligator::is_representable;
pub use error::{GenError, Result};
pub use generator::{Generator, Stage};
pub use keypair::{HandshakeKeypair, PublicKey, KEY_LENGTH};
pub use random::{random_array, RandomSource};
pub use transport::{Transport, OBFS4_NAME};
pub use types::{DrbgSeed, NodeId, DRBG_SEED_LENGTH, NODE_ID_LENGTH};
