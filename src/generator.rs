//! Configuration generation pipeline
//!
//! Generation is a single linear pass:
//!
//! ```text
//! Start -> NodeIdGenerated -> KeypairGenerated -> SeedGenerated
//!       -> (CertEncoded) -> Assembled
//! ```
//!
//! Any failing step ends the pass and returns its error. Nothing is retried
//! or rolled back and no partial bundle is produced.

use std::fmt;

use tracing::{debug, error};

use crate::bundle::ResultBundle;
use crate::cert::Certificate;
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::keypair::HandshakeKeypair;
use crate::random::RandomSource;
use crate::types::{DrbgSeed, NodeId};

/// Pipeline position, used for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    NodeIdGenerated,
    KeypairGenerated,
    SeedGenerated,
    CertEncoded,
    Assembled,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::NodeIdGenerated => "node-id-generated",
            Stage::KeypairGenerated => "keypair-generated",
            Stage::SeedGenerated => "seed-generated",
            Stage::CertEncoded => "cert-encoded",
            Stage::Assembled => "assembled",
        };
        f.write_str(name)
    }
}

/// Generates obfs4 server configurations
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run the pipeline, drawing every secret from `rng`
    ///
    /// Node id, keypair and seed each take their own draw from the source.
    pub fn generate(&self, rng: &mut (impl RandomSource + ?Sized)) -> Result<ResultBundle> {
        let mut stage = Stage::Start;
        let result = self.run(rng, &mut stage);
        if let Err(e) = &result {
            error!(%stage, error = %e, "configuration generation failed");
        }
        result
    }

    fn run(
        &self,
        rng: &mut (impl RandomSource + ?Sized),
        stage: &mut Stage,
    ) -> Result<ResultBundle> {
        let node_id = NodeId::generate(rng)?;
        advance(stage, Stage::NodeIdGenerated);

        let keypair = HandshakeKeypair::generate(rng, self.config.elligator_compatible)?;
        advance(stage, Stage::KeypairGenerated);

        let seed = DrbgSeed::generate(rng)?;
        advance(stage, Stage::SeedGenerated);

        let cert = if self.config.include_cert {
            let cert = Certificate::encode(&node_id, keypair.public_key());
            advance(stage, Stage::CertEncoded);
            Some(cert)
        } else {
            None
        };

        let bundle = ResultBundle::assemble(&node_id, &keypair, &seed, cert.as_ref());
        advance(stage, Stage::Assembled);
        Ok(bundle)
    }
}

fn advance(stage: &mut Stage, next: Stage) {
    debug!(from = %stage, to = %next, "pipeline stage");
    *stage = next;
}
