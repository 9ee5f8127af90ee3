//! Supported pluggable transports

use std::fmt;
use std::str::FromStr;

use crate::error::GenError;

/// Name of the obfs4 transport
pub const OBFS4_NAME: &str = "obfs4";

/// Pluggable transport that a configuration can be generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Obfs4,
}

impl Transport {
    pub fn name(self) -> &'static str {
        match self {
            Transport::Obfs4 => OBFS4_NAME,
        }
    }
}

impl FromStr for Transport {
    type Err = GenError;

    /// Names are matched exactly, as they appear in tor's `ServerTransportPlugin` lines
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            OBFS4_NAME => Ok(Transport::Obfs4),
            other => Err(GenError::UnknownTransport(other.to_string())),
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
