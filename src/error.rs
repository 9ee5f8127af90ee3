//! Unified error type for configuration generation
//!
//! Every failure in the pipeline is fatal: nothing here is retried and no
//! partially populated bundle is ever emitted.
//!
//! # Example
//!
//! ```no_run
//! use genptconfig::{GenError, Generator, GeneratorConfig};
//!
//! fn run() -> Result<(), GenError> {
//!     let bundle = Generator::new(GeneratorConfig::default()).generate(&mut rand::rngs::OsRng)?;
//!     println!("{}", bundle.to_json()?);
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, GenError>;

/// Errors produced while generating or emitting a transport configuration
///
/// # Error Categories
///
/// - **Entropy**: the secure random source could not be read
/// - **Input**: a fixed-size value had the wrong length or a bad encoding,
///   or a configuration variable could not be parsed
/// - **Transport**: the requested transport name is not supported
/// - **Output**: the finished bundle could not be serialized or written
#[derive(Debug, Error)]
pub enum GenError {
    /// The platform random source failed
    #[error("Entropy unavailable: {0}")]
    EntropyUnavailable(String),

    /// A fixed-size value had the wrong number of bytes
    #[error("Invalid {what} length: expected {expected}, got {got}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    /// Hex decoding failed
    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Base64 decoding failed
    #[error("Invalid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// A configuration variable held a value that could not be interpreted
    #[error("Invalid value for {variable}: {value:?}")]
    InvalidConfig {
        variable: &'static str,
        value: String,
    },

    /// The transport name is not one this tool knows how to configure
    #[error("Unknown pluggable transport: {0}")]
    UnknownTransport(String),

    /// JSON serialization of the result failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the result failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl GenError {
    /// Returns true if the random source failed
    pub fn is_entropy_error(&self) -> bool {
        matches!(self, Self::EntropyUnavailable(_))
    }

    /// Returns true if the error was caused by malformed input
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidLength { .. }
                | Self::InvalidHex(_)
                | Self::InvalidBase64(_)
                | Self::InvalidConfig { .. }
        )
    }

    /// Returns a suggestion for resolving this error
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Self::UnknownTransport(_) => Some("Supported transports: obfs4"),
            Self::InvalidConfig { .. } => {
                Some("Boolean settings accept 1/0, true/false, yes/no, on/off")
            }
            Self::EntropyUnavailable(_) => {
                Some("Check that the operating system random device is readable")
            }
            _ => None,
        }
    }
}
