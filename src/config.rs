//! Generator configuration
//!
//! Values come from `GENPTCONFIG_*` environment variables and can then be
//! overridden by command-line flags. The output format is only selected on
//! the command line, so a bare invocation always prints JSON.
//!
//! - `GENPTCONFIG_NO_CERT` - omit the `cert` field when set to a true value
//! - `GENPTCONFIG_ELLIGATOR` - require an Elligator2-representable public key
//!
//! A value that is not a recognized boolean is an error, never a default.

use std::str::FromStr;

use crate::error::{GenError, Result};

pub const ENV_NO_CERT: &str = "GENPTCONFIG_NO_CERT";
pub const ENV_ELLIGATOR: &str = "GENPTCONFIG_ELLIGATOR";

/// How the finished bundle is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Single compact JSON object
    #[default]
    Json,
    /// `key=value;...` arguments for the server side
    ServerArgs,
    /// `key=value;...` arguments to hand to clients
    ClientArgs,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "server-args" | "server" => Ok(OutputFormat::ServerArgs),
            "client-args" | "client" => Ok(OutputFormat::ClientArgs),
            _ => Err(format!(
                "Unknown output format: {}. Use json, server-args, or client-args",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Emit the `cert` field
    pub include_cert: bool,
    /// Only accept handshake keys with an Elligator2 representative
    pub elligator_compatible: bool,
    pub format: OutputFormat,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            include_cert: true,
            elligator_compatible: false,
            format: OutputFormat::Json,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(ENV_NO_CERT) {
            config.include_cert = !parse_flag(ENV_NO_CERT, &value)?;
        }
        if let Some(value) = lookup(ENV_ELLIGATOR) {
            config.elligator_compatible = parse_flag(ENV_ELLIGATOR, &value)?;
        }
        Ok(config)
    }

    pub fn with_cert(mut self, include_cert: bool) -> Self {
        self.include_cert = include_cert;
        self
    }

    pub fn with_elligator(mut self, elligator_compatible: bool) -> Self {
        self.elligator_compatible = elligator_compatible;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

fn parse_flag(variable: &'static str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(GenError::InvalidConfig {
            variable,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert!(config.include_cert);
        assert!(!config.elligator_compatible);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_env_overrides() {
        let config = GeneratorConfig::from_lookup(lookup_from(&[
            (ENV_NO_CERT, "1"),
            (ENV_ELLIGATOR, "true"),
        ]))
        .unwrap();
        assert!(!config.include_cert);
        assert!(config.elligator_compatible);
    }

    #[test]
    fn test_format_is_not_read_from_env() {
        let config =
            GeneratorConfig::from_lookup(lookup_from(&[("GENPTCONFIG_FORMAT", "server-args")]))
                .unwrap();
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_unrecognized_flag_is_rejected() {
        let err = GeneratorConfig::from_lookup(lookup_from(&[(ENV_ELLIGATOR, "enabled")]))
            .unwrap_err();
        assert!(matches!(
            err,
            GenError::InvalidConfig {
                variable: ENV_ELLIGATOR,
                ref value,
            } if value == "enabled"
        ));
        assert!(err.is_input_error());

        let err =
            GeneratorConfig::from_lookup(lookup_from(&[(ENV_NO_CERT, "maybe")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for GENPTCONFIG_NO_CERT: \"maybe\""
        );
    }

    #[test]
    fn test_builder_overrides() {
        let config = GeneratorConfig::default()
            .with_cert(false)
            .with_elligator(true)
            .with_format(OutputFormat::ClientArgs);
        assert!(!config.include_cert);
        assert!(config.elligator_compatible);
        assert_eq!(config.format, OutputFormat::ClientArgs);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "client".parse::<OutputFormat>().unwrap(),
            OutputFormat::ClientArgs
        );
        assert!("toml".parse::<OutputFormat>().is_err());
    }
}
