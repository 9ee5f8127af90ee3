//! genptconfig - print a fresh pluggable transport server configuration
//!
//! # Usage
//!
//! ```bash
//! genptconfig obfs4
//! genptconfig --no-cert obfs4
//! genptconfig --elligator --format server-args obfs4
//! ```
//!
//! Only the result goes to stdout. Logs go to stderr and are filtered by
//! `RUST_LOG` (default `warn`).

use std::io::Write;

use clap::Parser;
use rand::rngs::OsRng;
use tracing::info;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use genptconfig::{GenError, Generator, GeneratorConfig, OutputFormat, Transport};

#[derive(Parser)]
#[command(name = "genptconfig")]
#[command(about = "Generate a randomized pluggable transport server configuration")]
#[command(version)]
struct Cli {
    /// Pluggable transport name (obfs4)
    transport: String,

    /// Omit the bridge certificate from the output
    #[arg(long)]
    no_cert: bool,

    /// Only accept handshake keys that have an Elligator2 representative
    #[arg(long)]
    elligator: bool,

    /// Output format: json, server-args, client-args
    #[arg(long)]
    format: Option<OutputFormat>,
}

fn run(cli: Cli) -> Result<(), GenError> {
    let transport: Transport = cli.transport.parse()?;

    let mut config = GeneratorConfig::from_env()?;
    if cli.no_cert {
        config = config.with_cert(false);
    }
    if cli.elligator {
        config = config.with_elligator(true);
    }
    if let Some(format) = cli.format {
        config = config.with_format(format);
    }
    info!(%transport, ?config, "generating configuration");

    let bundle = Generator::new(config.clone()).generate(&mut OsRng)?;
    let output = match config.format {
        OutputFormat::Json => bundle.to_json()?,
        OutputFormat::ServerArgs => bundle.server_args(),
        OutputFormat::ClientArgs => bundle.client_args(),
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        if let Some(suggestion) = e.suggestion() {
            eprintln!("{}", suggestion);
        }
        std::process::exit(1);
    }
}
