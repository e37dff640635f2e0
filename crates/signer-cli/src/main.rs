//! # Signer CLI
//!
//! Command-line host for the NIP-07 signing provider.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging (stderr, `RUST_LOG` / `NOSTR_SIGNER_LOG`)
//! 2. Load configuration (defaults → `--config` file → env → flags)
//! 3. Validate configuration
//! 4. Open the file blob store under `data_dir`
//! 5. Run the requested command
//!
//! Output goes to stdout; logs never do, so `serve` can be piped.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nip07_signer::{FileBlobStore, SignerConfig, SigningProvider};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// NIP-07 signing provider.
#[derive(Debug, Parser)]
#[command(name = "signer-cli", version, about)]
pub struct Cli {
    /// JSON config file.
    #[arg(long, global = true, env = "NOSTR_SIGNER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory of the key store (overrides config and env).
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the identity's public key (generates one on first use).
    Pubkey,
    /// Sign an event given as JSON (argument or stdin).
    Sign {
        /// Event JSON; read from stdin when omitted.
        event: Option<String>,
    },
    /// Verify a signed event given as JSON (argument or stdin).
    Verify {
        /// Signed event JSON; read from stdin when omitted.
        event: Option<String>,
    },
    /// Encrypt a message to a peer.
    Encrypt {
        /// Peer public key (hex).
        #[arg(long)]
        peer: String,
        /// Plaintext message.
        message: String,
    },
    /// Decrypt a message from a peer.
    Decrypt {
        /// Peer public key (hex).
        #[arg(long)]
        peer: String,
        /// Payload in `<base64>?iv=<base64>` form.
        payload: String,
    },
    /// Print the relay directory.
    Relays,
    /// Answer line-delimited JSON requests on stdin.
    Serve,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("NOSTR_SIGNER_LOG"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Load configuration from file, environment and flags.
fn load_config(cli: &Cli) -> Result<SignerConfig> {
    let mut config = match &cli.config {
        Some(path) => SignerConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SignerConfig::default(),
    };

    config = config.apply_env(|name| std::env::var(name).ok());

    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    info!(data_dir = %config.data_dir.display(), slot = %config.storage_key, "Signer starting");

    let store = FileBlobStore::new(&config.data_dir);
    let provider = SigningProvider::from_config(store, &config);

    commands::run(&provider, cli.command).await
}
