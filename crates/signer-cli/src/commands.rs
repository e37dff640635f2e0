//! Command handlers.

use std::io::Read;

use anyhow::{Context, Result};
use nip07_signer::adapters::dispatch_line;
use nip07_signer::{BlobStore, Nip07Api, SignedEvent, SigningProvider};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

use crate::Command;

/// Run one command against `provider`.
pub async fn run<S: BlobStore>(provider: &SigningProvider<S>, command: Command) -> Result<()> {
    match command {
        Command::Pubkey => {
            println!("{}", provider.get_public_key().await?);
        }
        Command::Sign { event } => {
            let raw = read_arg_or_stdin(event)?;
            let value: serde_json::Value =
                serde_json::from_str(&raw).context("event is not valid JSON")?;
            let signed = provider.sign_event_json(&value).await?;
            println!("{}", serde_json::to_string(&signed)?);
        }
        Command::Verify { event } => {
            let raw = read_arg_or_stdin(event)?;
            let signed: SignedEvent =
                serde_json::from_str(&raw).context("signed event is not valid JSON")?;
            provider.verify_event(&signed)?;
            println!("valid");
        }
        Command::Encrypt { peer, message } => {
            println!("{}", provider.nip04_encrypt(&peer, &message).await?);
        }
        Command::Decrypt { peer, payload } => {
            println!("{}", provider.nip04_decrypt(&peer, &payload).await?);
        }
        Command::Relays => {
            let relays = provider.get_relays().await;
            println!("{}", serde_json::to_string_pretty(&relays)?);
        }
        Command::Serve => serve(provider).await?,
    }
    Ok(())
}

/// Line-delimited JSON request loop until stdin closes.
async fn serve<S: BlobStore>(provider: &SigningProvider<S>) -> Result<()> {
    info!("Serving NIP-07 requests on stdio");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let response = dispatch_line(provider, &line).await;
        stdout.write_all(response.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    info!("stdin closed, stopping");
    Ok(())
}

fn read_arg_or_stdin(arg: Option<String>) -> Result<String> {
    match arg {
        Some(value) => Ok(value),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}
