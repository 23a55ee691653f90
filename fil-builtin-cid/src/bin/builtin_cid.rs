//! Builtin CID tool entry point.
//!
//! Prints the actor code CID table and converts between CIDs and chain hashes.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fil_builtin_cid::{
    cid_from_eth_hash, decode_cid, eth_hash_from_cid, init_registry, ActorRegistry, Codec,
    EthHash, HashFunction, RegistryConfig,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "builtin-cid")]
#[command(about = "Builtin actor code CIDs and CID <-> chain hash conversion")]
struct Args {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the actor code CID table.
    Actors {
        /// Registry configuration file (TOML). Defaults to the builtin v6 actors.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Emit JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },
    /// Extract the 32-byte chain hash from a CID.
    EthHash {
        /// CID text, e.g. bafy2bzace...
        cid: String,
    },
    /// Wrap a 32-byte chain hash into a CIDv1.
    TxCid {
        /// Hex hash, with or without 0x prefix.
        hash: String,

        /// Multihash function name.
        #[arg(long, default_value = "blake2b-256")]
        hash_function: String,

        /// Payload codec name.
        #[arg(long, default_value = "dag-cbor")]
        codec: String,
    },
}

#[derive(Serialize)]
struct ActorRow<'a> {
    name: &'a str,
    signer: bool,
    code: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Actors { config, json } => {
            let config = match config {
                Some(path) => RegistryConfig::from_file(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => RegistryConfig::default(),
            };
            // Without a registry nothing else is meaningful; abort here.
            let registry =
                init_registry(&config).context("Failed to build actor registry")?;
            print_actors(&registry, json)?;
        }
        Command::EthHash { cid } => {
            let cid = decode_cid(&cid)?;
            let hash = eth_hash_from_cid(&cid).context("Failed to extract chain hash")?;
            println!("{hash}");
        }
        Command::TxCid {
            hash,
            hash_function,
            codec,
        } => {
            let hash: EthHash = hash.parse().context("Invalid chain hash")?;
            let function: HashFunction = hash_function.parse()?;
            let codec: Codec = codec.parse()?;
            let cid = cid_from_eth_hash(&hash, function, codec)?;
            println!("{cid}");
        }
    }

    Ok(())
}

fn print_actors(registry: &ActorRegistry, json: bool) -> Result<()> {
    if json {
        let rows: Vec<ActorRow<'_>> = registry
            .iter()
            .map(|info| ActorRow {
                name: info.name(),
                signer: info.is_signer(),
                code: info.code().to_string(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for info in registry.iter() {
        let marker = if info.is_signer() { " (signer)" } else { "" };
        println!("{} value is {}{}", info.code(), info.name(), marker);
    }
    println!("caller types signable:");
    for code in registry.caller_types_signable() {
        println!("  {code}");
    }

    Ok(())
}
