//! Builtin actor code CIDs and CID <-> chain hash conversion.
//!
//! Code CIDs are CIDv1 / raw / identity-multihash identifiers minted from
//! actor names such as `fil/6/account`, so the name is recoverable from the
//! CID. The bridge functions convert between CIDs and the fixed 32-byte hashes
//! used by the chain's transaction and address formats.

pub mod application_service;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

pub use application_service::ActorRegistry;
pub use domain::*;
pub use error::{Error, Result};
pub use infrastructure::{
    cid_from_eth_hash, decode_cid, eth_hash_from_cid, parse_hex, to_fixed_hash, Codec,
    ConfigError, HashFunction, IdentityCidBuilder, RegistryConfig,
};
pub use port::CodeCidBuilder;

/// Failure while bootstrapping a registry from configuration.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("actor registry construction failed: {0}")]
    Registry(#[from] Error),
}

/// Build a registry from an already loaded configuration
pub fn init_registry(config: &RegistryConfig) -> Result<ActorRegistry> {
    ActorRegistry::build(&IdentityCidBuilder, config.entries())
}

/// Initialize a registry from a configuration file
pub fn init_registry_from_file<P: AsRef<std::path::Path>>(
    config_path: P,
) -> std::result::Result<ActorRegistry, InitError> {
    let config = RegistryConfig::from_file(config_path)?;
    Ok(init_registry(&config)?)
}

/// Initialize a registry from a configuration string
pub fn init_registry_from_str(config_str: &str) -> std::result::Result<ActorRegistry, InitError> {
    let config = RegistryConfig::from_toml_str(config_str)?;
    Ok(init_registry(&config)?)
}

/// Initialize a registry with the builtin actors at the default version
pub fn init_registry_default() -> Result<ActorRegistry> {
    init_registry(&RegistryConfig::default())
}
