//! Registry configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::actor::{ActorSpec, BuiltinActor, DEFAULT_ACTORS_VERSION};

/// Input for building an actor registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Code version used in `fil/<version>/<slug>` names.
    #[serde(default = "default_actors_version")]
    pub actors_version: u32,

    /// Explicit actor list. When absent, every builtin actor is registered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actors: Option<Vec<ActorSpec>>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            actors_version: default_actors_version(),
            actors: None,
        }
    }
}

fn default_actors_version() -> u32 {
    DEFAULT_ACTORS_VERSION
}

impl RegistryConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))
    }

    /// Ordered `(name, signer)` rows to feed into the registry build.
    pub fn entries(&self) -> Vec<ActorSpec> {
        match &self.actors {
            Some(actors) => actors.clone(),
            None => BuiltinActor::specs(self.actors_version),
        }
    }
}

/// Configuration error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Serialize error: {0}")]
    SerializeError(String),
}
