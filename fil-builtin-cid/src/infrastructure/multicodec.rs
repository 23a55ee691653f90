//! Symbolic names for the multicodec table entries this crate uses.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Multihash function codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashFunction {
    /// Digest is the input itself.
    Identity,
    Sha2_256,
    Blake2b256,
}

impl HashFunction {
    pub fn code(&self) -> u64 {
        match self {
            HashFunction::Identity => 0x00,
            HashFunction::Sha2_256 => 0x12,
            HashFunction::Blake2b256 => 0xb220,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HashFunction::Identity => "identity",
            HashFunction::Sha2_256 => "sha2-256",
            HashFunction::Blake2b256 => "blake2b-256",
        }
    }

    pub fn from_code(code: u64) -> Option<Self> {
        [
            HashFunction::Identity,
            HashFunction::Sha2_256,
            HashFunction::Blake2b256,
        ]
        .into_iter()
        .find(|f| f.code() == code)
    }
}

impl FromStr for HashFunction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "identity" => Ok(HashFunction::Identity),
            "sha2-256" => Ok(HashFunction::Sha2_256),
            "blake2b-256" => Ok(HashFunction::Blake2b256),
            other => Err(Error::UnknownHashFunction(other.to_string())),
        }
    }
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Payload codecs a CID can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
    Raw,
    DagCbor,
}

impl Codec {
    pub fn code(&self) -> u64 {
        match self {
            Codec::Raw => 0x55,
            Codec::DagCbor => 0x71,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Codec::Raw => "raw",
            Codec::DagCbor => "dag-cbor",
        }
    }
}

impl FromStr for Codec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(Codec::Raw),
            "dag-cbor" => Ok(Codec::DagCbor),
            other => Err(Error::UnknownCodec(other.to_string())),
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
