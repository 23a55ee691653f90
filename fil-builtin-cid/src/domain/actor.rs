use cid::Cid;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default builtin-actors code version used for `fil/<version>/<slug>` names.
pub const DEFAULT_ACTORS_VERSION: u32 = 6;

/// The closed set of builtin actors that get a code CID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuiltinActor {
    System,
    Init,
    Cron,
    Account,
    StoragePower,
    StorageMiner,
    StorageMarket,
    PaymentChannel,
    Multisig,
    Reward,
    VerifiedRegistry,
}

impl BuiltinActor {
    pub const ALL: [BuiltinActor; 11] = [
        BuiltinActor::System,
        BuiltinActor::Init,
        BuiltinActor::Cron,
        BuiltinActor::Account,
        BuiltinActor::StoragePower,
        BuiltinActor::StorageMiner,
        BuiltinActor::StorageMarket,
        BuiltinActor::PaymentChannel,
        BuiltinActor::Multisig,
        BuiltinActor::Reward,
        BuiltinActor::VerifiedRegistry,
    ];

    /// Last path segment of the canonical actor name.
    pub fn slug(&self) -> &'static str {
        match self {
            BuiltinActor::System => "system",
            BuiltinActor::Init => "init",
            BuiltinActor::Cron => "cron",
            BuiltinActor::Account => "account",
            BuiltinActor::StoragePower => "storagepower",
            BuiltinActor::StorageMiner => "storageminer",
            BuiltinActor::StorageMarket => "storagemarket",
            BuiltinActor::PaymentChannel => "paymentchannel",
            BuiltinActor::Multisig => "multisig",
            BuiltinActor::Reward => "reward",
            BuiltinActor::VerifiedRegistry => "verifiedregistry",
        }
    }

    /// Only account and multisig actors may appear as message senders.
    pub fn is_signer(&self) -> bool {
        matches!(self, BuiltinActor::Account | BuiltinActor::Multisig)
    }

    pub fn canonical_name(&self, actors_version: u32) -> String {
        format!("fil/{}/{}", actors_version, self.slug())
    }

    /// Registry input for every builtin actor at the given code version.
    pub fn specs(actors_version: u32) -> Vec<ActorSpec> {
        Self::ALL
            .iter()
            .map(|actor| ActorSpec {
                name: actor.canonical_name(actors_version),
                signer: actor.is_signer(),
                kind: Some(*actor),
            })
            .collect()
    }
}

impl fmt::Display for BuiltinActor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for BuiltinActor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|actor| actor.slug() == s)
            .copied()
            .ok_or_else(|| format!("unknown builtin actor: {s}"))
    }
}

/// One `(name, signer)` row of registry input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorSpec {
    pub name: String,
    #[serde(default)]
    pub signer: bool,
    /// Symbolic handle, when the row is one of the builtin actors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<BuiltinActor>,
}

impl ActorSpec {
    pub fn new(name: impl Into<String>, signer: bool) -> Self {
        Self {
            name: name.into(),
            signer,
            kind: None,
        }
    }
}

/// A registered actor: its canonical name, signer flag and minted code CID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorInfo {
    name: String,
    signer: bool,
    kind: Option<BuiltinActor>,
    code: Cid,
}

impl ActorInfo {
    pub fn new(spec: ActorSpec, code: Cid) -> Self {
        Self {
            name: spec.name,
            signer: spec.signer,
            kind: spec.kind,
            code,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_signer(&self) -> bool {
        self.signer
    }

    pub fn kind(&self) -> Option<BuiltinActor> {
        self.kind
    }

    pub fn code(&self) -> &Cid {
        &self.code
    }
}
