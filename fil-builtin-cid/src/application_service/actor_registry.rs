use std::collections::HashMap;

use cid::Cid;

use crate::domain::actor::{ActorInfo, ActorSpec, BuiltinActor};
use crate::error::{Error, Result};
use crate::port::CodeCidBuilder;

/// Immutable table of actor code CIDs.
///
/// Built once from an ordered `(name, signer)` list and never mutated
/// afterwards, so it can be shared freely between readers.
#[derive(Debug, Clone)]
pub struct ActorRegistry {
    actors: Vec<ActorInfo>,
    by_code: HashMap<Cid, usize>,
    by_name: HashMap<String, usize>,
    by_kind: HashMap<BuiltinActor, usize>,
}

impl ActorRegistry {
    /// Mints a code CID for every entry and indexes the results.
    ///
    /// Any failure aborts the whole build; a partial registry is never returned.
    pub fn build<B, I>(builder: &B, entries: I) -> Result<Self>
    where
        B: CodeCidBuilder + ?Sized,
        I: IntoIterator<Item = ActorSpec>,
    {
        let mut registry = Self {
            actors: Vec::new(),
            by_code: HashMap::new(),
            by_name: HashMap::new(),
            by_kind: HashMap::new(),
        };

        for spec in entries {
            if spec.name.is_empty() {
                return Err(Error::EmptyActorName);
            }

            let code = builder.build(spec.name.as_bytes())?;
            if registry.by_code.contains_key(&code) || registry.by_name.contains_key(&spec.name) {
                return Err(Error::DuplicateCode { name: spec.name });
            }
            if let Some(kind) = spec.kind {
                if registry.by_kind.contains_key(&kind) {
                    return Err(Error::DuplicateCode { name: spec.name });
                }
            }

            tracing::debug!(name = %spec.name, signer = spec.signer, code = %code, "registered actor");

            let idx = registry.actors.len();
            registry.by_code.insert(code, idx);
            registry.by_name.insert(spec.name.clone(), idx);
            if let Some(kind) = spec.kind {
                registry.by_kind.insert(kind, idx);
            }
            registry.actors.push(ActorInfo::new(spec, code));
        }

        tracing::info!(
            actors = registry.len(),
            signable = registry.actors.iter().filter(|a| a.is_signer()).count(),
            "actor registry built"
        );

        Ok(registry)
    }

    /// Registry over every builtin actor at the given code version.
    pub fn builtin<B>(builder: &B, actors_version: u32) -> Result<Self>
    where
        B: CodeCidBuilder + ?Sized,
    {
        Self::build(builder, BuiltinActor::specs(actors_version))
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Looks up an actor by its code CID.
    pub fn get(&self, code: &Cid) -> Option<&ActorInfo> {
        self.by_code.get(code).map(|idx| &self.actors[*idx])
    }

    /// Code CID registered under a canonical name such as `fil/6/init`.
    pub fn code_cid(&self, name: &str) -> Option<&Cid> {
        self.by_name.get(name).map(|idx| self.actors[*idx].code())
    }

    /// Code CID of a builtin actor, if it was part of the input list.
    pub fn builtin_code(&self, actor: BuiltinActor) -> Option<&Cid> {
        self.by_kind.get(&actor).map(|idx| self.actors[*idx].code())
    }

    pub fn contains(&self, code: &Cid) -> bool {
        self.by_code.contains_key(code)
    }

    pub fn is_signable(&self, code: &Cid) -> bool {
        self.get(code).is_some_and(|info| info.is_signer())
    }

    /// Code CIDs of actors that may sign messages, in input order.
    pub fn caller_types_signable(&self) -> Vec<Cid> {
        self.actors
            .iter()
            .filter(|info| info.is_signer())
            .map(|info| *info.code())
            .collect()
    }

    /// Registered actors in input order.
    pub fn iter(&self) -> impl Iterator<Item = &ActorInfo> {
        self.actors.iter()
    }
}
