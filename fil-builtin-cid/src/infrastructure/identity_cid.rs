use cid::{Cid, Version};
use multihash::Multihash;

use super::multicodec::{Codec, HashFunction};
use crate::error::{Error, Result};
use crate::port::CodeCidBuilder;

/// CIDv1 / raw / identity-multihash builder.
///
/// The digest is the payload itself, so the payload is recoverable from the
/// CID and distinct payloads get distinct CIDs. Payloads longer than the
/// 64-byte multihash capacity are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityCidBuilder;

impl IdentityCidBuilder {
    pub const CODEC: Codec = Codec::Raw;
    pub const HASH: HashFunction = HashFunction::Identity;

    pub fn new() -> Self {
        Self
    }
}

impl CodeCidBuilder for IdentityCidBuilder {
    fn build(&self, payload: &[u8]) -> Result<Cid> {
        let mh = Multihash::<64>::wrap(Self::HASH.code(), payload).map_err(|source| {
            Error::Construction {
                len: payload.len(),
                source,
            }
        })?;
        Ok(Cid::new_v1(Self::CODEC.code(), mh))
    }
}

/// Returns the embedded payload when `cid` is a CIDv1 over an identity multihash.
pub fn identity_payload(cid: &Cid) -> Option<&[u8]> {
    if cid.version() == Version::V1 && cid.hash().code() == HashFunction::Identity.code() {
        Some(cid.hash().digest())
    } else {
        None
    }
}
