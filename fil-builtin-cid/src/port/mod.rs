//! Port layer - Abstract interfaces for infrastructure dependencies
//!
//! The registry only needs something that turns a name into a code CID;
//! the concrete identity-multihash builder lives in `infrastructure`.

use cid::Cid;

use crate::error::Result;

/// Mints a content identifier for an arbitrary byte payload.
///
/// Implementations must be deterministic: the same payload always yields a
/// bit-identical CID.
pub trait CodeCidBuilder {
    fn build(&self, payload: &[u8]) -> Result<Cid>;
}
