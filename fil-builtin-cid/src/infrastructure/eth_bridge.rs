//! Conversion between CIDs and 32-byte chain hashes.
//!
//! `eth_hash_from_cid` skips a fixed 4-byte multihash header (8 hex
//! characters). That width matches `blake2b-256` (3-byte varint code + 1-byte
//! length), which is what chain transaction and block CIDs use. Hash functions
//! with a different header width produce a hash that still includes, or is
//! missing, header bytes; a warning is logged in that case but the result is
//! returned unchanged for compatibility with existing consumers.

use cid::Cid;
use multihash::Multihash;

use super::hex_codec::{parse_hex, to_fixed_hash};
use super::multicodec::{Codec, HashFunction};
use crate::domain::eth_hash::{EthHash, ETH_HASH_LENGTH};
use crate::error::{Error, Result};

/// Hex characters of multihash header dropped by [`eth_hash_from_cid`].
pub const MULTIHASH_HEADER_HEX_CHARS: usize = 8;

/// Parses canonical CID text (any multibase the cid crate understands).
pub fn decode_cid(text: &str) -> Result<Cid> {
    Cid::try_from(text).map_err(|source| Error::Decode {
        input: text.to_string(),
        source,
    })
}

/// Lower-hex rendering of the CID's multihash: varint code, varint length, digest.
pub fn multihash_hex(cid: &Cid) -> String {
    hex::encode(cid.hash().to_bytes())
}

/// Extracts the chain hash from a CID's multihash.
pub fn eth_hash_from_cid(cid: &Cid) -> Result<EthHash> {
    let mh = cid.hash();
    let header_len = mh.to_bytes().len() - mh.digest().len();
    if header_len * 2 != MULTIHASH_HEADER_HEX_CHARS {
        tracing::warn!(
            cid = %cid,
            code = mh.code(),
            header_len,
            "multihash header is not 4 bytes wide, extracted hash will not match the digest"
        );
    }

    let hex = multihash_hex(cid);
    let tail = hex
        .get(MULTIHASH_HEADER_HEX_CHARS..)
        .ok_or_else(|| Error::TruncatedMultihash {
            hex: hex.clone(),
            header_chars: MULTIHASH_HEADER_HEX_CHARS,
        })?;

    let bytes = parse_hex(tail, ETH_HASH_LENGTH)?;
    to_fixed_hash(&bytes)
}

/// Wraps a chain hash as a CIDv1, the reverse of [`eth_hash_from_cid`] for
/// 4-byte-header hash functions.
pub fn cid_from_eth_hash(hash: &EthHash, function: HashFunction, codec: Codec) -> Result<Cid> {
    let mh = Multihash::<64>::wrap(function.code(), hash.as_bytes()).map_err(|source| {
        Error::Construction {
            len: ETH_HASH_LENGTH,
            source,
        }
    })?;
    Ok(Cid::new_v1(codec.code(), mh))
}
