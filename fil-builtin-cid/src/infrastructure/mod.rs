pub mod config;
pub mod eth_bridge;
pub mod hex_codec;
pub mod identity_cid;
pub mod multicodec;

pub use config::{ConfigError, RegistryConfig};
pub use eth_bridge::{cid_from_eth_hash, decode_cid, eth_hash_from_cid, multihash_hex};
pub use hex_codec::{normalize_hex, parse_hex, to_fixed_hash};
pub use identity_cid::{identity_payload, IdentityCidBuilder};
pub use multicodec::{Codec, HashFunction};
