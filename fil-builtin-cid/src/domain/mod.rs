pub mod actor;
pub mod eth_hash;

pub use actor::{ActorInfo, ActorSpec, BuiltinActor, DEFAULT_ACTORS_VERSION};
pub use eth_hash::{EthAddress, EthHash, FixedHash, ETH_ADDRESS_LENGTH, ETH_HASH_LENGTH};
