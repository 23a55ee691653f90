use serde::{Serialize, Serializer};
use std::fmt;

pub const ETH_ADDRESS_LENGTH: usize = 20;
pub const ETH_HASH_LENGTH: usize = 32;

/// Fixed-length big-endian byte string in the chain's native hash layout.
///
/// Shorter sources are right-aligned with zero bytes in front; see
/// [`to_fixed_hash`](crate::infrastructure::hex_codec::to_fixed_hash).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FixedHash<const N: usize>([u8; N]);

/// 32-byte transaction / block hash.
pub type EthHash = FixedHash<ETH_HASH_LENGTH>;

/// 20-byte account address.
pub type EthAddress = FixedHash<ETH_ADDRESS_LENGTH>;

impl<const N: usize> FixedHash<N> {
    pub const LEN: usize = N;

    pub const fn zero() -> Self {
        Self([0u8; N])
    }

    pub const fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    pub fn into_inner(self) -> [u8; N] {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl<const N: usize> From<[u8; N]> for FixedHash<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> AsRef<[u8]> for FixedHash<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> fmt::Display for FixedHash<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl<const N: usize> Serialize for FixedHash<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
