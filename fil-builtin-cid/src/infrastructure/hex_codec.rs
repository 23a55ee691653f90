//! Hex text <-> byte codec used for chain hashes and addresses.

use std::str::FromStr;

use crate::domain::eth_hash::FixedHash;
use crate::error::{Error, Result};

/// Strips an optional `0x`/`0X` prefix and left-pads odd-length input with one `0` nibble.
///
/// The padding changes the value: `"abc"` is read as `0x0abc`, not `0xabc0`.
pub fn normalize_hex(input: &str) -> String {
    let body = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);

    if body.len() % 2 == 1 {
        format!("0{body}")
    } else {
        body.to_string()
    }
}

/// Decodes hex text into at most `max_len` bytes.
///
/// No padding or truncation happens here; longer input is rejected.
pub fn parse_hex(input: &str, max_len: usize) -> Result<Vec<u8>> {
    let normalized = normalize_hex(input);
    let bytes = hex::decode(&normalized).map_err(|source| Error::InvalidHex {
        input: input.to_string(),
        source,
    })?;

    if bytes.len() > max_len {
        return Err(Error::Length {
            max: max_len,
            actual: bytes.len(),
        });
    }

    Ok(bytes)
}

/// Right-aligns `bytes` into an `N`-byte array, zero-filling the leading positions.
pub fn to_fixed_hash<const N: usize>(bytes: &[u8]) -> Result<FixedHash<N>> {
    if bytes.len() > N {
        return Err(Error::Length {
            max: N,
            actual: bytes.len(),
        });
    }

    let mut out = [0u8; N];
    out[N - bytes.len()..].copy_from_slice(bytes);
    Ok(FixedHash::new(out))
}

impl<const N: usize> FromStr for FixedHash<N> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = parse_hex(s, N)?;
        to_fixed_hash(&bytes)
    }
}
