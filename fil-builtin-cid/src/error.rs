//! Error types shared by the codec, builder, bridge and registry layers.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Hex text contained a character outside `[0-9a-fA-F]`.
    #[error("cannot parse hash {input:?}: {source}")]
    InvalidHex {
        input: String,
        #[source]
        source: hex::FromHexError,
    },

    /// Serialized multihash is too short to hold the header skipped by the bridge.
    #[error("multihash {hex:?} is shorter than its {header_chars}-character header")]
    TruncatedMultihash { hex: String, header_chars: usize },

    #[error("length of decoded bytes is longer than {max} (got {actual})")]
    Length { max: usize, actual: usize },

    #[error("cannot build identity multihash over {len} bytes: {source}")]
    Construction {
        len: usize,
        #[source]
        source: multihash::Error,
    },

    #[error("actor {name:?} collides with an already registered code CID")]
    DuplicateCode { name: String },

    #[error("actor name must not be empty")]
    EmptyActorName,

    #[error("cannot decode CID {input:?}: {source}")]
    Decode {
        input: String,
        #[source]
        source: cid::Error,
    },

    #[error("unknown hash function: {0}")]
    UnknownHashFunction(String),

    #[error("unknown codec: {0}")]
    UnknownCodec(String),
}

impl Error {
    /// True for errors raised while minting identifiers or building a registry.
    ///
    /// These are startup failures; the composition root is expected to abort.
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            Error::Construction { .. } | Error::DuplicateCode { .. } | Error::EmptyActorName
        )
    }
}
