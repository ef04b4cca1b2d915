use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid proof shape: {0}")]
    InvalidProofShape(String),

    #[error("unknown proof type: {0}")]
    UnknownProofType(String),

    #[error("encoding mismatch: {0}")]
    EncodingMismatch(String),

    #[error("authentication path does not match the trace root at index {0}")]
    MerkleMismatch(usize),

    #[error("trace end does not match the declared output")]
    BoundaryMismatch,

    #[error("transition constraint failed at index {0}")]
    TransitionMismatch(usize),

    #[error("knowledge proof reveals the trace input")]
    WitnessLeak,

    #[error("transcript sampler exceeded its iteration cap")]
    TranscriptStuck,

    #[error("field arithmetic error: {0}")]
    InvalidField(String),

    #[error("merkle tree error: {0}")]
    Merkle(String),

    #[error("kdf error: {0}")]
    Kdf(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
