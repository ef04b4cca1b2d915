pub mod merkle;
pub mod mimc;
pub mod transcript;

pub use merkle::{verify_path, MerkleTree, MimcCombiner, NodeCombiner, EMPTY_SIBLING};
pub use mimc::{mimc_hash, mimc_round, mimc_trace, round_constant, ROUNDS};
pub use transcript::{sample_indices, sample_nonzero_indices};
