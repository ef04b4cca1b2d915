//! passstark - a didactic STARK-style proof engine over a 32-bit prime field.
//!
//! A prover convinces a verifier of one of two claims about a 64-round
//! MiMC execution trace without revealing the witness:
//!
//! - **Hash integrity**: the trace is keyed by a publicly claimed
//!   password-hash artifact (argon2id or bcrypt output) and terminates at
//!   the declared field output.
//! - **Knowledge of preimage**: the prover knows a secret that a
//!   nonce-keyed MiMC permutation maps to a public output.
//!
//! The trace is committed with an algebraic Merkle tree, query indices are
//! drawn by a Fiat-Shamir sampler seeded from the root, and the verifier
//! re-checks the per-round cube relation at each opened cell.
//!
//! This is a teaching engine, not a production proof system: the field is
//! 32 bits, five spot checks bound soundness, and un-queried trace cells
//! are hidden only behind the Merkle commitment (commitment hiding, not
//! cryptographic zero knowledge).

pub mod crypto;
pub mod error;
pub mod field;
pub mod kdf;
pub mod prover;
pub mod serialization;
pub mod types;
pub mod validation;
pub mod verifier;

pub use crypto::merkle::{verify_path, MerkleTree, MimcCombiner, NodeCombiner, EMPTY_SIBLING};
pub use crypto::mimc::{mimc_hash, mimc_round, mimc_trace, round_constant, ROUNDS};
pub use crypto::transcript::{sample_indices, sample_nonzero_indices};
pub use error::{Error, Result};
pub use field::{FieldValue, MODULUS};
pub use kdf::KdfSpec;
pub use prover::PassSTARK;
pub use serialization::{handle_verify_request, proof_from_json, proof_to_json, VerifyResponse};
pub use types::{
    Algorithm, HashIntegrityInputs, PreimageInputs, Proof, ProofType, PublicInputs, StarkConfig,
    TraceQuery, NUM_QUERIES,
};
