//! Proof construction for the two supported claims.

use crate::crypto::merkle::MerkleTree;
use crate::crypto::mimc::{self, ROUNDS};
use crate::crypto::transcript;
use crate::error::{Error, Result};
use crate::field::FieldValue;
use crate::kdf::KdfSpec;
use crate::types::{
    HashIntegrityInputs, PreimageInputs, Proof, ProofType, PublicInputs, StarkConfig, TraceQuery,
};

/// Prover/verifier handle. Each call is a pure function of its inputs;
/// the struct only carries configuration.
pub struct PassSTARK {
    config: StarkConfig,
}

impl PassSTARK {
    pub fn new() -> Self {
        Self::with_config(StarkConfig::default())
    }

    pub fn with_config(config: StarkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StarkConfig {
        &self.config
    }

    /// Proves that a MiMC trace keyed by the KDF artifact of `password`
    /// terminates at the declared output.
    pub fn prove_hash_integrity(&self, password: &str, kdf: &KdfSpec) -> Result<Proof> {
        crate::validation::validate_config(&self.config)?;

        let artifact = kdf.artifact(password)?;
        let mimc_key = match &artifact {
            Some(bytes) => FieldValue::from_bytes(bytes),
            None => FieldValue::ZERO,
        };

        let trace = mimc::mimc_trace(FieldValue::from_bytes(password.as_bytes()), mimc_key);
        let output = trace[ROUNDS];
        let tree = MerkleTree::new(&trace)?;
        let root = tree.root();
        log::debug!("committed {} trace cells, root {root}", trace.len());

        let indices = transcript::sample_indices(
            &root,
            self.config.num_queries,
            ROUNDS,
            self.config.max_transcript_iterations,
        )?;
        log::debug!("sampled query indices {indices:?}");
        let trace_queries = build_queries(&trace, &tree, &indices)?;

        let output_artifact = match artifact {
            Some(bytes) => String::from_utf8(bytes)
                .map_err(|_| Error::Kdf("artifact is not valid UTF-8".into()))?,
            None => output.to_string(),
        };

        Ok(Proof {
            proof_type: ProofType::HashIntegrity,
            public_inputs: PublicInputs::HashIntegrity(HashIntegrityInputs {
                algorithm: kdf.algorithm(),
                output_artifact,
                mimc_output: output.to_string(),
                trace_root: root,
            }),
            trace_queries,
        })
    }

    /// Proves knowledge of a secret that the nonce-keyed MiMC permutation
    /// maps to the public output. The trace input at index 0 is never
    /// revealed.
    pub fn prove_preimage(&self, secret: &str, nonce: &str) -> Result<Proof> {
        crate::validation::validate_config(&self.config)?;

        let key = FieldValue::from_bytes(nonce.as_bytes());
        let trace = mimc::mimc_trace(FieldValue::from_bytes(secret.as_bytes()), key);
        let tree = MerkleTree::new(&trace)?;
        let root = tree.root();
        log::debug!("committed {} trace cells, root {root}", trace.len());

        let indices = transcript::sample_nonzero_indices(
            &root,
            self.config.num_queries,
            ROUNDS,
            self.config.max_transcript_iterations,
        )?;
        log::debug!("sampled query indices {indices:?}");
        let trace_queries = build_queries(&trace, &tree, &indices)?;

        Ok(Proof {
            proof_type: ProofType::KnowledgeOfPreimage,
            public_inputs: PublicInputs::Preimage(PreimageInputs {
                nonce: nonce.to_string(),
                public_output: trace[ROUNDS].to_string(),
                trace_root: root,
            }),
            trace_queries,
        })
    }

    pub fn verify(&self, proof: &Proof) -> Result<()> {
        crate::verifier::verify(proof)
    }
}

impl Default for PassSTARK {
    fn default() -> Self {
        Self::new()
    }
}

/// Opens each sampled transition step plus the boundary cell, ascending,
/// boundary last.
fn build_queries(
    trace: &[FieldValue],
    tree: &MerkleTree,
    indices: &[usize],
) -> Result<Vec<TraceQuery>> {
    let mut queries = Vec::with_capacity(indices.len() + 1);
    for &index in indices {
        queries.push(TraceQuery {
            index,
            value: trace[index].to_string(),
            path: tree.path(index)?,
            next_value: Some(trace[index + 1].to_string()),
            next_path: Some(tree.path(index + 1)?),
        });
    }
    queries.push(TraceQuery {
        index: ROUNDS,
        value: trace[ROUNDS].to_string(),
        path: tree.path(ROUNDS)?,
        next_value: None,
        next_path: None,
    });
    Ok(queries)
}
