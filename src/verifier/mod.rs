//! Constraint-checking verifier.
//!
//! The check sequence is a straight-line state machine:
//! structural -> key derivation -> per-query checks -> accept. The first
//! failing check is terminal; nothing is retried and there is no partial
//! acceptance. Queries are checked in proof order but any order would
//! produce the same verdict.

use crate::crypto::merkle::{verify_path, MimcCombiner};
use crate::crypto::mimc::{self, ROUNDS};
use crate::error::{Error, Result};
use crate::field::FieldValue;
use crate::types::{Algorithm, Proof, PublicInputs, TraceQuery};
use crate::validation;

pub fn verify(proof: &Proof) -> Result<()> {
    validation::validate_proof_shape(proof)?;

    let mimc_key = derive_key(proof)?;
    let declared_output: FieldValue = proof.public_inputs.declared_output().parse()?;
    let root = proof.public_inputs.trace_root();

    for query in &proof.trace_queries {
        check_query(root, query, mimc_key, declared_output)?;
    }

    log::debug!("proof accepted: {} trace queries", proof.trace_queries.len());
    Ok(())
}

/// Recovers the trace key from the public inputs. In native-mimc mode the
/// artifact must restate the declared output exactly; a disagreement is a
/// boundary mismatch between the two public copies of the same value.
fn derive_key(proof: &Proof) -> Result<FieldValue> {
    match &proof.public_inputs {
        PublicInputs::HashIntegrity(inputs) => match inputs.algorithm {
            Algorithm::NativeMimc => {
                if inputs.output_artifact != inputs.mimc_output {
                    return Err(Error::BoundaryMismatch);
                }
                Ok(FieldValue::ZERO)
            }
            Algorithm::Argon2id | Algorithm::Bcrypt => {
                Ok(FieldValue::from_bytes(inputs.output_artifact.as_bytes()))
            }
        },
        PublicInputs::Preimage(inputs) => Ok(FieldValue::from_bytes(inputs.nonce.as_bytes())),
    }
}

fn check_query(
    root: &str,
    query: &TraceQuery,
    key: FieldValue,
    declared_output: FieldValue,
) -> Result<()> {
    if !verify_path(&MimcCombiner, root, query.index, &query.value, &query.path)? {
        return Err(Error::MerkleMismatch(query.index));
    }
    let value: FieldValue = query.value.parse()?;

    if query.index == ROUNDS {
        if value != declared_output {
            return Err(Error::BoundaryMismatch);
        }
        return Ok(());
    }

    // Shape validation guarantees the next-fields below the boundary.
    let next_value_str = query
        .next_value
        .as_deref()
        .ok_or_else(|| Error::InvalidProofShape("missing next_value".into()))?;
    let next_path = query
        .next_path
        .as_deref()
        .ok_or_else(|| Error::InvalidProofShape("missing next_path".into()))?;
    let next_value: FieldValue = next_value_str.parse()?;

    if mimc::mimc_round(value, key, query.index) != next_value {
        return Err(Error::TransitionMismatch(query.index));
    }
    if !verify_path(&MimcCombiner, root, query.index + 1, next_value_str, next_path)? {
        return Err(Error::MerkleMismatch(query.index + 1));
    }

    Ok(())
}
