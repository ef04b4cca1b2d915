//! Structural proof-shape checks: the verifier's first state.

use crate::crypto::mimc::ROUNDS;
use crate::error::{Error, Result};
use crate::field::FieldValue;
use crate::types::{Proof, ProofType, PublicInputs, StarkConfig};

pub fn validate_config(config: &StarkConfig) -> Result<()> {
    if config.num_queries == 0 {
        return Err(Error::InvalidConfig("at least one query required".into()));
    }
    if config.num_queries > ROUNDS {
        return Err(Error::InvalidConfig(format!(
            "num_queries {} exceeds the transition domain {}",
            config.num_queries, ROUNDS
        )));
    }
    if config.max_transcript_iterations < config.num_queries as u64 {
        return Err(Error::InvalidConfig(
            "transcript iteration cap below query count".into(),
        ));
    }
    Ok(())
}

/// Shape and encoding checks that precede any cryptographic work: the tag
/// matches the public inputs, declared field values parse as canonical
/// decimals, every query is well-formed, and exactly one boundary query
/// exists. For knowledge proofs this is also where a revealed index 0 is
/// caught, before any path is folded.
pub fn validate_proof_shape(proof: &Proof) -> Result<()> {
    match (proof.proof_type, &proof.public_inputs) {
        (ProofType::HashIntegrity, PublicInputs::HashIntegrity(inputs)) => {
            if inputs.output_artifact.is_empty() {
                return Err(Error::InvalidProofShape("empty output_artifact".into()));
            }
        }
        (ProofType::KnowledgeOfPreimage, PublicInputs::Preimage(_)) => {}
        _ => {
            return Err(Error::InvalidProofShape(
                "public inputs do not match proof type".into(),
            ));
        }
    }

    proof.public_inputs.trace_root().parse::<FieldValue>()?;
    proof.public_inputs.declared_output().parse::<FieldValue>()?;

    if proof.trace_queries.is_empty() {
        return Err(Error::InvalidProofShape("no trace queries".into()));
    }

    let mut boundary_queries = 0usize;
    for query in &proof.trace_queries {
        if query.index > ROUNDS {
            return Err(Error::InvalidProofShape(format!(
                "query index {} out of range",
                query.index
            )));
        }

        if proof.proof_type == ProofType::KnowledgeOfPreimage && query.index == 0 {
            return Err(Error::WitnessLeak);
        }

        query.value.parse::<FieldValue>()?;

        if query.index == ROUNDS {
            boundary_queries += 1;
            if query.next_value.is_some() || query.next_path.is_some() {
                return Err(Error::InvalidProofShape(
                    "boundary query carries next-fields".into(),
                ));
            }
        } else {
            let next_value = query.next_value.as_deref().ok_or_else(|| {
                Error::InvalidProofShape(format!("query {} missing next_value", query.index))
            })?;
            next_value.parse::<FieldValue>()?;
            if query.next_path.is_none() {
                return Err(Error::InvalidProofShape(format!(
                    "query {} missing next_path",
                    query.index
                )));
            }
        }
    }

    match boundary_queries {
        0 => Err(Error::InvalidProofShape("missing boundary query".into())),
        1 => Ok(()),
        _ => Err(Error::InvalidProofShape("duplicate boundary query".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PreimageInputs, TraceQuery};

    fn boundary_query() -> TraceQuery {
        TraceQuery {
            index: ROUNDS,
            value: "7".to_string(),
            path: vec![],
            next_value: None,
            next_path: None,
        }
    }

    fn transition_query(index: usize) -> TraceQuery {
        TraceQuery {
            index,
            value: "1".to_string(),
            path: vec![],
            next_value: Some("2".to_string()),
            next_path: Some(vec![]),
        }
    }

    fn preimage_proof(queries: Vec<TraceQuery>) -> Proof {
        Proof {
            proof_type: ProofType::KnowledgeOfPreimage,
            public_inputs: PublicInputs::Preimage(PreimageInputs {
                nonce: "n".to_string(),
                public_output: "7".to_string(),
                trace_root: "9".to_string(),
            }),
            trace_queries: queries,
        }
    }

    #[test]
    fn test_accepts_well_formed_proof() {
        let proof = preimage_proof(vec![transition_query(3), boundary_query()]);
        assert!(validate_proof_shape(&proof).is_ok());
    }

    #[test]
    fn test_rejects_missing_boundary() {
        let proof = preimage_proof(vec![transition_query(3)]);
        assert!(matches!(
            validate_proof_shape(&proof),
            Err(Error::InvalidProofShape(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_boundary() {
        let proof = preimage_proof(vec![boundary_query(), boundary_query()]);
        assert!(matches!(
            validate_proof_shape(&proof),
            Err(Error::InvalidProofShape(_))
        ));
    }

    #[test]
    fn test_rejects_boundary_with_next_fields() {
        let mut query = boundary_query();
        query.next_value = Some("1".to_string());
        let proof = preimage_proof(vec![query]);
        assert!(matches!(
            validate_proof_shape(&proof),
            Err(Error::InvalidProofShape(_))
        ));
    }

    #[test]
    fn test_rejects_transition_without_next_fields() {
        let mut query = transition_query(5);
        query.next_value = None;
        let proof = preimage_proof(vec![query, boundary_query()]);
        assert!(matches!(
            validate_proof_shape(&proof),
            Err(Error::InvalidProofShape(_))
        ));
    }

    #[test]
    fn test_knowledge_proof_index_zero_is_a_leak() {
        let proof = preimage_proof(vec![transition_query(0), boundary_query()]);
        assert!(matches!(
            validate_proof_shape(&proof),
            Err(Error::WitnessLeak)
        ));
    }

    #[test]
    fn test_rejects_out_of_range_index() {
        let proof = preimage_proof(vec![transition_query(ROUNDS + 1), boundary_query()]);
        assert!(matches!(
            validate_proof_shape(&proof),
            Err(Error::InvalidProofShape(_))
        ));
    }

    #[test]
    fn test_rejects_non_canonical_value() {
        let mut query = transition_query(3);
        query.value = "0x10".to_string();
        let proof = preimage_proof(vec![query, boundary_query()]);
        assert!(matches!(
            validate_proof_shape(&proof),
            Err(Error::EncodingMismatch(_))
        ));
    }

    #[test]
    fn test_config_guardrails() {
        assert!(validate_config(&StarkConfig::default()).is_ok());

        let zero = StarkConfig {
            num_queries: 0,
            ..StarkConfig::default()
        };
        assert!(matches!(
            validate_config(&zero),
            Err(Error::InvalidConfig(_))
        ));

        let oversized = StarkConfig {
            num_queries: ROUNDS + 1,
            ..StarkConfig::default()
        };
        assert!(matches!(
            validate_config(&oversized),
            Err(Error::InvalidConfig(_))
        ));

        let starved = StarkConfig {
            num_queries: 5,
            max_transcript_iterations: 2,
        };
        assert!(matches!(
            validate_config(&starved),
            Err(Error::InvalidConfig(_))
        ));
    }
}
