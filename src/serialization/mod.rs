//! JSON wire format for proofs, and the verify endpoint's response shape.
//!
//! All field values cross the wire as canonical decimal strings. The HTTP
//! layer itself lives outside this crate; `handle_verify_request` is the
//! pure function it calls, and the only place human-facing strings are
//! attached.

use crate::error::{Error, Result};
use crate::prover::PassSTARK;
use crate::types::Proof;
use serde::{Deserialize, Serialize};

const PROOF_TYPE_TAGS: [&str; 2] = ["hash-integrity", "knowledge-of-preimage"];

pub fn proof_to_json(proof: &Proof) -> Result<String> {
    serde_json::to_string(proof).map_err(|err| Error::InvalidProofShape(err.to_string()))
}

/// Parses a proof, distinguishing an unknown `proof_type` tag from every
/// other malformation.
pub fn proof_from_json(json: &str) -> Result<Proof> {
    let value: serde_json::Value = serde_json::from_str(json)
        .map_err(|err| Error::InvalidProofShape(format!("malformed JSON: {err}")))?;

    let tag = value
        .get("proof_type")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| Error::InvalidProofShape("missing proof_type".into()))?;
    if !PROOF_TYPE_TAGS.contains(&tag) {
        return Err(Error::UnknownProofType(tag.to_string()));
    }

    serde_json::from_value(value).map_err(|err| Error::InvalidProofShape(err.to_string()))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Parse-then-verify entry point for the external verify endpoint.
pub fn handle_verify_request(body: &str) -> VerifyResponse {
    let outcome = proof_from_json(body).and_then(|proof| PassSTARK::new().verify(&proof));
    match outcome {
        Ok(()) => VerifyResponse {
            success: true,
            message: Some("proof verified".into()),
            error: None,
        },
        Err(err) => {
            log::debug!("verification rejected: {err}");
            VerifyResponse {
                success: false,
                message: None,
                error: Some(err.to_string()),
            }
        }
    }
}
