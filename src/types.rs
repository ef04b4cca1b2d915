use serde::{Deserialize, Serialize};

/// Number of spot-check queries fixed by the system.
pub const NUM_QUERIES: usize = 5;

/// Iteration budget for the Fiat-Shamir sampler.
pub const DEFAULT_MAX_TRANSCRIPT_ITERATIONS: u64 = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProofType {
    #[serde(rename = "hash-integrity")]
    HashIntegrity,
    #[serde(rename = "knowledge-of-preimage")]
    KnowledgeOfPreimage,
}

/// Closed set of supported KDF tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "argon2id")]
    Argon2id,
    #[serde(rename = "bcrypt")]
    Bcrypt,
    #[serde(rename = "native-mimc")]
    NativeMimc,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Argon2id => "argon2id",
            Algorithm::Bcrypt => "bcrypt",
            Algorithm::NativeMimc => "native-mimc",
        }
    }
}

/// One opened trace cell. The next-fields are present exactly when
/// `index` addresses a transition step, i.e. index < ROUNDS; the single
/// boundary query at index = ROUNDS carries neither.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceQuery {
    pub index: usize,
    pub value: String,
    pub path: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_path: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashIntegrityInputs {
    pub algorithm: Algorithm,
    /// Opaque KDF artifact; equals `mimc_output` in native-mimc mode.
    pub output_artifact: String,
    pub mimc_output: String,
    pub trace_root: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreimageInputs {
    pub nonce: String,
    pub public_output: String,
    pub trace_root: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PublicInputs {
    HashIntegrity(HashIntegrityInputs),
    Preimage(PreimageInputs),
}

impl PublicInputs {
    pub fn trace_root(&self) -> &str {
        match self {
            PublicInputs::HashIntegrity(inputs) => &inputs.trace_root,
            PublicInputs::Preimage(inputs) => &inputs.trace_root,
        }
    }

    /// The declared final trace value, as serialized.
    pub fn declared_output(&self) -> &str {
        match self {
            PublicInputs::HashIntegrity(inputs) => &inputs.mimc_output,
            PublicInputs::Preimage(inputs) => &inputs.public_output,
        }
    }
}

/// A complete proof object: what crosses the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proof {
    pub proof_type: ProofType,
    pub public_inputs: PublicInputs,
    pub trace_queries: Vec<TraceQuery>,
}

#[derive(Debug, Clone, Copy)]
pub struct StarkConfig {
    pub num_queries: usize,
    pub max_transcript_iterations: u64,
}

impl Default for StarkConfig {
    fn default() -> Self {
        Self {
            num_queries: NUM_QUERIES,
            max_transcript_iterations: DEFAULT_MAX_TRANSCRIPT_ITERATIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip() {
        let json = serde_json::to_string(&ProofType::KnowledgeOfPreimage).unwrap();
        assert_eq!(json, "\"knowledge-of-preimage\"");
        let back: ProofType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProofType::KnowledgeOfPreimage);

        assert_eq!(
            serde_json::to_string(&Algorithm::NativeMimc).unwrap(),
            "\"native-mimc\""
        );
        assert_eq!(Algorithm::Bcrypt.as_str(), "bcrypt");
    }

    #[test]
    fn test_boundary_query_omits_next_fields() {
        let query = TraceQuery {
            index: 64,
            value: "7".to_string(),
            path: vec![],
            next_value: None,
            next_path: None,
        };
        let json = serde_json::to_string(&query).unwrap();
        assert!(!json.contains("next_value"));
        assert!(!json.contains("next_path"));
    }

    #[test]
    fn test_public_inputs_untagged_dispatch() {
        let hash: PublicInputs = serde_json::from_str(
            r#"{"algorithm":"argon2id","output_artifact":"x","mimc_output":"1","trace_root":"2"}"#,
        )
        .unwrap();
        assert!(matches!(hash, PublicInputs::HashIntegrity(_)));

        let preimage: PublicInputs = serde_json::from_str(
            r#"{"nonce":"n","public_output":"1","trace_root":"2"}"#,
        )
        .unwrap();
        assert!(matches!(preimage, PublicInputs::Preimage(_)));
        assert_eq!(preimage.trace_root(), "2");
        assert_eq!(preimage.declared_output(), "1");
    }
}
