//! Password-KDF collaborators.
//!
//! The engine treats KDF output as an opaque artifact: whatever bytes come
//! back are folded into the field to key the trace. Soundness of the KDFs
//! themselves is outside the proof system.

use crate::error::{Error, Result};
use crate::types::Algorithm;
use argon2::password_hash::SaltString;
use argon2::{Argon2, Params, PasswordHasher, Version};

/// Which KDF to run at proving time, with its parameters.
#[derive(Debug, Clone)]
pub enum KdfSpec {
    Argon2id {
        salt: Vec<u8>,
        time_cost: u32,
        memory_kib: u32,
        hash_len: usize,
    },
    Bcrypt {
        cost: u32,
    },
    /// No KDF: the trace is keyed with zero and the artifact is the trace
    /// output itself.
    NativeMimc,
}

impl KdfSpec {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            KdfSpec::Argon2id { .. } => Algorithm::Argon2id,
            KdfSpec::Bcrypt { .. } => Algorithm::Bcrypt,
            KdfSpec::NativeMimc => Algorithm::NativeMimc,
        }
    }

    /// Runs the KDF and returns the artifact bytes, or `None` for
    /// native-mimc. Any KDF failure is fatal to the proof attempt.
    pub fn artifact(&self, password: &str) -> Result<Option<Vec<u8>>> {
        match self {
            KdfSpec::Argon2id {
                salt,
                time_cost,
                memory_kib,
                hash_len,
            } => {
                let params = Params::new(*memory_kib, *time_cost, 1, Some(*hash_len))
                    .map_err(|err| Error::Kdf(err.to_string()))?;
                let argon2 = Argon2::new(argon2::Algorithm::Argon2id, Version::V0x13, params);
                let salt =
                    SaltString::encode_b64(salt).map_err(|err| Error::Kdf(err.to_string()))?;
                let encoded = argon2
                    .hash_password(password.as_bytes(), &salt)
                    .map_err(|err| Error::Kdf(err.to_string()))?
                    .to_string();
                log::debug!("argon2id artifact: {} bytes", encoded.len());
                Ok(Some(encoded.into_bytes()))
            }
            KdfSpec::Bcrypt { cost } => {
                let encoded =
                    bcrypt::hash(password, *cost).map_err(|err| Error::Kdf(err.to_string()))?;
                log::debug!("bcrypt artifact: {} bytes", encoded.len());
                Ok(Some(encoded.into_bytes()))
            }
            KdfSpec::NativeMimc => Ok(None),
        }
    }
}
