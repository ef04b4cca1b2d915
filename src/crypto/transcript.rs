//! Fiat-Shamir index sampler.
//!
//! Challenges are derived from the committed trace root alone: the root's
//! canonical decimal parses to the seed, and successive counter values key
//! the MiMC hash. The result depends on nothing but (root, n, domain).

use crate::crypto::mimc::mimc_hash;
use crate::error::{Error, Result};
use crate::field::FieldValue;
use std::collections::BTreeSet;

/// Derives `count` distinct indices in [0, domain), sorted ascending.
pub fn sample_indices(
    root: &str,
    count: usize,
    domain: usize,
    max_iterations: u64,
) -> Result<Vec<usize>> {
    sample(root, count, domain, max_iterations, false)
}

/// Knowledge-of-preimage variant: index 0 is never emitted. Draws that
/// land on 0 are discarded and the counter stream continues.
pub fn sample_nonzero_indices(
    root: &str,
    count: usize,
    domain: usize,
    max_iterations: u64,
) -> Result<Vec<usize>> {
    sample(root, count, domain, max_iterations, true)
}

fn sample(
    root: &str,
    count: usize,
    domain: usize,
    max_iterations: u64,
    exclude_zero: bool,
) -> Result<Vec<usize>> {
    if domain == 0 {
        return Err(Error::TranscriptStuck);
    }

    let seed: FieldValue = root.parse()?;
    let mut indices = BTreeSet::new();
    let mut counter = 0u64;

    while indices.len() < count {
        if counter >= max_iterations {
            log::warn!("transcript starved after {counter} iterations");
            return Err(Error::TranscriptStuck);
        }
        let draw = mimc_hash(seed, FieldValue::new(counter));
        counter += 1;
        let index = (draw.as_u64() % domain as u64) as usize;
        if exclude_zero && index == 0 {
            continue;
        }
        indices.insert(index);
    }

    Ok(indices.into_iter().collect())
}
