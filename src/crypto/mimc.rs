//! Fixed-round MiMC permutation over F_p.
//!
//! Two conventions live here and must stay distinct: `mimc_trace` is the
//! raw round sequence (t_0 .. t_R) with no closing key add, which is what
//! the AIR constrains; `mimc_hash` folds the key in once more at the end
//! and is the PRF used by the Merkle combiner and the transcript sampler.

use crate::field::FieldValue;

/// Number of MiMC rounds; the trace has ROUNDS + 1 entries.
pub const ROUNDS: usize = 64;

const ROUND_CONSTANT_STEP: u64 = 123_456_789;

/// c_i = i * 123456789, reduced mod p.
pub fn round_constant(round: usize) -> FieldValue {
    FieldValue::new(round as u64 * ROUND_CONSTANT_STEP)
}

/// One transition: ((t + key + c_round) mod p)^3 mod p.
pub fn mimc_round(state: FieldValue, key: FieldValue, round: usize) -> FieldValue {
    let t = state + key + round_constant(round);
    t * t * t
}

/// Runs all rounds from t_0 = input and returns the full trace.
pub fn mimc_trace(input: FieldValue, key: FieldValue) -> Vec<FieldValue> {
    let mut trace = Vec::with_capacity(ROUNDS + 1);
    trace.push(input);
    for round in 0..ROUNDS {
        trace.push(mimc_round(trace[round], key, round));
    }
    trace
}

/// The hash primitive: full trace plus the closing key add.
pub fn mimc_hash(input: FieldValue, key: FieldValue) -> FieldValue {
    let trace = mimc_trace(input, key);
    trace[ROUNDS] + key
}
