//! Commitment — bind a secret value to a single group element
//!
//! `commitment = G^secret * G^randomness mod P`
//!
//! NOTE: this is NOT a textbook Pedersen commitment. Both factors use the same
//! generator `G`, so the commitment equals `G^(secret + randomness)` and binds
//! only the sum of the two exponents. A Pedersen commitment would use an
//! independent second generator `H` for the blinding term. Deployed verifiers
//! depend on the single-generator form; changing it invalidates every proof.

use super::ProofEngine;
use crate::arith::{mod_pow, random_exponent};
use crate::error::Result;
use num_bigint::BigUint;
use std::fmt;

/// Private opening of a commitment. Owned by the prover and never serialized.
#[derive(Clone, PartialEq, Eq)]
pub struct Witness {
    pub secret_value: BigUint,
    pub randomness: BigUint,
}

impl Witness {
    pub fn new(secret_value: BigUint, randomness: BigUint) -> Self {
        Self {
            secret_value,
            randomness,
        }
    }

    /// Witness for `secret_value` with fresh 256-bit randomness
    pub fn generate(secret_value: BigUint) -> Result<Self> {
        Ok(Self::new(secret_value, random_exponent()?))
    }
}

impl fmt::Debug for Witness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Witness")
            .field("secret_value", &"<redacted>")
            .field("randomness", &"<redacted>")
            .finish()
    }
}

/// A freshly created commitment together with its opening
#[derive(Debug, Clone)]
pub struct CommittedValue {
    /// Decimal encoding of the group element; safe to publish
    pub commitment: String,
    /// Keep private
    pub witness: Witness,
}

impl ProofEngine {
    /// Commit to `secret_value` under fresh randomness
    pub fn create_commitment(&self, secret_value: &BigUint) -> Result<CommittedValue> {
        let witness = Witness::generate(secret_value.clone())?;
        let commitment = self.commit(&witness).to_string();
        Ok(CommittedValue {
            commitment,
            witness,
        })
    }

    /// Recompute the commitment group element for a known witness
    pub fn commit(&self, witness: &Witness) -> BigUint {
        let params = self.params();
        let (g, p) = (params.generator(), params.modulus());
        let value_term = mod_pow(g, &witness.secret_value, p);
        let blinding_term = mod_pow(g, &witness.randomness, p);
        (value_term * blinding_term) % p
    }

    /// Check that `witness` opens `commitment`
    pub fn open(&self, commitment: &str, witness: &Witness) -> bool {
        self.commit(witness).to_string() == commitment
    }
}
