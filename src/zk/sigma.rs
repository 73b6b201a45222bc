//! Sigma protocol — non-interactive proof of knowledge of a commitment opening
//!
//! Three moves, with the verifier's random challenge replaced by a hash of
//! the transcript (Fiat-Shamir):
//! 1. **Commit**: prover samples `blinding` and publishes `t = G^blinding`
//! 2. **Challenge**: `c = SHA256(publicValue || commitment || t)`
//! 3. **Response**: `z = blinding + c * x mod (P - 1)`, with `G^x = commitment`
//!
//! The verifier recovers `t' = G^z * commitment^(-c)` and accepts iff hashing
//! the statement with `t'` reproduces `c`. Only `t` is ever derived from the
//! blinding, so the proof reveals nothing about `x`.

use super::encoding::{decimal, parse_decimal};
use super::{ProofEngine, Witness};
use crate::arith::{mod_inverse, mod_pow, random_exponent};
use crate::error::{Result, ZkError};
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Length of a hex-encoded SHA-256 challenge
const CHALLENGE_HEX_LEN: usize = 64;

/// The public claim a proof is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statement {
    #[serde(with = "decimal")]
    pub public_value: BigUint,
    /// Decimal encoding of the committed group element
    pub commitment: String,
}

impl Statement {
    pub fn new(public_value: BigUint, commitment: impl Into<String>) -> Self {
        Self {
            public_value,
            commitment: commitment.into(),
        }
    }
}

/// A non-interactive proof. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proof {
    /// Lowercase hex SHA-256 digest
    pub challenge: String,
    /// In `[0, P - 2]`
    #[serde(with = "decimal")]
    pub response: BigUint,
    pub commitment: String,
}

impl ProofEngine {
    /// Prove knowledge of the opening of `statement.commitment`.
    ///
    /// Fails with `InvalidCommitment` if `witness` does not reproduce the
    /// statement's commitment; that is a caller bug, not a proof failure.
    pub fn generate_proof(&self, statement: &Statement, witness: &Witness) -> Result<Proof> {
        if !self.open(&statement.commitment, witness) {
            return Err(ZkError::InvalidCommitment);
        }

        let params = self.params();
        let (g, p, order) = (params.generator(), params.modulus(), params.group_order());

        let blinding = random_exponent()?;
        let temp_commitment = mod_pow(g, &blinding, p);

        let digest = challenge_digest(&statement.public_value, &statement.commitment, &temp_commitment);
        let challenge = BigUint::from_bytes_be(&digest);

        // The commitment is G^(secret + randomness), so that sum is the
        // discrete log the response has to be built from.
        let exponent = (&witness.secret_value + &witness.randomness) % order;
        let response = (blinding + challenge * exponent) % order;

        Ok(Proof {
            challenge: hex::encode(digest),
            response,
            commitment: statement.commitment.clone(),
        })
    }

    /// Check `proof` against `statement`. Malformed or mismatched proofs are
    /// rejected with `false`; this never errors or panics on untrusted input.
    pub fn verify_proof(&self, statement: &Statement, proof: &Proof) -> bool {
        if proof.commitment != statement.commitment {
            return false;
        }

        let params = self.params();
        let (g, p, order) = (params.generator(), params.modulus(), params.group_order());

        if proof.commitment.len() > params.element_digits() {
            return false;
        }
        let Some(commitment) = parse_decimal(&proof.commitment) else {
            return false;
        };
        if commitment.is_zero() || &commitment >= p {
            return false;
        }
        let Some(challenge) = parse_challenge(&proof.challenge) else {
            return false;
        };
        if &proof.response >= order {
            return false;
        }

        let left_side = mod_pow(g, &proof.response, p);
        let right_side = mod_pow(&commitment, &challenge, p);
        let Some(right_inverse) = mod_inverse(&right_side, p) else {
            return false;
        };
        let temp_commitment = (left_side * right_inverse) % p;

        let expected = challenge_digest(&statement.public_value, &statement.commitment, &temp_commitment);
        hex::encode(expected) == proof.challenge
    }
}

/// `SHA256(dec(public_value) || commitment || dec(temp_commitment))`
fn challenge_digest(public_value: &BigUint, commitment: &str, temp_commitment: &BigUint) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(public_value.to_str_radix(10).as_bytes());
    hasher.update(commitment.as_bytes());
    hasher.update(temp_commitment.to_str_radix(10).as_bytes());
    hasher.finalize().into()
}

fn parse_challenge(challenge: &str) -> Option<BigUint> {
    if challenge.len() != CHALLENGE_HEX_LEN {
        return None;
    }
    let bytes = hex::decode(challenge).ok()?;
    Some(BigUint::from_bytes_be(&bytes))
}
