//! Range proofs — "my committed value lies in [lower, upper]"
//!
//! The bound check runs on the prover's machine before any cryptographic
//! material exists. The statement that gets proven carries only `upper` as its
//! public value; `lower` never enters the hashed transcript, so a verifier is
//! trusting the prover's own check for the lower bound. Anything
//! security-critical should treat the range as advisory.

use super::{Proof, ProofEngine, Statement, Witness};
use crate::error::{Result, ZkError};
use num_bigint::BigUint;

impl ProofEngine {
    /// Prove that `value` lies in `[lower_bound, upper_bound]`.
    ///
    /// Fails with `OutOfRange` (and produces nothing) when it does not.
    pub fn create_range_proof(
        &self,
        value: &BigUint,
        lower_bound: &BigUint,
        upper_bound: &BigUint,
    ) -> Result<Proof> {
        if value < lower_bound || value > upper_bound {
            return Err(ZkError::out_of_range(lower_bound, upper_bound));
        }

        let witness = Witness::generate(value.clone())?;
        let commitment = self.commit(&witness).to_string();
        let statement = Statement::new(upper_bound.clone(), commitment);
        self.generate_proof(&statement, &witness)
    }

    /// Verify a range proof against the bounds the verifier expects.
    ///
    /// `_lower_bound` is accepted for symmetry with `create_range_proof` but is
    /// not bound into the proof and has no effect on the result.
    pub fn verify_range_proof(
        &self,
        proof: &Proof,
        _lower_bound: &BigUint,
        upper_bound: &BigUint,
    ) -> bool {
        let statement = Statement::new(upper_bound.clone(), proof.commitment.clone());
        self.verify_proof(&statement, proof)
    }
}
