//! Voting power — "my voting weight is at least `minimum_weight`", for private
//! eligibility checks in governance

use super::{prove_between, verify_between, MAX_SAFE_INTEGER};
use crate::error::Result;
use crate::zk::{Proof, ProofEngine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotingPowerProof {
    pub proof: Proof,
    pub minimum_weight: u64,
    pub claim: String,
    pub created_at: DateTime<Utc>,
}

impl VotingPowerProof {
    pub fn create(engine: &ProofEngine, weight: u64, minimum_weight: u64) -> Result<Self> {
        let proof = prove_between(engine, weight, minimum_weight, MAX_SAFE_INTEGER)?;
        Ok(Self {
            proof,
            minimum_weight,
            claim: format!("Voting weight is at least {}", minimum_weight),
            created_at: Utc::now(),
        })
    }

    pub fn verify(&self, engine: &ProofEngine) -> bool {
        verify_between(engine, &self.proof, self.minimum_weight, MAX_SAFE_INTEGER)
    }

    pub fn satisfies(&self, engine: &ProofEngine, required: u64) -> bool {
        self.minimum_weight >= required && self.verify(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eligible_voter() {
        let engine = ProofEngine::standard();
        let package = VotingPowerProof::create(&engine, 1_500, 1_000).unwrap();
        assert!(package.verify(&engine));
        assert!(package.satisfies(&engine, 1_000));
    }

    #[test]
    fn test_ineligible_voter() {
        let engine = ProofEngine::standard();
        assert!(VotingPowerProof::create(&engine, 999, 1_000).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_verifier_with_other_parameters_rejects() {
        use crate::zk::ProofParameters;
        use num_bigint::BigUint;

        let prover = ProofEngine::standard();
        let verifier = ProofEngine::new(
            ProofParameters::new(BigUint::from(7u32), prover.params().modulus().clone()).unwrap(),
        );
        let package = VotingPowerProof::create(&prover, 1_500, 1_000).unwrap();
        assert!(!package.verify(&verifier));
    }
}
