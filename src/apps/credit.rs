//! Credit score — "my score is at least `threshold`"

use super::{prove_between, verify_between};
use crate::error::Result;
use crate::zk::{Proof, ProofEngine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ceiling of the credit score scale
pub const MAX_CREDIT_SCORE: u64 = 850;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditScoreProof {
    pub proof: Proof,
    pub threshold: u64,
    pub claim: String,
    pub created_at: DateTime<Utc>,
}

impl CreditScoreProof {
    pub fn create(engine: &ProofEngine, actual_score: u64, threshold: u64) -> Result<Self> {
        let proof = prove_between(engine, actual_score, threshold, MAX_CREDIT_SCORE)?;
        Ok(Self {
            proof,
            threshold,
            claim: format!("Credit score is at least {}", threshold),
            created_at: Utc::now(),
        })
    }

    pub fn verify(&self, engine: &ProofEngine) -> bool {
        verify_between(engine, &self.proof, self.threshold, MAX_CREDIT_SCORE)
    }

    /// Valid, and proven against a threshold at least as strict as `required`
    pub fn satisfies(&self, engine: &ProofEngine, required: u64) -> bool {
        self.threshold >= required && self.verify(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_below_threshold_fails() {
        let engine = ProofEngine::standard();
        let err = CreditScoreProof::create(&engine, 650, 700).unwrap_err();
        assert!(err.is_out_of_range());
    }

    #[test]
    fn test_score_above_threshold_verifies() {
        let engine = ProofEngine::standard();
        let package = CreditScoreProof::create(&engine, 750, 700).unwrap();
        assert!(package.verify(&engine));
    }

    #[test]
    fn test_score_above_scale_rejected() {
        let engine = ProofEngine::standard();
        assert!(CreditScoreProof::create(&engine, 851, 700).is_err());
        assert!(CreditScoreProof::create(&engine, 850, 700).is_ok());
    }

    #[test]
    fn test_satisfies_required_threshold() {
        let engine = ProofEngine::standard();
        let package = CreditScoreProof::create(&engine, 750, 700).unwrap();
        assert!(package.satisfies(&engine, 650));
        assert!(package.satisfies(&engine, 700));
        assert!(!package.satisfies(&engine, 720));
    }
}
