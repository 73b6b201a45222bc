//! Proof of funds — "my balance is at least `minimum_required`"

use super::{prove_between, verify_between, MAX_SAFE_INTEGER};
use crate::error::Result;
use crate::zk::{Proof, ProofEngine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundsProof {
    pub proof: Proof,
    pub minimum_required: u64,
    pub claim: String,
    pub created_at: DateTime<Utc>,
}

impl FundsProof {
    /// Balances above `MAX_SAFE_INTEGER` are out of range.
    pub fn create(engine: &ProofEngine, balance: u64, minimum_required: u64) -> Result<Self> {
        let proof = prove_between(engine, balance, minimum_required, MAX_SAFE_INTEGER)?;
        Ok(Self {
            proof,
            minimum_required,
            claim: format!("Balance is at least {}", minimum_required),
            created_at: Utc::now(),
        })
    }

    pub fn verify(&self, engine: &ProofEngine) -> bool {
        verify_between(engine, &self.proof, self.minimum_required, MAX_SAFE_INTEGER)
    }

    pub fn satisfies(&self, engine: &ProofEngine, required: u64) -> bool {
        self.minimum_required >= required && self.verify(engine)
    }
}
