//! Salary bracket — "my salary lies in [lower, upper]"

use super::{prove_between, verify_between};
use crate::error::Result;
use crate::zk::{Proof, ProofEngine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryBracketProof {
    pub proof: Proof,
    pub lower_bound: u64,
    pub upper_bound: u64,
    pub claim: String,
    pub created_at: DateTime<Utc>,
}

impl SalaryBracketProof {
    pub fn create(engine: &ProofEngine, salary: u64, lower_bound: u64, upper_bound: u64) -> Result<Self> {
        let proof = prove_between(engine, salary, lower_bound, upper_bound)?;
        Ok(Self {
            proof,
            lower_bound,
            upper_bound,
            claim: format!("Salary is between {} and {}", lower_bound, upper_bound),
            created_at: Utc::now(),
        })
    }

    pub fn verify(&self, engine: &ProofEngine) -> bool {
        verify_between(engine, &self.proof, self.lower_bound, self.upper_bound)
    }
}
