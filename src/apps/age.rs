//! Age threshold — prove a birth timestamp falls in `[now - minimumAge years, now]`
//! without revealing the birth date.
//!
//! Timestamps are unix seconds. Years are fixed at 365 days.

use super::{prove_between, verify_between};
use crate::error::Result;
use crate::zk::{Proof, ProofEngine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SECONDS_PER_YEAR: u64 = 365 * 24 * 3600;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeThresholdProof {
    pub proof: Proof,
    pub minimum_age: u64,
    pub minimum_birth_timestamp: u64,
    pub current_timestamp: u64,
    pub claim: String,
    pub created_at: DateTime<Utc>,
}

impl AgeThresholdProof {
    /// Prove against the current wall-clock time
    pub fn create(engine: &ProofEngine, birth_timestamp: u64, minimum_age: u64) -> Result<Self> {
        let now = Utc::now();
        let current = u64::try_from(now.timestamp()).unwrap_or(0);
        Self::create_at(engine, birth_timestamp, minimum_age, current)
    }

    /// Prove against an explicit `now` (unix seconds).
    /// The minimum birth timestamp saturates at the epoch.
    pub fn create_at(
        engine: &ProofEngine,
        birth_timestamp: u64,
        minimum_age: u64,
        now: u64,
    ) -> Result<Self> {
        let minimum_birth_timestamp = now.saturating_sub(minimum_age.saturating_mul(SECONDS_PER_YEAR));
        let proof = prove_between(engine, birth_timestamp, minimum_birth_timestamp, now)?;
        Ok(Self {
            proof,
            minimum_age,
            minimum_birth_timestamp,
            current_timestamp: now,
            claim: format!("Birth timestamp satisfies the {}-year age threshold", minimum_age),
            created_at: Utc::now(),
        })
    }

    pub fn verify(&self, engine: &ProofEngine) -> bool {
        verify_between(
            engine,
            &self.proof,
            self.minimum_birth_timestamp,
            self.current_timestamp,
        )
    }
}
