//! Application proofs — business predicates packaged as range proofs
//!
//! Each package carries its proof, the public bounds it was made against,
//! a human-readable claim and a creation timestamp. `create` fails with
//! `OutOfRange` when the real value does not satisfy the claim; `verify`
//! only ever returns a boolean.

mod salary;
mod age;
mod credit;
mod funds;
mod voting;

pub use salary::SalaryBracketProof;
pub use age::{AgeThresholdProof, SECONDS_PER_YEAR};
pub use credit::{CreditScoreProof, MAX_CREDIT_SCORE};
pub use funds::FundsProof;
pub use voting::VotingPowerProof;

use crate::error::Result;
use crate::zk::{Proof, ProofEngine};
use num_bigint::BigUint;

/// Largest integer a JavaScript number represents exactly (`2^53 - 1`);
/// the open-ended ceiling for balances and voting weights.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

fn prove_between(engine: &ProofEngine, value: u64, lower: u64, upper: u64) -> Result<Proof> {
    engine.create_range_proof(&BigUint::from(value), &BigUint::from(lower), &BigUint::from(upper))
}

fn verify_between(engine: &ProofEngine, proof: &Proof, lower: u64, upper: u64) -> bool {
    engine.verify_range_proof(proof, &BigUint::from(lower), &BigUint::from(upper))
}
