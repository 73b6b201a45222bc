//! zkproof — commitments and range proofs for private numeric claims
//!
//! A party commits to a secret number, then proves facts about it (a salary
//! bracket, an age threshold, a credit score floor, a minimum balance, a
//! voting weight) with a non-interactive Schnorr-style proof that reveals
//! nothing else. The engine does no I/O and no logging.

pub mod arith;
pub mod error;
pub mod zk;
pub mod apps;
pub mod config;

pub use error::{Result, ZkError};
pub use zk::{CommittedValue, Proof, ProofEngine, ProofParameters, Statement, Witness};
pub use apps::{
    AgeThresholdProof, CreditScoreProof, FundsProof, SalaryBracketProof, VotingPowerProof,
};
pub use config::{ConfigError, ParametersConfig};
