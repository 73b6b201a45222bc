//! Error types for proof generation and parameter handling
//!
//! Verification never returns an error: a rejected proof is a plain `false`.

use num_bigint::BigUint;
use thiserror::Error;

/// Result type for prover-side operations
pub type Result<T> = std::result::Result<T, ZkError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZkError {
    /// The secret value violates the declared bound. Carries only the bounds,
    /// never the secret.
    #[error("Secret value outside declared range [{lower}, {upper}]")]
    OutOfRange { lower: BigUint, upper: BigUint },

    /// The witness does not reproduce the statement's commitment
    #[error("Witness does not open the statement commitment")]
    InvalidCommitment,

    #[error("Invalid group parameters: {0}")]
    InvalidParameters(String),

    #[error("Secure randomness unavailable: {0}")]
    RandomnessUnavailable(String),
}

impl ZkError {
    pub fn out_of_range(lower: &BigUint, upper: &BigUint) -> Self {
        ZkError::OutOfRange {
            lower: lower.clone(),
            upper: upper.clone(),
        }
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, ZkError::OutOfRange { .. })
    }
}
