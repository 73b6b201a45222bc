//! Zero-Knowledge Proof engine
//!
//! Proves numeric facts about a committed secret without revealing it:
//! - ProofParameters: the fixed group `(G, P)` shared by provers and verifiers
//! - Commitment: binds a secret value and a blinding factor into one group element
//! - Sigma: Schnorr-style proof of knowledge, made non-interactive with Fiat-Shamir
//! - Range: "value lies in [lower, upper]" claims built on the sigma proof

mod params;
mod engine;
mod commitment;
mod sigma;
mod range;
pub mod encoding;

pub use params::ProofParameters;
pub use engine::ProofEngine;
pub use commitment::{CommittedValue, Witness};
pub use sigma::{Proof, Statement};
