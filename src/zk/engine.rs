//! ProofEngine — shared handle on a deployment's group parameters

use super::ProofParameters;
use std::sync::Arc;

/// Entry point for commitments, proofs and range proofs.
///
/// Cloning is cheap and every clone shares the same parameters, so provers
/// and verifiers built from one engine can never disagree on `(G, P)`.
/// The engine holds no mutable state and is safe to use across threads.
#[derive(Debug, Clone)]
pub struct ProofEngine {
    params: Arc<ProofParameters>,
}

impl ProofEngine {
    pub fn new(params: ProofParameters) -> Self {
        Self {
            params: Arc::new(params),
        }
    }

    /// Engine over `ProofParameters::standard()`
    pub fn standard() -> Self {
        Self::new(ProofParameters::standard())
    }

    pub fn params(&self) -> &ProofParameters {
        &self.params
    }
}

impl Default for ProofEngine {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_parameters() {
        let engine = ProofEngine::standard();
        let clone = engine.clone();
        assert!(std::ptr::eq(engine.params(), clone.params()));
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ProofEngine>();
    }

    #[test]
    fn test_concurrent_proving_and_cross_verification() {
        use num_bigint::BigUint;

        const THREADS: u64 = 8;
        let engine = ProofEngine::standard();
        let (lower, upper) = (BigUint::from(1_000u32), BigUint::from(1_000_000u32));

        let proofs: Vec<_> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|i| {
                    let engine = engine.clone();
                    let (lower, upper) = (&lower, &upper);
                    s.spawn(move || {
                        let value = BigUint::from(1_000 + i * 10_000);
                        let proof = engine.create_range_proof(&value, lower, upper).unwrap();
                        assert!(engine.verify_range_proof(&proof, lower, upper));
                        proof
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        // Every thread checks every other thread's proof
        std::thread::scope(|s| {
            for _ in 0..THREADS {
                let engine = engine.clone();
                let (proofs, lower, upper) = (&proofs, &lower, &upper);
                s.spawn(move || {
                    for proof in proofs {
                        assert!(engine.verify_range_proof(proof, lower, upper));
                        assert!(!engine.verify_range_proof(proof, lower, &(upper + 1u32)));
                    }
                });
            }
        });

        let mut commitments: Vec<_> = proofs.iter().map(|p| p.commitment.clone()).collect();
        commitments.sort();
        commitments.dedup();
        assert_eq!(commitments.len(), THREADS as usize);
    }
}
