//! Exponent sampling from the operating system CSPRNG

use crate::error::{Result, ZkError};
use num_bigint::BigUint;
use rand::rngs::OsRng;
use rand::RngCore;

/// Bytes of entropy per sampled exponent (256 bits)
pub const RANDOM_EXPONENT_BYTES: usize = 32;

/// Draw a uniformly random 256-bit exponent.
///
/// Fails with `RandomnessUnavailable` if the OS source errors; there is no
/// fallback to a weaker generator.
pub fn random_exponent() -> Result<BigUint> {
    let mut bytes = [0u8; RANDOM_EXPONENT_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| ZkError::RandomnessUnavailable(e.to_string()))?;
    Ok(BigUint::from_bytes_be(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_exponent_fits_256_bits() {
        for _ in 0..32 {
            let r = random_exponent().unwrap();
            assert!(r.bits() <= 256);
        }
    }

    #[test]
    fn test_random_exponents_differ() {
        let a = random_exponent().unwrap();
        let b = random_exponent().unwrap();
        assert_ne!(a, b);
    }
}
