//! ProofParameters — the multiplicative group every proof lives in

use crate::arith::is_probable_prime;
use crate::error::{Result, ZkError};
use num_bigint::BigUint;
use num_traits::One;

/// Standard deployment modulus `P = 2^256 - 2^32 - 977`, little-endian u32 digits
const STANDARD_MODULUS_DIGITS: [u32; 8] = [
    0xFFFF_FC2F,
    0xFFFF_FFFE,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
];

/// 3 is a primitive root mod the standard modulus, so it generates all of Z_P*
const STANDARD_GENERATOR: u32 = 3;

/// Group parameters `{ generator: G, modulus: P }`.
///
/// Group elements are reduced mod `P`; exponents are reduced mod `P - 1`.
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofParameters {
    generator: BigUint,
    modulus: BigUint,
    /// `P - 1`, cached for exponent arithmetic
    order: BigUint,
    /// Decimal digits of `P`; no canonical group element is longer
    element_digits: usize,
}

impl ProofParameters {
    /// Validate and build parameters. Requires `1 < G < P` and `P` prime.
    pub fn new(generator: BigUint, modulus: BigUint) -> Result<Self> {
        if !is_probable_prime(&modulus) {
            return Err(ZkError::InvalidParameters(format!(
                "modulus {} is not prime",
                modulus
            )));
        }
        if generator <= BigUint::one() || generator >= modulus {
            return Err(ZkError::InvalidParameters(format!(
                "generator {} must satisfy 1 < G < P",
                generator
            )));
        }
        let order = &modulus - 1u32;
        let element_digits = modulus.to_str_radix(10).len();
        Ok(Self {
            generator,
            modulus,
            order,
            element_digits,
        })
    }

    /// The standard 256-bit deployment parameters (`G = 3`)
    pub fn standard() -> Self {
        let modulus = BigUint::from_slice(&STANDARD_MODULUS_DIGITS);
        let order = &modulus - 1u32;
        let element_digits = modulus.to_str_radix(10).len();
        Self {
            generator: BigUint::from(STANDARD_GENERATOR),
            modulus,
            order,
            element_digits,
        }
    }

    pub fn generator(&self) -> &BigUint {
        &self.generator
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Exponent modulus `P - 1`
    pub fn group_order(&self) -> &BigUint {
        &self.order
    }

    /// Length of `P` in decimal, an upper bound on encoded group elements
    pub fn element_digits(&self) -> usize {
        self.element_digits
    }
}

impl Default for ProofParameters {
    fn default() -> Self {
        Self::standard()
    }
}
