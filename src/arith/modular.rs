//! Square-and-multiply exponentiation and extended-Euclid inversion

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Compute `base^exponent mod modulus` by binary exponentiation.
///
/// The base is reduced first, so results do not depend on whether `base`
/// is larger than `modulus`. Returns 0 for a modulus of 1.
///
/// # Panics
/// Panics if `modulus` is zero.
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    assert!(!modulus.is_zero(), "mod_pow: modulus must be at least 1");
    if modulus.is_one() {
        return BigUint::zero();
    }

    let mut result = BigUint::one();
    let mut square = base % modulus;
    for i in 0..exponent.bits() {
        if exponent.bit(i) {
            result = (&result * &square) % modulus;
        }
        square = (&square * &square) % modulus;
    }
    result
}

/// Compute the inverse of `a` modulo `m` with the extended Euclidean algorithm.
///
/// Returns a value in `[0, m-1]`, `Some(0)` when `m == 1`, and `None` when
/// `a` and `m` are not coprime (or `m` is zero).
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    if m.is_zero() {
        return None;
    }
    if m.is_one() {
        return Some(BigUint::zero());
    }

    let modulus = BigInt::from(m.clone());
    let (mut old_r, mut r) = (BigInt::from(a % m), modulus.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, next_r);
        let next_s = &old_s - &q * &s;
        old_s = std::mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return None;
    }
    old_s.mod_floor(&modulus).to_biguint()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_mod_pow_small() {
        assert_eq!(mod_pow(&big(2), &big(10), &big(1000)), big(24));
        assert_eq!(mod_pow(&big(3), &big(0), &big(7)), big(1));
        assert_eq!(mod_pow(&big(0), &big(5), &big(7)), big(0));
    }

    #[test]
    fn test_mod_pow_unit_modulus() {
        assert_eq!(mod_pow(&big(12345), &big(0), &big(1)), big(0));
        assert_eq!(mod_pow(&big(12345), &big(99), &big(1)), big(0));
    }

    #[test]
    fn test_mod_pow_reduces_base() {
        // 1002 ≡ 2 (mod 1000)
        assert_eq!(
            mod_pow(&big(1002), &big(10), &big(1000)),
            mod_pow(&big(2), &big(10), &big(1000))
        );
    }

    #[test]
    #[should_panic(expected = "modulus must be at least 1")]
    fn test_mod_pow_zero_modulus_panics() {
        mod_pow(&big(2), &big(3), &big(0));
    }

    #[test]
    fn test_mod_pow_fermat() {
        // a^(p-1) ≡ 1 mod p for the 61-bit Mersenne prime
        let p = big((1u64 << 61) - 1);
        let exp = &p - 1u32;
        for a in [2u64, 3, 5, 123_456_789] {
            assert_eq!(mod_pow(&big(a), &exp, &p), big(1));
        }
    }

    #[test]
    fn test_mod_inverse_small() {
        assert_eq!(mod_inverse(&big(3), &big(11)), Some(big(4)));
        assert_eq!(mod_inverse(&big(10), &big(17)), Some(big(12)));
        assert_eq!(mod_inverse(&big(1), &big(2)), Some(big(1)));
    }

    #[test]
    fn test_mod_inverse_unit_modulus() {
        assert_eq!(mod_inverse(&big(5), &big(1)), Some(big(0)));
    }

    #[test]
    fn test_mod_inverse_not_coprime() {
        assert_eq!(mod_inverse(&big(6), &big(9)), None);
        assert_eq!(mod_inverse(&big(0), &big(7)), None);
        assert_eq!(mod_inverse(&big(14), &big(7)), None);
        assert_eq!(mod_inverse(&big(3), &big(0)), None);
    }

    #[test]
    fn test_mod_inverse_reduces_input() {
        assert_eq!(mod_inverse(&big(14), &big(11)), mod_inverse(&big(3), &big(11)));
    }

    proptest! {
        #[test]
        fn prop_mod_pow_matches_library(b in any::<u64>(), e in any::<u32>(), m in 1u64..) {
            let (b, e, m) = (big(b), BigUint::from(e), big(m));
            prop_assert_eq!(mod_pow(&b, &e, &m), b.modpow(&e, &m));
        }

        #[test]
        fn prop_mod_pow_deterministic(b in any::<u64>(), e in any::<u64>(), m in 1u64..) {
            let (b, e, m) = (big(b), big(e), big(m));
            prop_assert_eq!(mod_pow(&b, &e, &m), mod_pow(&b, &e, &m));
        }

        #[test]
        fn prop_mod_inverse_is_inverse(a in 1u64..(1u64 << 61) - 1) {
            let p = big((1u64 << 61) - 1);
            let a = big(a);
            let inv = mod_inverse(&a, &p).expect("prime modulus is coprime to a");
            prop_assert!(inv < p);
            prop_assert_eq!((a * inv) % &p, big(1));
        }
    }
}
