//! Miller-Rabin primality test with fixed witness bases

use super::mod_pow;
use num_bigint::BigUint;
use num_traits::{One, Zero};

const WITNESS_BASES: [u32; 16] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53];

/// Probabilistic primality check. Deterministic for `n < 3.3 * 10^24`;
/// above that a composite passes with probability at most `4^-16`.
pub fn is_probable_prime(n: &BigUint) -> bool {
    if n < &BigUint::from(2u32) {
        return false;
    }
    for &p in &WITNESS_BASES {
        let p = BigUint::from(p);
        if n == &p {
            return true;
        }
        if (n % &p).is_zero() {
            return false;
        }
    }

    let n_minus_one = n - 1u32;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for &a in &WITNESS_BASES {
        let mut x = mod_pow(&BigUint::from(a), &d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
