//! Modular arithmetic over arbitrary-precision integers
//!
//! - `mod_pow` / `mod_inverse`: the group operations the protocol is built on
//! - `random_exponent`: 256-bit exponents drawn from the OS CSPRNG
//! - `is_probable_prime`: Miller-Rabin check used to validate group parameters

mod modular;
mod prime;
mod random;

pub use modular::{mod_inverse, mod_pow};
pub use prime::is_probable_prime;
pub use random::{random_exponent, RANDOM_EXPONENT_BYTES};
