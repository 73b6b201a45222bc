//! Lossless string encodings for arbitrary-precision integers
//!
//! JSON numbers cannot carry values above 2^53, so every `BigUint` on the
//! wire is a canonical decimal string.

use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serializer};

/// Parse a canonical decimal string: ASCII digits only, no sign, no
/// separators, no leading zeros (except `"0"` itself).
pub fn parse_decimal(s: &str) -> Option<BigUint> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if s.len() > 1 && s.starts_with('0') {
        return None;
    }
    BigUint::parse_bytes(s.as_bytes(), 10)
}

/// Parse a decimal string or a `0x`-prefixed hex string.
/// Used for human-edited configuration, so it is more lenient than `parse_decimal`.
pub fn parse_integer(s: &str) -> Option<BigUint> {
    let s = s.trim();
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) if !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()) => {
            BigUint::parse_bytes(hex.as_bytes(), 16)
        }
        Some(_) => None,
        None if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            BigUint::parse_bytes(s.as_bytes(), 10)
        }
        None => None,
    }
}

/// `#[serde(with = "decimal")]` for `BigUint` fields
pub mod decimal {
    use super::*;

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_str_radix(10))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_decimal(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid decimal integer: {:?}", s)))
    }
}
