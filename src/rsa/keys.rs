// RSA Keys
// An exponent paired with a modulus; public and private keys share one shape

use std::fmt;
use std::str::FromStr;

use super::bigint::{decimal_digit_count, from_u64, RsaBigInt};
use crate::error::{RsaError, RsaResult};

/// RSA key: `(e, n)` for encryption or `(d, n)` for decryption.
///
/// Nothing distinguishes the two; pairing the right exponent with the
/// right operation is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKey {
    pub exponent: RsaBigInt,
    pub modulus: RsaBigInt,
}

impl RsaKey {
    pub fn new(exponent: RsaBigInt, modulus: RsaBigInt) -> Self {
        Self { exponent, modulus }
    }

    pub fn from_u64(exponent: u64, modulus: u64) -> Self {
        Self::new(from_u64(exponent), from_u64(modulus))
    }

    /// Parse exponent and modulus from decimal strings
    pub fn parse(exponent: &str, modulus: &str) -> Result<Self, KeyParseError> {
        Ok(Self::new(parse_integer(exponent)?, parse_integer(modulus)?))
    }

    /// Width of every cipher block: the decimal digit count of the modulus
    pub fn cipher_block_width(&self) -> usize {
        decimal_digit_count(&self.modulus)
    }
}

impl fmt::Display for RsaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.exponent, self.modulus)
    }
}

/// Parses `"<exponent> <modulus>"`, the format of a message file's first line
impl FromStr for RsaKey {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let exponent = parts.next().ok_or(KeyParseError::Missing("exponent"))?;
        let modulus = parts.next().ok_or(KeyParseError::Missing("modulus"))?;
        Self::parse(exponent, modulus)
    }
}

/// Failure to read a key from text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyParseError {
    #[error("missing {0}")]
    Missing(&'static str),
    #[error("{0:?} is not a non-negative integer")]
    NotAnInteger(String),
}

/// Parse a decimal non-negative integer, ignoring surrounding whitespace
pub fn parse_integer(text: &str) -> Result<RsaBigInt, KeyParseError> {
    let trimmed = text.trim();
    trimmed
        .parse::<RsaBigInt>()
        .map_err(|_| KeyParseError::NotAnInteger(trimmed.to_string()))
}

/// Factors recovered from a weak modulus, and the private exponent they give
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrackedKey {
    pub p: RsaBigInt,
    pub q: RsaBigInt,
    /// (p - 1)(q - 1)
    pub phi: RsaBigInt,
    pub d: RsaBigInt,
}

impl CrackedKey {
    pub fn modulus(&self) -> RsaBigInt {
        &self.p * &self.q
    }

    /// The `(d, n)` key for decryption
    pub fn private_key(&self) -> RsaKey {
        RsaKey::new(self.d.clone(), self.modulus())
    }

    /// Check that `e * d ≡ 1 (mod φ)`
    pub fn verify(&self, e: &RsaBigInt) -> RsaResult<()> {
        if (e * &self.d) % &self.phi == from_u64(1) {
            Ok(())
        } else {
            Err(RsaError::NoModularInverse {
                a: e.clone(),
                m: self.phi.clone(),
            })
        }
    }
}
