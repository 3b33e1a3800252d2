// Error types for the alphabet RSA cipher
// Every failure in the core is returned, never printed

use thiserror::Error;

use crate::rsa::bigint::RsaBigInt;

/// Errors produced by the cipher core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsaError {
    /// Plaintext character that has no code in the alphabet
    #[error("symbol {0:?} is not in the alphabet")]
    SymbolNotInAlphabet(char),

    /// Two-digit code (usually from a corrupted ciphertext or wrong key) with no symbol
    #[error("code {0:?} is not in the alphabet")]
    CodeNotInAlphabet(String),

    /// Modulus too small to hold a single encoded symbol
    #[error("n={n} cannot be smaller than the alphabet size (n must be greater than {min})")]
    InvalidModulus { n: RsaBigInt, min: u64 },

    /// Trial division from sqrt(n) found no odd factor
    #[error("cannot find valid factors of n={n} = p*q")]
    Factorization { n: RsaBigInt },

    /// gcd(a, m) != 1
    #[error("{a} has no inverse modulo {m}")]
    NoModularInverse { a: RsaBigInt, m: RsaBigInt },

    /// Ciphertext that cannot be split into cipher blocks
    #[error("malformed ciphertext: {0}")]
    MalformedCiphertext(String),
}

/// Result type for cipher operations
pub type RsaResult<T> = Result<T, RsaError>;
