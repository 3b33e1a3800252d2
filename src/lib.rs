//! Textbook RSA over a two-digit alphabet encoding.
//!
//! Text is mapped symbol by symbol to the codes `01..=79`, packed into
//! blocks that stay below the modulus, and each block is raised to the key
//! exponent. [`rsa::crack`] breaks keys whose primes sit close to sqrt(n).

pub mod cli;
pub mod error;
pub mod rsa;
pub mod util;

pub use error::{RsaError, RsaResult};
pub use rsa::{CipherConfig, Mode, RsaCipher, RsaKey};
