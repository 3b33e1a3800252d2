// Cipher Engine
// Holds the alphabet and configuration shared by encrypt, decrypt and crack

use std::num::NonZeroUsize;

use super::alphabet::{Alphabet, CODE_WIDTH};
use super::bigint::RsaBigInt;
use super::padding::{block_size_for, Mode};
use crate::error::RsaResult;

/// Configuration for the cipher engine
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CipherConfig {
    pub mode: Mode,
}

impl CipherConfig {
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

/// Block cipher over the two-digit alphabet encoding.
///
/// The alphabet is borrowed, never mutated, so one alphabet can back any
/// number of engines.
#[derive(Clone, Copy, Debug)]
pub struct RsaCipher<'a> {
    alphabet: &'a Alphabet,
    config: CipherConfig,
}

impl RsaCipher<'static> {
    /// Engine over the standard alphabet with the reference arithmetic
    pub fn new() -> Self {
        Self::with_alphabet(Alphabet::standard())
    }
}

impl Default for RsaCipher<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> RsaCipher<'a> {
    pub fn with_alphabet(alphabet: &'a Alphabet) -> Self {
        Self {
            alphabet,
            config: CipherConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CipherConfig) -> Self {
        self.config = config;
        self
    }

    pub fn alphabet(&self) -> &'a Alphabet {
        self.alphabet
    }

    pub fn config(&self) -> CipherConfig {
        self.config
    }

    /// Number of symbols packed into one block for modulus `n`
    pub fn block_size_for(&self, n: &RsaBigInt) -> RsaResult<NonZeroUsize> {
        block_size_for(n, self.alphabet.len(), self.config.mode)
    }

    /// Encode a block of symbols as one integer.
    ///
    /// Codes are concatenated as text so the zero of a code below 10 is
    /// kept in the middle of the numeral ("AA" -> "0101" -> 101).
    pub fn encode_block(&self, block: &[char]) -> RsaResult<RsaBigInt> {
        let mut digits = String::with_capacity(block.len() * CODE_WIDTH);
        for &symbol in block {
            digits.push_str(&self.alphabet.encode_char(symbol)?);
        }

        // An empty block encodes to zero
        Ok(RsaBigInt::parse_bytes(digits.as_bytes(), 10).unwrap_or_default())
    }

    /// Decode an integer back to symbols, two digits at a time.
    ///
    /// Only the leading code can lose its zero, so an odd-length numeral is
    /// restored with a single leading zero.
    pub fn decode_block(&self, value: &RsaBigInt) -> RsaResult<String> {
        let mut digits = value.to_str_radix(10);
        if digits.len() % CODE_WIDTH != 0 {
            digits.insert(0, '0');
        }

        (0..digits.len())
            .step_by(CODE_WIDTH)
            .map(|i| self.alphabet.decode_code(&digits[i..i + CODE_WIDTH]))
            .collect()
    }
}
