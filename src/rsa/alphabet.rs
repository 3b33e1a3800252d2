// Bidirectional Alphabet
// Fixed mapping between symbols and two-digit decimal codes

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{RsaError, RsaResult};

/// Special characters, in code order, after letters and digits
pub const SPECIAL_CHARACTERS: [char; 17] = [
    '.', '?', '!', ',', ';', ':', '-', '(', ')', '[', ']', '{', '}', '\'', '"', ' ', '\n',
];

/// Width of every code in decimal digits
pub const CODE_WIDTH: usize = 2;

static STANDARD: OnceLock<Alphabet> = OnceLock::new();

/// Immutable bijection between symbols and the codes `01..=len()`.
///
/// Code `k` belongs to `symbols[k - 1]`; the reverse direction is a hash
/// lookup. Nothing mutates an alphabet after construction, so a shared
/// reference can be handed to any number of readers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    codes: HashMap<char, u8>,
}

impl Alphabet {
    /// Build the alphabet: A-Z, a-z, 0-9, then the special characters.
    pub fn new() -> Self {
        let symbols: Vec<char> = ('A'..='Z')
            .chain('a'..='z')
            .chain('0'..='9')
            .chain(SPECIAL_CHARACTERS)
            .collect();

        let codes = symbols
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, (i + 1) as u8))
            .collect();

        Self { symbols, codes }
    }

    /// Process-wide alphabet, built on first use
    pub fn standard() -> &'static Alphabet {
        STANDARD.get_or_init(Alphabet::new)
    }

    /// Number of symbols (also the largest code)
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.codes.contains_key(&symbol)
    }

    /// Numeric code of a symbol
    pub fn code_of(&self, symbol: char) -> RsaResult<u8> {
        self.codes
            .get(&symbol)
            .copied()
            .ok_or(RsaError::SymbolNotInAlphabet(symbol))
    }

    /// Two-digit, zero-padded code of a symbol ('A' -> "01")
    pub fn encode_char(&self, symbol: char) -> RsaResult<String> {
        let code = self.code_of(symbol)?;
        Ok(format!("{:0width$}", code, width = CODE_WIDTH))
    }

    /// Symbol for a two-digit code ("01" -> 'A')
    pub fn decode_code(&self, code: &str) -> RsaResult<char> {
        let unknown = || RsaError::CodeNotInAlphabet(code.to_string());

        if code.len() != CODE_WIDTH || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(unknown());
        }

        let value: usize = code.parse().map_err(|_| unknown())?;
        if value == 0 {
            return Err(unknown());
        }

        self.symbols.get(value - 1).copied().ok_or_else(unknown)
    }

    /// All symbols in code order
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_size() {
        let alphabet = Alphabet::new();
        assert_eq!(alphabet.len(), 79);
        assert!(!alphabet.is_empty());
    }

    #[test]
    fn test_known_codes() {
        let alphabet = Alphabet::standard();
        assert_eq!(alphabet.encode_char('A').unwrap(), "01");
        assert_eq!(alphabet.encode_char('I').unwrap(), "09");
        assert_eq!(alphabet.encode_char('Z').unwrap(), "26");
        assert_eq!(alphabet.encode_char('a').unwrap(), "27");
        assert_eq!(alphabet.encode_char('z').unwrap(), "52");
        assert_eq!(alphabet.encode_char('0').unwrap(), "53");
        assert_eq!(alphabet.encode_char('9').unwrap(), "62");
        assert_eq!(alphabet.encode_char('.').unwrap(), "63");
        assert_eq!(alphabet.encode_char('"').unwrap(), "77");
        assert_eq!(alphabet.encode_char(' ').unwrap(), "78");
        assert_eq!(alphabet.encode_char('\n').unwrap(), "79");
    }

    #[test]
    fn test_bijection() {
        let alphabet = Alphabet::standard();

        for &symbol in alphabet.symbols() {
            let code = alphabet.encode_char(symbol).unwrap();
            assert_eq!(alphabet.decode_code(&code).unwrap(), symbol);
        }

        for value in 1..=alphabet.len() {
            let code = format!("{:02}", value);
            let symbol = alphabet.decode_code(&code).unwrap();
            assert_eq!(alphabet.encode_char(symbol).unwrap(), code);
        }
    }

    #[test]
    fn test_unknown_symbol() {
        let alphabet = Alphabet::standard();
        assert_eq!(
            alphabet.encode_char('@'),
            Err(RsaError::SymbolNotInAlphabet('@'))
        );
        assert!(alphabet.encode_char('\t').is_err());
        assert!(alphabet.encode_char('é').is_err());
        assert!(!alphabet.contains('\r'));
    }

    #[test]
    fn test_unknown_code() {
        let alphabet = Alphabet::standard();
        for code in ["00", "80", "99", "1", "001", "a1", ""] {
            assert_eq!(
                alphabet.decode_code(code),
                Err(RsaError::CodeNotInAlphabet(code.to_string()))
            );
        }
    }

    #[test]
    fn test_standard_is_shared() {
        let first = Alphabet::standard() as *const Alphabet;
        let second = Alphabet::standard() as *const Alphabet;
        assert_eq!(first, second);
        assert_eq!(*Alphabet::standard(), Alphabet::default());
    }
}
