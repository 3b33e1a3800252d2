// RSA Encryption Implementation
// Pads, encodes and encrypts text block by block into fixed-width decimal blocks

use super::bigint::mod_pow;
use super::cipher::RsaCipher;
use super::keys::RsaKey;
use super::padding::pad;
use crate::error::RsaResult;

impl RsaCipher<'_> {
    /// Encrypt `plaintext` with the public key `(e, n)`.
    ///
    /// Every block becomes exactly `key.cipher_block_width()` digits, so the
    /// ciphertext is a plain run of decimal digits.
    pub fn encrypt(&self, key: &RsaKey, plaintext: &str) -> RsaResult<String> {
        let n = &key.modulus;
        let block_size = self.block_size_for(n)?;
        let width = key.cipher_block_width();

        let padded: Vec<char> = pad(plaintext, block_size, self.config().mode).chars().collect();

        let blocks = padded.chunks(block_size.get());
        let mut ciphertext = String::with_capacity(blocks.len() * width);
        for block in blocks {
            // Encode characters block
            let encoded = self.encode_block(block)?;

            // Compute c = m^e mod n
            let c = mod_pow(&encoded, &key.exponent, n);

            // Left-pad to the cipher block width
            ciphertext.push_str(&format!("{:0>width$}", c.to_str_radix(10), width = width));
        }

        log::debug!(
            "encrypted {} symbols into {} blocks of {} digits",
            plaintext.chars().count(),
            ciphertext.len() / width,
            width
        );

        Ok(ciphertext)
    }
}

/// Encrypt a string with the standard alphabet and reference arithmetic
pub fn encrypt_string(plaintext: &str, key: &RsaKey) -> RsaResult<String> {
    RsaCipher::new().encrypt(key, plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RsaError;
    use crate::rsa::bigint::from_u64;

    #[test]
    fn test_encrypt_hi() {
        let key = RsaKey::from_u64(17, 3233);
        let ciphertext = encrypt_string("HI", &key).unwrap();

        // One symbol per block, four digits per cipher block
        let h = mod_pow(&from_u64(8), &from_u64(17), &from_u64(3233));
        let i = mod_pow(&from_u64(9), &from_u64(17), &from_u64(3233));
        assert_eq!(ciphertext, format!("{:0>4}{:0>4}", h.to_string(), i.to_string()));
    }

    #[test]
    fn test_encrypt_block_width() {
        let key = RsaKey::from_u64(17, 1_022_117);
        let ciphertext = encrypt_string("Hello, World!\nSecond line.", &key).unwrap();

        assert_eq!(ciphertext.len() % 7, 0);
        assert!(ciphertext.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn test_encrypt_leading_zero_blocks() {
        // 'A' -> 1, and 1^e = 1, which must still take the full width
        let key = RsaKey::from_u64(17, 3233);
        assert_eq!(encrypt_string("AAA", &key).unwrap(), "000100010001");
    }

    #[test]
    fn test_encrypt_short_final_block() {
        // Five symbols, block size 3: the reference rule adds two fill
        // symbols, leaving blocks of 3, 3 and 1
        let key = RsaKey::from_u64(17, 1_022_117);
        let ciphertext = encrypt_string("Hello", &key).unwrap();
        assert_eq!(ciphertext.len(), 3 * 7);
    }

    #[test]
    fn test_encrypt_empty() {
        let key = RsaKey::from_u64(17, 3233);
        assert_eq!(encrypt_string("", &key).unwrap(), "");
    }

    #[test]
    fn test_encrypt_unknown_symbol() {
        let key = RsaKey::from_u64(17, 3233);
        assert_eq!(
            encrypt_string("tab\there", &key),
            Err(RsaError::SymbolNotInAlphabet('\t'))
        );
    }

    #[test]
    fn test_encrypt_small_modulus() {
        let key = RsaKey::from_u64(3, 55);
        assert!(matches!(
            encrypt_string("HI", &key),
            Err(RsaError::InvalidModulus { .. })
        ));
    }
}
