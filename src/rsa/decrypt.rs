// RSA Decryption Implementation
// Splits fixed-width cipher blocks, decrypts and decodes them, then strips padding

use super::bigint::{mod_pow, RsaBigInt};
use super::cipher::RsaCipher;
use super::keys::RsaKey;
use super::padding::unpad;
use crate::error::{RsaError, RsaResult};

impl RsaCipher<'_> {
    /// Decrypt `ciphertext` with the private key `(d, n)`
    pub fn decrypt(&self, key: &RsaKey, ciphertext: &str) -> RsaResult<String> {
        let n = &key.modulus;
        // Same precondition as encryption; also keeps a zero modulus out of mod_pow
        self.block_size_for(n)?;

        let width = key.cipher_block_width();
        if ciphertext.len() % width != 0 {
            return Err(RsaError::MalformedCiphertext(format!(
                "length {} is not a multiple of the cipher block width {}",
                ciphertext.len(),
                width
            )));
        }

        let mut plaintext = String::with_capacity(ciphertext.len());
        for (index, block) in ciphertext.as_bytes().chunks(width).enumerate() {
            let c = parse_cipher_block(block, index)?;

            // Compute m = c^d mod n
            let m = mod_pow(&c, &key.exponent, n);

            plaintext.push_str(&self.decode_block(&m)?);
        }

        Ok(unpad(&plaintext).to_string())
    }
}

fn parse_cipher_block(block: &[u8], index: usize) -> RsaResult<RsaBigInt> {
    if !block.iter().all(u8::is_ascii_digit) {
        return Err(RsaError::MalformedCiphertext(format!(
            "cipher block {} contains a non-digit character",
            index
        )));
    }

    RsaBigInt::parse_bytes(block, 10).ok_or_else(|| {
        RsaError::MalformedCiphertext(format!("cipher block {} is not a number", index))
    })
}

/// Decrypt a string with the standard alphabet and reference arithmetic
pub fn decrypt_to_string(ciphertext: &str, key: &RsaKey) -> RsaResult<String> {
    RsaCipher::new().decrypt(key, ciphertext)
}
