// RSA Module - Main module file
// Exports the alphabet cipher, its arithmetic and the weak-key cracker

pub mod alphabet;
pub mod bigint;
pub mod cipher;
pub mod crack;
pub mod decrypt;
pub mod encrypt;
pub mod keys;
pub mod padding;

pub use alphabet::Alphabet;
pub use bigint::{mod_inverse, mod_pow, RsaBigInt};
pub use cipher::{CipherConfig, RsaCipher};
pub use crack::{crack_key, crack_string, find_d, find_factor};
pub use decrypt::decrypt_to_string;
pub use encrypt::encrypt_string;
pub use keys::{CrackedKey, KeyParseError, RsaKey};
pub use padding::{block_size_for, pad, unpad, Mode, PAD_SYMBOL};
