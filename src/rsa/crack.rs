// Weak-key cracker
// Factors n by trial division downward from sqrt(n) and rebuilds d

use num_integer::Integer;
use num_traits::{One, Zero};

use super::bigint::{mod_inverse, RsaBigInt};
use super::cipher::RsaCipher;
use super::keys::{CrackedKey, RsaKey};
use crate::error::{RsaError, RsaResult};

/// Find the largest odd factor `p > 1` of `n` with `p <= sqrt(n)`.
///
/// Only effective when both primes sit close to sqrt(n). Even factors are
/// never tried, and reaching `p = 1` counts as failure.
pub fn find_factor(n: &RsaBigInt) -> RsaResult<RsaBigInt> {
    let fail = || RsaError::Factorization { n: n.clone() };

    let mut p = n.sqrt();
    if p.is_even() {
        if p.is_zero() {
            return Err(fail());
        }
        p -= 1u32;
    }

    log::info!("factorizing n={} from p={}", n, p);

    let one = RsaBigInt::one();
    while p > one && !(n % &p).is_zero() {
        p -= 2u32;
    }

    if p <= one {
        return Err(fail());
    }

    log::info!("found p={}", p);
    Ok(p)
}

/// Recover the factors of `n` and the private exponent matching `e`
pub fn crack_key(e: &RsaBigInt, n: &RsaBigInt) -> RsaResult<CrackedKey> {
    let p = find_factor(n)?;
    let q = n / &p;
    let phi = (&p - 1u32) * (&q - 1u32);
    let d = mod_inverse(e, &phi)?;

    log::debug!("q={} phi={} d={}", q, phi, d);

    Ok(CrackedKey { p, q, phi, d })
}

/// Private exponent d for the public key `(e, n)`
pub fn find_d(e: &RsaBigInt, n: &RsaBigInt) -> RsaResult<RsaBigInt> {
    crack_key(e, n).map(|cracked| cracked.d)
}

impl RsaCipher<'_> {
    /// Decrypt `ciphertext` knowing only the public key `(e, n)`
    pub fn crack(&self, public_key: &RsaKey, ciphertext: &str) -> RsaResult<String> {
        let cracked = crack_key(&public_key.exponent, &public_key.modulus)?;
        self.decrypt(&cracked.private_key(), ciphertext)
    }
}

/// Crack with the standard alphabet and reference arithmetic
pub fn crack_string(ciphertext: &str, public_key: &RsaKey) -> RsaResult<String> {
    RsaCipher::new().crack(public_key, ciphertext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::from_u64;
    use crate::rsa::encrypt::encrypt_string;

    #[test]
    fn test_find_factor() {
        // sqrt(3233) = 56 -> 55 -> 53
        assert_eq!(find_factor(&from_u64(3233)).unwrap(), from_u64(53));
        assert_eq!(find_factor(&from_u64(1_022_117)).unwrap(), from_u64(1009));
    }

    #[test]
    fn test_find_factor_square_of_odd_prime() {
        assert_eq!(find_factor(&from_u64(9)).unwrap(), from_u64(3));
        assert_eq!(find_factor(&from_u64(10_201)).unwrap(), from_u64(101));
    }

    #[test]
    fn test_find_factor_divides() {
        for (p, q) in [(3u64, 5u64), (11, 13), (101, 103), (7919, 7927), (65_521, 65_537)] {
            let n = from_u64(p * q);
            let found = find_factor(&n).unwrap();
            assert!((&n % &found).is_zero());
            assert_eq!(found, from_u64(p));
        }
    }

    #[test]
    fn test_find_factor_far_apart() {
        // The only proper factor is 2, which the odd-only search skips
        let n = from_u64(2 * 1_000_003);
        assert_eq!(find_factor(&n), Err(RsaError::Factorization { n: n.clone() }));
    }

    #[test]
    fn test_find_factor_prime_and_tiny() {
        for n in [0u64, 1, 2, 3, 4, 7, 8, 97] {
            assert!(find_factor(&from_u64(n)).is_err(), "n={}", n);
        }
    }

    #[test]
    fn test_crack_key() {
        let cracked = crack_key(&from_u64(17), &from_u64(3233)).unwrap();
        assert_eq!(cracked.p, from_u64(53));
        assert_eq!(cracked.q, from_u64(61));
        assert_eq!(cracked.phi, from_u64(3120));
        assert_eq!(cracked.d, from_u64(2753));
        assert!(cracked.verify(&from_u64(17)).is_ok());
    }

    #[test]
    fn test_find_d_no_inverse() {
        // phi = 3120 is divisible by 3
        let result = find_d(&from_u64(3), &from_u64(3233));
        assert!(matches!(result, Err(RsaError::NoModularInverse { .. })));
    }

    #[test]
    fn test_crack() {
        let public = RsaKey::from_u64(17, 1_022_117);
        let message = "Weak keys are easy (to crack).";

        let ciphertext = encrypt_string(message, &public).unwrap();
        assert_eq!(crack_string(&ciphertext, &public).unwrap(), message);
    }

    #[test]
    fn test_crack_hi() {
        let public = RsaKey::from_u64(17, 3233);
        let ciphertext = encrypt_string("HI", &public).unwrap();
        assert_eq!(crack_string(&ciphertext, &public).unwrap(), "HI");
    }
}
