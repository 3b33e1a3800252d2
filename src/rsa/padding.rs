// Block sizing and padding
// Derives how many symbols fit in one block and pads plaintext to blocks

use std::num::NonZeroUsize;

use super::bigint::{from_u64, RsaBigInt};
use crate::error::{RsaError, RsaResult};

/// Fill symbol appended by `pad` and stripped by `unpad`
pub const PAD_SYMBOL: char = 'X';

/// Arithmetic used for block sizing and padding.
///
/// `Reference` is the historical cipher, kept bit-for-bit so existing keys
/// and ciphertexts interoperate. It sizes blocks against `alphabet_len - 1`
/// and pads by `len % block_size`, which can leave a short final block.
/// `Corrected` sizes against the real largest code and pads up to a full block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Reference,
    Corrected,
}

impl Mode {
    /// Largest code value the block sizer assumes for a given alphabet
    pub fn max_code(self, alphabet_len: usize) -> u64 {
        match self {
            Mode::Reference => (alphabet_len as u64).saturating_sub(1),
            Mode::Corrected => alphabet_len as u64,
        }
    }

    /// Number of fill symbols appended to a text of `len` symbols
    pub fn padding_len(self, len: usize, block_size: NonZeroUsize) -> usize {
        let block_size = block_size.get();
        match self {
            Mode::Reference => len % block_size,
            Mode::Corrected => (block_size - len % block_size) % block_size,
        }
    }
}

/// Largest number of two-digit codes whose concatenation stays below `n`.
///
/// Fails with `InvalidModulus` when `n` does not exceed the assumed max code.
pub fn block_size_for(
    n: &RsaBigInt,
    alphabet_len: usize,
    mode: Mode,
) -> RsaResult<NonZeroUsize> {
    let max_code = mode.max_code(alphabet_len);
    let step = from_u64(max_code);

    if *n <= step {
        return Err(RsaError::InvalidModulus {
            n: n.clone(),
            min: max_code,
        });
    }

    // One symbol always fits
    let mut block_size = NonZeroUsize::MIN;
    let mut largest = step.clone();
    loop {
        let next = &largest * 100u32 + &step;
        if next >= *n {
            break;
        }
        largest = next;
        block_size = block_size.saturating_add(1);
    }

    log::debug!(
        "block size for n={} ({:?}): {} (largest block value {})",
        n,
        mode,
        block_size,
        largest
    );

    Ok(block_size)
}

/// Append fill symbols to `text` according to `mode`
pub fn pad(text: &str, block_size: NonZeroUsize, mode: Mode) -> String {
    let len = text.chars().count();
    let count = mode.padding_len(len, block_size);

    let mut padded = String::with_capacity(text.len() + count);
    padded.push_str(text);
    padded.extend(std::iter::repeat(PAD_SYMBOL).take(count));
    padded
}

/// Remove every trailing fill symbol
pub fn unpad(padded: &str) -> &str {
    padded.trim_end_matches(PAD_SYMBOL)
}
