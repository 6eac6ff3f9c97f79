//! ISO/IEC 7064 MOD 37-2 check character.
//!
//! Pure system over the 37-symbol alphabet `0-9A-Z*` with radix 2. Each
//! symbol is folded into a running remainder `r = (2r + v) mod 37`; the check
//! character is chosen so that the remainder over the complete sequence is 1.
//! `*` only ever appears as a check character.

use crate::{CheckSymbol, ChecksumError};

/// Symbol alphabet in value order: `0-9` are 0-9, `A-Z` are 10-35, `*` is 36.
pub const ALPHABET: &[u8; 37] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ*";

/// Alphabet payload symbols are drawn from (no `*`).
pub const PAYLOAD_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

const MODULUS: u32 = 37;
const RADIX: u32 = 2;

/// Remainder of a complete, correctly checked sequence.
const TERMINAL: u32 = 1;

/// Numeric value of a symbol, or `None` outside the alphabet.
pub fn symbol_value(symbol: u8) -> Option<u32> {
    match symbol {
        b'0'..=b'9' => Some(u32::from(symbol - b'0')),
        b'A'..=b'Z' => Some(u32::from(symbol - b'A') + 10),
        b'*' => Some(36),
        _ => None,
    }
}

fn remainder(symbols: &[u8]) -> Option<u32> {
    symbols.iter().try_fold(0u32, |r, &symbol| {
        symbol_value(symbol).map(|v| (r * RADIX + v) % MODULUS)
    })
}

/// Computes the check character (an ASCII byte from [`ALPHABET`]) for `payload`.
pub fn compute_check_character(payload: &[u8]) -> u8 {
    let r = remainder(payload).unwrap_or(0);
    // Solve (RADIX * r + c) mod 37 == TERMINAL for c.
    let check = (TERMINAL + MODULUS * RADIX - (r * RADIX) % MODULUS) % MODULUS;
    ALPHABET[check as usize]
}

/// Validates a full sequence whose last symbol is the check character.
pub fn validate(full: &[u8]) -> bool {
    full.len() >= 2 && remainder(full) == Some(TERMINAL)
}

/// Writes `payload` followed by its check character into `dest`.
pub fn append(payload: &[u8], dest: &mut [u8]) -> Result<usize, ChecksumError> {
    super::Mod37_2::append(payload, dest)
}
