//! # idcheck-checksum
//!
//! Check digit algorithms shared by every identifier scheme.
//!
//! ## Algorithms
//!
//! | Algorithm | Alphabet | Detects |
//! |-----------|----------|---------|
//! | [`luhn`] | `0-9` | single substitutions, most adjacent transpositions |
//! | [`verhoeff`] | `0-9` | single substitutions, all adjacent transpositions |
//! | [`damm`] | `0-9` | single substitutions, all adjacent transpositions |
//! | [`mod37_2`] | `0-9A-Z*` | ISO/IEC 7064 pure system, modulus 37 |
//! | [`gs1`] | `0-9` | GS1 keys (GTIN, SSCC, GLN) |
//!
//! ## Preconditions
//!
//! Callers confirm charset and length before computing a check symbol.
//! Nothing here panics on malformed input: `validate` functions return
//! `false` and `compute` functions return an unspecified symbol.
//!
//! Lookup tables are `static` and read-only, so every function is pure and
//! safe to call from any number of threads.

mod algorithm;
mod error;

pub mod damm;
pub mod gs1;
pub mod luhn;
pub mod mod37_2;
pub mod verhoeff;

pub use algorithm::{Algorithm, CheckSymbol, Damm, Gs1, Luhn, Mod37_2, Verhoeff};
pub use error::ChecksumError;

/// Decimal digit alphabet shared by the numeric algorithms.
pub const DIGITS: &[u8] = b"0123456789";

/// Numeric value of an ASCII digit.
#[inline]
pub(crate) fn digit_value(byte: u8) -> Option<u8> {
    byte.is_ascii_digit().then(|| byte - b'0')
}

/// Numeric value of an ASCII digit, or 0 for anything else.
#[inline]
pub(crate) fn digit_or_zero(byte: u8) -> usize {
    digit_value(byte).unwrap_or(0) as usize
}

/// True if `full` holds a payload plus check symbol, all decimal digits.
#[inline]
pub(crate) fn is_checked_digits(full: &[u8]) -> bool {
    full.len() >= 2 && full.iter().all(u8::is_ascii_digit)
}
