//! Uniform surface over the check symbol algorithms.

use std::fmt;

use crate::{damm, gs1, luhn, mod37_2, verhoeff, ChecksumError, DIGITS};

/// A check symbol algorithm.
///
/// Symbols are ASCII bytes. `compute` returns the symbol itself (for example
/// `b'3'`), not its numeric value.
pub trait CheckSymbol {
    /// Human-readable algorithm name.
    const NAME: &'static str;

    /// Symbols the payload may contain.
    const PAYLOAD_ALPHABET: &'static [u8];

    /// Symbols a check symbol can take.
    const CHECK_ALPHABET: &'static [u8];

    /// Computes the check symbol for `payload`.
    fn compute(payload: &[u8]) -> u8;

    /// Validates a full sequence whose last symbol is the check symbol.
    fn validate(full: &[u8]) -> bool;

    /// Writes `payload` followed by its check symbol into `dest`.
    ///
    /// Capacity is checked before anything is written. Returns the number
    /// of bytes written.
    fn append(payload: &[u8], dest: &mut [u8]) -> Result<usize, ChecksumError> {
        let required = payload.len() + 1;
        if dest.len() < required {
            return Err(ChecksumError::BufferTooSmall {
                required,
                capacity: dest.len(),
            });
        }

        dest[..payload.len()].copy_from_slice(payload);
        dest[payload.len()] = Self::compute(payload);
        Ok(required)
    }
}

/// Luhn mod 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Luhn;

/// Verhoeff dihedral-group check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Verhoeff;

/// Damm quasigroup check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Damm;

/// ISO/IEC 7064 MOD 37-2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub struct Mod37_2;

/// GS1 weighted mod 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gs1;

impl CheckSymbol for Luhn {
    const NAME: &'static str = "luhn";
    const PAYLOAD_ALPHABET: &'static [u8] = DIGITS;
    const CHECK_ALPHABET: &'static [u8] = DIGITS;

    fn compute(payload: &[u8]) -> u8 {
        b'0' + luhn::compute_check_digit(payload)
    }

    fn validate(full: &[u8]) -> bool {
        luhn::validate(full)
    }
}

impl CheckSymbol for Verhoeff {
    const NAME: &'static str = "verhoeff";
    const PAYLOAD_ALPHABET: &'static [u8] = DIGITS;
    const CHECK_ALPHABET: &'static [u8] = DIGITS;

    fn compute(payload: &[u8]) -> u8 {
        b'0' + verhoeff::compute(payload)
    }

    fn validate(full: &[u8]) -> bool {
        verhoeff::validate(full)
    }
}

impl CheckSymbol for Damm {
    const NAME: &'static str = "damm";
    const PAYLOAD_ALPHABET: &'static [u8] = DIGITS;
    const CHECK_ALPHABET: &'static [u8] = DIGITS;

    fn compute(payload: &[u8]) -> u8 {
        b'0' + damm::compute(payload)
    }

    fn validate(full: &[u8]) -> bool {
        damm::validate(full)
    }
}

impl CheckSymbol for Mod37_2 {
    const NAME: &'static str = "iso7064-mod37-2";
    const PAYLOAD_ALPHABET: &'static [u8] = mod37_2::ALPHABET;
    const CHECK_ALPHABET: &'static [u8] = mod37_2::ALPHABET;

    fn compute(payload: &[u8]) -> u8 {
        mod37_2::compute_check_character(payload)
    }

    fn validate(full: &[u8]) -> bool {
        mod37_2::validate(full)
    }
}

impl CheckSymbol for Gs1 {
    const NAME: &'static str = "gs1";
    const PAYLOAD_ALPHABET: &'static [u8] = DIGITS;
    const CHECK_ALPHABET: &'static [u8] = DIGITS;

    fn compute(payload: &[u8]) -> u8 {
        b'0' + gs1::compute_check_digit(payload)
    }

    fn validate(full: &[u8]) -> bool {
        gs1::validate(full)
    }
}

/// Runtime selection of a check symbol algorithm.
///
/// Identifier schemes name their algorithm with this enum so rule tables can
/// be plain data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum Algorithm {
    Luhn,
    Verhoeff,
    Damm,
    Mod37_2,
    Gs1,
}

impl Algorithm {
    /// All algorithms, in declaration order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Luhn,
        Algorithm::Verhoeff,
        Algorithm::Damm,
        Algorithm::Mod37_2,
        Algorithm::Gs1,
    ];

    /// Computes the check symbol for `payload`.
    pub fn compute_symbol(self, payload: &[u8]) -> u8 {
        match self {
            Algorithm::Luhn => Luhn::compute(payload),
            Algorithm::Verhoeff => Verhoeff::compute(payload),
            Algorithm::Damm => Damm::compute(payload),
            Algorithm::Mod37_2 => Mod37_2::compute(payload),
            Algorithm::Gs1 => Gs1::compute(payload),
        }
    }

    /// Validates a full sequence whose last symbol is the check symbol.
    pub fn validate(self, full: &[u8]) -> bool {
        match self {
            Algorithm::Luhn => Luhn::validate(full),
            Algorithm::Verhoeff => Verhoeff::validate(full),
            Algorithm::Damm => Damm::validate(full),
            Algorithm::Mod37_2 => Mod37_2::validate(full),
            Algorithm::Gs1 => Gs1::validate(full),
        }
    }

    /// Writes `payload` plus its check symbol into `dest`.
    pub fn append(self, payload: &[u8], dest: &mut [u8]) -> Result<usize, ChecksumError> {
        match self {
            Algorithm::Luhn => Luhn::append(payload, dest),
            Algorithm::Verhoeff => Verhoeff::append(payload, dest),
            Algorithm::Damm => Damm::append(payload, dest),
            Algorithm::Mod37_2 => Mod37_2::append(payload, dest),
            Algorithm::Gs1 => Gs1::append(payload, dest),
        }
    }

    /// Symbols the payload may contain.
    pub const fn payload_alphabet(self) -> &'static [u8] {
        match self {
            Algorithm::Luhn => Luhn::PAYLOAD_ALPHABET,
            Algorithm::Verhoeff => Verhoeff::PAYLOAD_ALPHABET,
            Algorithm::Damm => Damm::PAYLOAD_ALPHABET,
            Algorithm::Mod37_2 => Mod37_2::PAYLOAD_ALPHABET,
            Algorithm::Gs1 => Gs1::PAYLOAD_ALPHABET,
        }
    }

    /// Symbols the check symbol can take.
    pub fn check_alphabet(self) -> &'static [u8] {
        match self {
            Algorithm::Luhn => Luhn::CHECK_ALPHABET,
            Algorithm::Verhoeff => Verhoeff::CHECK_ALPHABET,
            Algorithm::Damm => Damm::CHECK_ALPHABET,
            Algorithm::Mod37_2 => Mod37_2::CHECK_ALPHABET,
            Algorithm::Gs1 => Gs1::CHECK_ALPHABET,
        }
    }

    /// Algorithm name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Luhn => Luhn::NAME,
            Algorithm::Verhoeff => Verhoeff::NAME,
            Algorithm::Damm => Damm::NAME,
            Algorithm::Mod37_2 => Mod37_2::NAME,
            Algorithm::Gs1 => Gs1::NAME,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
