//! Damm check digit.
//!
//! A single table lookup per digit through a weakly totally anti-symmetric
//! quasigroup of order 10. The table is H. Michael Damm's published one; it
//! cannot be derived from a formula.

use crate::{digit_or_zero, is_checked_digits};

/// Damm's order-10 quasigroup. Zero diagonal, rows and columns are permutations.
static QUASIGROUP: [[u8; 10]; 10] = [
    [0, 3, 1, 7, 5, 9, 8, 6, 4, 2],
    [7, 0, 9, 2, 1, 5, 4, 8, 6, 3],
    [4, 2, 0, 6, 8, 7, 1, 3, 5, 9],
    [1, 7, 5, 0, 9, 8, 3, 4, 2, 6],
    [6, 1, 2, 3, 0, 4, 5, 9, 7, 8],
    [3, 6, 7, 4, 2, 0, 9, 5, 8, 1],
    [5, 8, 6, 9, 7, 2, 0, 1, 3, 4],
    [8, 9, 4, 5, 3, 6, 2, 0, 1, 7],
    [9, 4, 3, 8, 6, 1, 7, 2, 0, 5],
    [2, 5, 8, 1, 4, 3, 6, 7, 9, 0],
];

fn interim(digits: &[u8]) -> u8 {
    digits
        .iter()
        .fold(0u8, |acc, &byte| QUASIGROUP[acc as usize][digit_or_zero(byte)])
}

/// Computes the check digit (0-9) for `payload`.
pub fn compute(payload: &[u8]) -> u8 {
    interim(payload)
}

/// Validates a full sequence whose last digit is the check digit.
pub fn validate(full: &[u8]) -> bool {
    is_checked_digits(full) && interim(full) == 0
}
