//! Verhoeff check digit.
//!
//! Multiplication in the dihedral group D5 combined with a position-dependent
//! permutation. Being non-commutative, it catches every single substitution
//! and every adjacent transposition, which plain mod-10 sums cannot.

use crate::{digit_or_zero, is_checked_digits, CheckSymbol, ChecksumError};

/// Multiplication table of the dihedral group D5.
static D: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Position permutations; row `i` is applied at position `i mod 8`.
static P: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Group inverses: `D[x][INV[x]] == 0`.
static INV: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

/// Runs the recurrence right to left, numbering the rightmost digit `first_position`.
fn checksum(digits: &[u8], first_position: usize) -> u8 {
    digits
        .iter()
        .rev()
        .enumerate()
        .fold(0u8, |c, (i, &byte)| {
            let permuted = P[(i + first_position) % 8][digit_or_zero(byte)];
            D[c as usize][permuted as usize]
        })
}

/// Computes the check digit (0-9) for `payload`.
pub fn compute(payload: &[u8]) -> u8 {
    // The check digit will occupy position 0.
    INV[checksum(payload, 1) as usize]
}

/// Validates a full sequence whose last digit is the check digit.
pub fn validate(full: &[u8]) -> bool {
    is_checked_digits(full) && checksum(full, 0) == 0
}

/// Writes `payload` followed by its check digit into `dest`.
///
/// Returns the number of bytes written. `dest` is left untouched when it
/// cannot hold `payload.len() + 1` bytes.
pub fn append(payload: &[u8], dest: &mut [u8]) -> Result<usize, ChecksumError> {
    super::Verhoeff::append(payload, dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use idcheck_testing::{adjacent_transpositions, random_digits, substitutions, test_rng, DIGITS};
    use rstest::rstest;

    #[test]
    fn test_tables_are_consistent() {
        for x in 0..10 {
            assert_eq!(D[x][INV[x] as usize], 0);
            let mut row: Vec<u8> = D[x].to_vec();
            row.sort_unstable();
            assert_eq!(row, (0..10).collect::<Vec<u8>>());
        }
        for perm in &P {
            let mut row = perm.to_vec();
            row.sort_unstable();
            assert_eq!(row, (0..10).collect::<Vec<u8>>());
        }
    }

    #[rstest]
    #[case(b"2363", 4)]
    #[case(b"236", 3)]
    #[case(b"12345", 1)]
    #[case(b"23412341234", 6)]
    fn test_compute(#[case] payload: &[u8], #[case] expected: u8) {
        assert_eq!(compute(payload), expected);
    }

    #[rstest]
    #[case(b"23634", true)]
    #[case(b"23635", false)]
    #[case(b"2363", false)]
    #[case(b"234123412346", true)]
    #[case(b"4", false)]
    fn test_validate(#[case] full: &[u8], #[case] expected: bool) {
        assert_eq!(validate(full), expected);
    }

    #[test]
    fn test_append() {
        let mut buf = [0u8; 8];
        assert_eq!(append(b"2363", &mut buf), Ok(5));
        assert_eq!(&buf[..5], b"23634");
    }

    #[test]
    fn test_append_buffer_too_small() {
        let mut buf = [b'x'; 4];
        assert_eq!(
            append(b"2363", &mut buf),
            Err(ChecksumError::BufferTooSmall {
                required: 5,
                capacity: 4
            })
        );
        assert_eq!(&buf, b"xxxx");
    }

    #[test]
    fn test_detects_substitutions_and_transpositions() {
        let mut rng = test_rng(3);
        for _ in 0..50 {
            let payload = random_digits(&mut rng, 11);
            let mut full = [0u8; 12];
            append(&payload, &mut full).unwrap();
            assert!(validate(&full));

            for mutated in substitutions(&full, DIGITS) {
                assert!(!validate(&mutated));
            }
            for swapped in adjacent_transpositions(&full) {
                assert!(!validate(&swapped));
            }
        }
    }
}
