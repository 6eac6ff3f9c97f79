//! Luhn (mod 10) check digit.
//!
//! Used by payment card numbers, IMEI, and a long tail of national IDs.

use crate::{digit_or_zero, is_checked_digits};

/// Computes the check digit (0-9) for `payload`.
pub fn compute_check_digit(payload: &[u8]) -> u8 {
    // The rightmost payload digit is doubled once the check digit is appended.
    let sum = luhn_sum(payload, true);
    ((10 - sum % 10) % 10) as u8
}

/// Validates a full sequence whose last digit is the check digit.
pub fn validate(full: &[u8]) -> bool {
    is_checked_digits(full) && luhn_sum(full, false) % 10 == 0
}

fn luhn_sum(digits: &[u8], double_rightmost: bool) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &byte)| {
            let digit = digit_or_zero(byte) as u32;
            if (i % 2 == 0) == double_rightmost {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use idcheck_testing::{random_digits, substitutions, test_rng, DIGITS};
    use rstest::rstest;

    #[rstest]
    #[case(b"7992739871", 3)]
    #[case(b"49015420323751", 8)]
    #[case(b"0", 0)]
    #[case(b"", 0)]
    fn test_compute_check_digit(#[case] payload: &[u8], #[case] expected: u8) {
        assert_eq!(compute_check_digit(payload), expected);
    }

    #[rstest]
    #[case(b"79927398713", true)]
    #[case(b"79927398710", false)]
    #[case(b"490154203237518", true)]
    #[case(b"00", true)]
    #[case(b"0", false)]
    #[case(b"7992739871X", false)]
    fn test_validate(#[case] full: &[u8], #[case] expected: bool) {
        assert_eq!(validate(full), expected);
    }

    #[test]
    fn test_single_substitution_detected() {
        let mut rng = test_rng(11);
        for len in [8, 15, 18] {
            let mut full = random_digits(&mut rng, len);
            full.push(b'0' + compute_check_digit(&full));
            assert!(validate(&full));

            for mutated in substitutions(&full, DIGITS) {
                assert!(
                    !validate(&mutated),
                    "undetected: {:?}",
                    std::str::from_utf8(&mutated)
                );
            }
        }
    }

    #[test]
    fn test_known_blind_spot_09_transposition() {
        // Luhn cannot see 09 <-> 90; Verhoeff and Damm can.
        let mut full = b"1090".to_vec();
        full.push(b'0' + compute_check_digit(&full));
        full.swap(1, 2);
        assert!(validate(&full));
    }

    #[test]
    fn test_malformed_input_does_not_panic() {
        let _ = compute_check_digit(b"12-34");
        assert!(!validate("12ä4".as_bytes()));
    }
}
