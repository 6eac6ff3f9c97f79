//! GS1 weighted mod-10 check digit (GTIN-8/12/13/14, GLN, SSCC).

use crate::{digit_or_zero, is_checked_digits};

/// Longest GS1 payload (SSCC): 17 digits before the check digit.
pub const MAX_PAYLOAD_LEN: usize = 17;

/// Weights alternate 3, 1, 3, ... starting at the rightmost digit when
/// `rightmost_weight` is 3.
fn weighted_sum(digits: &[u8], rightmost_weight: u32) -> u32 {
    let other = 4 - rightmost_weight;
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &byte)| {
            let weight = if i % 2 == 0 { rightmost_weight } else { other };
            digit_or_zero(byte) as u32 * weight
        })
        .sum()
}

/// Computes the check digit (0-9) for `payload`.
pub fn compute_check_digit(payload: &[u8]) -> u8 {
    let sum = weighted_sum(payload, 3);
    ((10 - sum % 10) % 10) as u8
}

/// Validates a full sequence whose last digit is the check digit.
pub fn validate(full: &[u8]) -> bool {
    is_checked_digits(full) && weighted_sum(full, 1) % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use idcheck_testing::{random_digits, test_rng};
    use rstest::rstest;

    #[rstest]
    #[case(b"400638133393", 1)]
    #[case(b"10614141123456789", 7)]
    #[case(b"9638507", 4)]
    fn test_compute_check_digit(#[case] payload: &[u8], #[case] expected: u8) {
        assert_eq!(compute_check_digit(payload), expected);
    }

    #[rstest]
    #[case(b"4006381333931", true)]
    #[case(b"4006381333932", false)]
    #[case(b"106141411234567897", true)]
    #[case(b"96385074", true)]
    fn test_validate(#[case] full: &[u8], #[case] expected: bool) {
        assert_eq!(validate(full), expected);
    }

    #[test]
    fn test_recompute_reproduces_appended_digit() {
        let mut rng = test_rng(17);
        for _ in 0..200 {
            let mut full = random_digits(&mut rng, MAX_PAYLOAD_LEN);
            let check = compute_check_digit(&full);
            full.push(b'0' + check);

            assert!(validate(&full));
            assert_eq!(compute_check_digit(&full[..MAX_PAYLOAD_LEN]), check);
        }
    }
}
