//! Shared test helpers for the idcheck workspace.
//!
//! Provides fixed seeds for reproducible generation tests and iterators that
//! inject the transcription errors check symbols are meant to catch.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeds used by every seeded round-trip test.
pub const SEEDS: [u64; 4] = [0, 7, 42, 0xDEAD_BEEF];

/// Decimal digit alphabet.
pub const DIGITS: &[u8] = b"0123456789";

/// Returns a deterministic RNG for test data.
pub fn test_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws `len` symbols uniformly from `alphabet`.
pub fn random_symbols<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8], len: usize) -> Vec<u8> {
    (0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect()
}

/// Draws `len` decimal digits.
pub fn random_digits<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<u8> {
    random_symbols(rng, DIGITS, len)
}

/// Every sequence that differs from `input` in exactly one position.
pub fn substitutions<'a>(
    input: &'a [u8],
    alphabet: &'a [u8],
) -> impl Iterator<Item = Vec<u8>> + 'a {
    (0..input.len()).flat_map(move |pos| {
        alphabet
            .iter()
            .copied()
            .filter(move |&symbol| symbol != input[pos])
            .map(move |symbol| {
                let mut mutated = input.to_vec();
                mutated[pos] = symbol;
                mutated
            })
    })
}

/// Every sequence obtained by swapping two distinct neighbouring symbols.
pub fn adjacent_transpositions(input: &[u8]) -> impl Iterator<Item = Vec<u8>> + '_ {
    (0..input.len().saturating_sub(1))
        .filter(move |&pos| input[pos] != input[pos + 1])
        .map(move |pos| {
            let mut swapped = input.to_vec();
            swapped.swap(pos, pos + 1);
            swapped
        })
}
