//! Candidate universe generation and secret sampling
//!
//! The universe for length `L` is every sequence of `L` pairwise-distinct
//! decimal digits: `10 × 9 × … × (10 − L + 1)` sequences.

use super::SolveError;
use crate::core::{DigitSequence, MAX_LENGTH};
use rand::Rng;
use rand::seq::SliceRandom;

/// Number of sequences in the universe for `length` (0 when out of range)
///
/// # Examples
/// ```
/// use bulls_cows::solver::universe_size;
///
/// assert_eq!(universe_size(4), 5040);
/// assert_eq!(universe_size(10), 3_628_800);
/// assert_eq!(universe_size(11), 0);
/// ```
#[must_use]
pub const fn universe_size(length: usize) -> usize {
    if length == 0 || length > MAX_LENGTH {
        return 0;
    }

    let mut size = 1;
    let mut i = 0;
    while i < length {
        size *= 10 - i;
        i += 1;
    }
    size
}

/// Enumerate every distinct-digit sequence of `length`
///
/// Sequences come out in ascending lexicographic order (`0123`, `0124`, …),
/// leading zeros included. Lengths outside 1..=10 yield an empty universe.
#[must_use]
pub fn generate(length: usize) -> Vec<DigitSequence> {
    let mut universe = Vec::with_capacity(universe_size(length));
    if universe_size(length) == 0 {
        return universe;
    }

    let mut digits = [0u8; MAX_LENGTH];
    extend(&mut universe, &mut digits, 0, length, 0);
    universe
}

/// Fill position `depth` with every unused digit and recurse
fn extend(
    out: &mut Vec<DigitSequence>,
    digits: &mut [u8; MAX_LENGTH],
    depth: usize,
    length: usize,
    used: u16,
) {
    if depth == length {
        out.push(DigitSequence::from_parts(*digits, length, used));
        return;
    }

    for digit in 0..10u8 {
        let bit = 1u16 << digit;
        if used & bit == 0 {
            digits[depth] = digit;
            extend(out, digits, depth + 1, length, used | bit);
        }
    }
}

/// Sample a secret by shuffling the digit alphabet and keeping a prefix
///
/// # Errors
/// Returns `SolveError::InvalidLength` if `length` is outside 1..=10.
pub fn random_secret<R: Rng + ?Sized>(
    length: usize,
    rng: &mut R,
) -> Result<DigitSequence, SolveError> {
    if universe_size(length) == 0 {
        return Err(SolveError::InvalidLength(length));
    }

    let mut alphabet = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    alphabet.shuffle(rng);

    let mut digits = [0u8; MAX_LENGTH];
    digits[..length].copy_from_slice(&alphabet[..length]);
    let mask = digits[..length].iter().fold(0u16, |m, &d| m | (1 << d));

    Ok(DigitSequence::from_parts(digits, length, mask))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rustc_hash::FxHashSet;

    #[test]
    fn universe_sizes_match_formula() {
        let expected = [
            0, 10, 90, 720, 5040, 30240, 151_200, 604_800, 1_814_400, 3_628_800, 3_628_800,
        ];
        for (length, &size) in expected.iter().enumerate() {
            assert_eq!(universe_size(length), size, "length {length}");
        }
    }

    #[test]
    fn generate_counts_and_distinctness() {
        // Longer lengths only get count and mask checks below
        for length in 1..=7 {
            let universe = generate(length);
            assert_eq!(universe.len(), universe_size(length));

            let unique: FxHashSet<_> = universe.iter().collect();
            assert_eq!(unique.len(), universe.len());

            for seq in &universe {
                assert_eq!(seq.len(), length);
                assert_eq!(seq.mask().count_ones() as usize, length);
            }
        }
    }

    #[test]
    fn generate_long_lengths() {
        for length in 8..=9 {
            let universe = generate(length);
            assert_eq!(universe.len(), universe_size(length));
            assert!(
                universe
                    .iter()
                    .all(|seq| seq.mask().count_ones() as usize == length)
            );
        }
    }

    #[test]
    fn generate_full_length() {
        let universe = generate(10);
        assert_eq!(universe.len(), 3_628_800);
        assert!(universe.iter().all(|seq| seq.mask() == 0b11_1111_1111));
        assert_eq!(universe[0].to_string(), "0123456789");
        assert_eq!(universe[universe.len() - 1].to_string(), "9876543210");
    }

    #[test]
    fn generate_is_ascending_with_leading_zero() {
        let universe = generate(4);
        assert_eq!(universe[0].to_string(), "0123");
        assert_eq!(universe[1].to_string(), "0124");
        assert_eq!(universe.last().unwrap().to_string(), "9876");
        assert!(
            universe
                .windows(2)
                .all(|w| w[0].to_string() < w[1].to_string())
        );
    }

    #[test]
    fn generate_matches_numeric_scan() {
        // Scan the zero-padded range 012..=987 and keep distinct-digit entries
        let scanned: Vec<String> = (12..=987)
            .map(|n| format!("{n:03}"))
            .filter(|s| DigitSequence::new(s).is_ok())
            .collect();
        let generated: Vec<String> = generate(3).iter().map(ToString::to_string).collect();
        assert_eq!(generated, scanned);
    }

    #[test]
    fn generate_out_of_range_is_empty() {
        assert!(generate(0).is_empty());
        assert!(generate(11).is_empty());
    }

    #[test]
    fn generated_sequences_equal_parsed_ones() {
        let universe = generate(4);
        let parsed = DigitSequence::new("4271").unwrap();
        assert!(universe.contains(&parsed));
    }

    #[test]
    fn random_secret_has_distinct_digits() {
        let mut rng = StdRng::seed_from_u64(7);
        for length in 1..=10 {
            let secret = random_secret(length, &mut rng).unwrap();
            assert_eq!(secret.len(), length);
            assert_eq!(secret.mask().count_ones() as usize, length);
        }
    }

    #[test]
    fn random_secret_is_reproducible() {
        let a = random_secret(4, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = random_secret(4, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn random_secret_rejects_bad_length() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            random_secret(0, &mut rng),
            Err(SolveError::InvalidLength(0))
        );
        assert_eq!(
            random_secret(11, &mut rng),
            Err(SolveError::InvalidLength(11))
        );
    }
}
