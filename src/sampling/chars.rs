//! Single-character draws.

use rand::RngExt;

const NUM_DIGITS: u8 = b'9' - b'0' + 1;
const NUM_LETTERS: u8 = b'Z' - b'A' + 1;

/// Size of the `[0-9A-Za-z]` alphabet.
pub const ALNUM_LEN: u8 = NUM_DIGITS + NUM_LETTERS * 2;

/// Uniform draw over the 62 symbols `[0-9A-Za-z]`.
pub fn sample_ascii_alnum<R: RngExt + ?Sized>(rng: &mut R) -> char {
    let idx = rng.random_range(0..ALNUM_LEN);
    let byte = if idx < NUM_DIGITS {
        b'0' + idx
    } else if idx < NUM_DIGITS + NUM_LETTERS {
        b'A' + (idx - NUM_DIGITS)
    } else {
        b'a' + (idx - NUM_DIGITS - NUM_LETTERS)
    };
    char::from(byte)
}

/// Uniform draw over `a..=z`.
pub fn sample_ascii_lower<R: RngExt + ?Sized>(rng: &mut R) -> char {
    char::from(rng.random_range(b'a'..=b'z'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;
    use std::collections::HashMap;

    #[test]
    fn test_alnum_is_uniform_over_62_symbols() {
        let mut rng = Pcg64::seed_from_u64(0x5eed);
        let draws = 620_000;
        let mut counts: HashMap<char, usize> = HashMap::new();
        for _ in 0..draws {
            *counts.entry(sample_ascii_alnum(&mut rng)).or_default() += 1;
        }

        assert_eq!(counts.len(), ALNUM_LEN as usize);
        // Expected 10_000 per symbol with a standard deviation near 100.
        let expected = draws / ALNUM_LEN as usize;
        for (ch, count) in &counts {
            assert!(ch.is_ascii_alphanumeric(), "unexpected symbol {:?}", ch);
            assert!(
                count.abs_diff(expected) < 600,
                "symbol {:?} drawn {} times, expected about {}",
                ch,
                count,
                expected
            );
        }
    }

    #[test]
    fn test_lower_stays_in_range() {
        let mut rng = Pcg64::seed_from_u64(7);
        let mut seen = [false; 26];
        for _ in 0..10_000 {
            let ch = sample_ascii_lower(&mut rng);
            assert!(ch.is_ascii_lowercase());
            seen[(ch as u8 - b'a') as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
