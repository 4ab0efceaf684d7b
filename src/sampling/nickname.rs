//! Nickname composition.
//!
//! A nickname is built by spending a randomly drawn length budget on pieces:
//! mangled corpus words while the budget allows one, then a run of random
//! characters for whatever is left. The pieces are shuffled before being
//! joined, so a word may land anywhere in the result.

use rand::seq::SliceRandom;
use rand::RngExt;

use super::chars::{sample_ascii_alnum, sample_ascii_lower};
use super::word::sample_and_mangle_word;
use crate::config::NicknameOptions;
use crate::corpus::WordCorpus;
use crate::error::SamplingError;

/// Generate one nickname. Its length always lies in
/// `options.min_len..=options.max_len`.
pub fn sample_nickname<R: RngExt + ?Sized>(
    rng: &mut R,
    corpus: &WordCorpus,
    options: &NicknameOptions,
) -> Result<String, SamplingError> {
    let mut pieces: Vec<String> = Vec::new();
    let mut budget = rng.random_range(options.min_len..=options.max_len);

    while budget > 0 {
        if budget < options.min_word_len {
            let mut piece = String::with_capacity(budget);
            piece.push(sample_ascii_lower(rng));
            for _ in 1..budget {
                piece.push(sample_ascii_alnum(rng));
            }
            budget = 0;
            pieces.push(piece);
        } else {
            let mut piece = sample_and_mangle_word(
                rng,
                corpus,
                options.min_word_len,
                options.max_word_len.min(budget),
                options.mangling_factor,
            )?;
            budget -= piece.len();
            if let Some(first) = piece.get_mut(..1) {
                first.make_ascii_uppercase();
            }
            pieces.push(piece);
        }
    }

    pieces.shuffle(rng);
    Ok(pieces.concat())
}
