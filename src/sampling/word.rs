//! Word selection and mangling.

use rand::RngExt;

use super::chars::{sample_ascii_alnum, sample_ascii_lower};
use crate::corpus::{WordCorpus, MAX_WORD_LEN};
use crate::error::SamplingError;

/// Pick one word uniformly among every corpus word whose length lies in
/// `min_len..=max_len`. Each eligible word is equally likely regardless of
/// which bucket holds it.
pub fn sample_word<R: RngExt + ?Sized>(
    rng: &mut R,
    corpus: &WordCorpus,
    min_len: usize,
    max_len: usize,
) -> Result<String, SamplingError> {
    let lengths = min_len..=max_len.min(MAX_WORD_LEN);
    let num_candidates: usize = lengths.clone().map(|len| corpus.bucket(len).len()).sum();
    if num_candidates == 0 {
        tracing::error!(min_len, max_len, "there are no words to sample");
        return Err(SamplingError::NoEligibleWords { min_len, max_len });
    }

    let mut idx = rng.random_range(0..num_candidates);
    for len in lengths {
        let bucket = corpus.bucket(len);
        if idx < bucket.len() {
            return Ok(bucket[idx].clone());
        }
        idx -= bucket.len();
    }
    unreachable!("index {} lies within the {} counted candidates", idx, num_candidates)
}

/// Number of characters [`mangle`] replaces in a word of `len` characters.
pub fn mangling_magnitude(len: usize, mangling_factor: f64) -> usize {
    ((len as f64 / mangling_factor).round() as usize).min(len)
}

/// Choose `count` distinct positions in `0..len` by partial Fisher-Yates.
fn pick_positions<R: RngExt + ?Sized>(rng: &mut R, len: usize, count: usize) -> Vec<usize> {
    let mut remaining: Vec<usize> = (0..len).collect();
    let mut picked = Vec::with_capacity(count);
    for _ in 0..count.min(len) {
        let idx = rng.random_range(0..remaining.len());
        picked.push(remaining.swap_remove(idx));
    }
    picked
}

/// Replace `round(len / mangling_factor)` distinct characters of `word`.
///
/// Position 0 gets a lowercase letter; any other position gets an
/// alphanumeric folded to lowercase. The length never changes.
pub fn mangle<R: RngExt + ?Sized>(rng: &mut R, word: &str, mangling_factor: f64) -> String {
    let mut bytes = word.as_bytes().to_vec();
    let count = mangling_magnitude(bytes.len(), mangling_factor);
    for pos in pick_positions(rng, bytes.len(), count) {
        let ch = if pos == 0 {
            sample_ascii_lower(rng)
        } else {
            sample_ascii_alnum(rng).to_ascii_lowercase()
        };
        bytes[pos] = ch as u8;
    }
    // Corpus words are ASCII and replacements are ASCII.
    bytes.into_iter().map(char::from).collect()
}

/// [`sample_word`] followed by [`mangle`].
pub fn sample_and_mangle_word<R: RngExt + ?Sized>(
    rng: &mut R,
    corpus: &WordCorpus,
    min_len: usize,
    max_len: usize,
    mangling_factor: f64,
) -> Result<String, SamplingError> {
    let word = sample_word(rng, corpus, min_len, max_len)?;
    Ok(mangle(rng, &word, mangling_factor))
}
