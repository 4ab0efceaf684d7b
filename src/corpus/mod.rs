//! Length-bucketed word corpus.
//!
//! Words are read once at startup from a line-oriented source where each entry
//! is wrapped in a single delimiter character on each side (e.g. `"apple"`).
//! The corpus is immutable afterwards and shared read-only between all
//! experiment workers.

use crate::error::CorpusError;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Longest word length kept in the corpus. Bucket indices run `0..=MAX_WORD_LEN`.
pub const MAX_WORD_LEN: usize = 12;

/// Candidate words bucketed by length: `buckets[n]` only holds words of length `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCorpus {
    buckets: [Vec<String>; MAX_WORD_LEN + 1],
}

impl WordCorpus {
    /// Build a corpus from bare words, dropping any that are too long or not ASCII.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut corpus = Self {
            buckets: Default::default(),
        };
        for word in words {
            corpus.insert(word.into());
        }
        corpus
    }

    /// Read delimited entries line by line, stripping exactly one character
    /// from each end.
    ///
    /// Lines are read as raw bytes. Lines with any non-ASCII byte (including
    /// invalid UTF-8) are skipped, as are lines shorter than two characters
    /// and entries longer than [`MAX_WORD_LEN`]. A trailing `\r` is dropped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, CorpusError> {
        let mut words = Vec::new();
        for line in reader.split(b'\n') {
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            if !line.is_ascii() || line.len() < 2 {
                continue;
            }
            let word: String = line[1..line.len() - 1].iter().copied().map(char::from).collect();
            words.push(word);
        }
        Ok(Self::from_words(words))
    }

    /// Open `path` and load it with [`WordCorpus::from_reader`].
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let file = File::open(path).map_err(|source| CorpusError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    fn insert(&mut self, word: String) {
        if !word.is_ascii() {
            return;
        }
        if let Some(bucket) = self.buckets.get_mut(word.len()) {
            bucket.push(word);
        }
    }

    /// Words of exactly `len` characters. Empty for lengths past [`MAX_WORD_LEN`].
    pub fn bucket(&self, len: usize) -> &[String] {
        self.buckets.get(len).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn bucket_sizes(&self) -> [usize; MAX_WORD_LEN + 1] {
        std::array::from_fn(|len| self.buckets[len].len())
    }

    /// Total number of words across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}

/// Renders bucket populations as `{ [0]=n, [1]=n, ... }`.
impl fmt::Display for WordCorpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for (len, size) in self.bucket_sizes().iter().enumerate() {
            if len > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[{}]={}", len, size)?;
        }
        write!(f, " }}")
    }
}
