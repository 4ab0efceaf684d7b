//! Domain errors.
//!
//! Every error here is terminal: the simulation is a one-shot batch job and
//! nothing is retried. `main` logs the error and exits with a non-zero status.

use std::io;
use std::path::PathBuf;

/// Failure while building the word corpus.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to open word list {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read word list: {0}")]
    Read(#[from] io::Error),
}

/// Failure while drawing a nickname.
#[derive(Debug, thiserror::Error)]
pub enum SamplingError {
    #[error("there are no words to sample (length {min_len}..={max_len})")]
    NoEligibleWords { min_len: usize, max_len: usize },
    #[error("entropy source unavailable: {0}")]
    Entropy(#[from] getrandom::Error),
}

/// Option combinations the generator cannot run with.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid nickname options: {0}")]
    Invalid(String),
}
