//! Diagnostic logging and result reporting.
//!
//! Output goes through `tracing`. The filter is taken from `RUST_LOG` when it
//! is set, otherwise from the `[logging] level` config entry.

use crate::config::LoggingConfig;
use crate::corpus::WordCorpus;
use crate::experiment::{ExperimentResult, Variant};
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_thread_names(true)
        .try_init();
}

/// Log bucket populations of the loaded corpus.
pub fn report_corpus(corpus: &WordCorpus) {
    tracing::info!(total = corpus.len(), buckets = %corpus, "word corpus loaded");
}

/// Log one experiment outcome.
pub fn report_result(variant: &Variant, result: &ExperimentResult) {
    tracing::info!(
        label = %variant,
        total_trials = result.total_trials,
        collision_count = result.collision_count,
        collision_percentage = result.collision_percentage,
        "[{}] collision rate = {}% ({}/{})",
        variant,
        result.collision_percentage,
        result.collision_count,
        result.total_trials
    );
}
