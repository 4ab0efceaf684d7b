use std::collections::HashSet;

use super::engine::NicknameSource;
use crate::config::ExperimentConfig;
use crate::error::SamplingError;

/// Outcome of one experiment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperimentResult {
    pub total_trials: usize,
    pub collision_count: usize,
    /// `100 * collision_count / total_trials`, or 0 when no trial ran.
    pub collision_percentage: f64,
}

impl ExperimentResult {
    pub fn new(total_trials: usize, collision_count: usize) -> Self {
        let collision_percentage = if total_trials == 0 {
            0.0
        } else {
            collision_count as f64 / total_trials as f64 * 100.0
        };
        Self {
            total_trials,
            collision_count,
            collision_percentage,
        }
    }
}

/// Populate a set with `initial_nicknames` distinct nicknames, then count how
/// many of `tries` further draws are already in it.
///
/// Loops forever if `source` cannot produce enough distinct nicknames.
pub fn run_experiment<S: NicknameSource + ?Sized>(
    source: &mut S,
    config: &ExperimentConfig,
) -> Result<ExperimentResult, SamplingError> {
    let mut nicknames: HashSet<String> = HashSet::with_capacity(config.initial_nicknames);
    let mut draws = 0usize;
    while nicknames.len() < config.initial_nicknames {
        nicknames.insert(source.next_nickname()?);
        draws += 1;
        if config.progress_interval > 0 && draws % config.progress_interval == 0 {
            tracing::debug!(draws, distinct = nicknames.len(), "population progress");
        }
    }
    tracing::debug!(draws, distinct = nicknames.len(), "population phase done");

    let nicknames = nicknames;
    let mut collisions = 0usize;
    for trial in 1..=config.tries {
        if nicknames.contains(&source.next_nickname()?) {
            collisions += 1;
        }
        if config.progress_interval > 0 && trial % config.progress_interval == 0 {
            tracing::debug!(trial, collisions, "trial progress");
        }
    }
    tracing::debug!(tries = config.tries, collisions, "trial phase done");

    Ok(ExperimentResult::new(config.tries, collisions))
}
