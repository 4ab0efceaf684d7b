//! Runs every engine variant concurrently against one shared corpus.

use anyhow::{Context, Result};
use futures::future::try_join_all;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use super::engine::{engine_source, EngineLifecycle, EngineWidth};
use super::runner::{run_experiment, ExperimentResult};
use crate::config::AppConfig;
use crate::corpus::WordCorpus;

/// One point on the width × lifecycle grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    pub lifecycle: EngineLifecycle,
    pub width: EngineWidth,
}

/// Report order.
pub const VARIANTS: [Variant; 4] = [
    Variant {
        lifecycle: EngineLifecycle::Reuse,
        width: EngineWidth::Bits32,
    },
    Variant {
        lifecycle: EngineLifecycle::Reuse,
        width: EngineWidth::Bits64,
    },
    Variant {
        lifecycle: EngineLifecycle::Recreate,
        width: EngineWidth::Bits32,
    },
    Variant {
        lifecycle: EngineLifecycle::Recreate,
        width: EngineWidth::Bits64,
    },
];

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.lifecycle, self.width)
    }
}

impl Variant {
    /// Run this variant to completion on the calling thread.
    pub fn run(&self, corpus: &WordCorpus, config: &AppConfig) -> Result<ExperimentResult> {
        let started = Instant::now();
        let mut source = engine_source(corpus, &config.nickname, self.width, self.lifecycle)?;
        let result = run_experiment(source.as_mut(), &config.experiment)
            .with_context(|| format!("experiment {} failed", self))?;
        tracing::info!(
            label = %self,
            elapsed_secs = started.elapsed().as_secs_f64(),
            "experiment finished"
        );
        Ok(result)
    }
}

/// Run all [`VARIANTS`] on blocking worker threads. Results come back in
/// [`VARIANTS`] order. The first worker error is returned as soon as it
/// happens; the remaining workers are left running for the caller to exit on.
pub async fn run_all(
    corpus: Arc<WordCorpus>,
    config: Arc<AppConfig>,
) -> Result<Vec<(Variant, ExperimentResult)>> {
    run_variants(&VARIANTS, move |variant| variant.run(&corpus, &config)).await
}

async fn run_variants<F>(variants: &[Variant], job: F) -> Result<Vec<(Variant, ExperimentResult)>>
where
    F: Fn(Variant) -> Result<ExperimentResult> + Send + Sync + 'static,
{
    let job = Arc::new(job);
    let workers = variants.iter().map(|&variant| {
        let job = Arc::clone(&job);
        async move {
            let result = tokio::task::spawn_blocking(move || (*job)(variant))
                .await
                .with_context(|| format!("worker for {} panicked", variant))??;
            Ok::<_, anyhow::Error>((variant, result))
        }
    });
    try_join_all(workers).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExperimentConfig, NicknameOptions};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    fn small_config(initial_nicknames: usize, tries: usize) -> Arc<AppConfig> {
        Arc::new(AppConfig {
            experiment: ExperimentConfig {
                initial_nicknames,
                tries,
                progress_interval: 0,
            },
            ..AppConfig::default()
        })
    }

    fn corpus() -> Arc<WordCorpus> {
        Arc::new(WordCorpus::from_words([
            "sea", "sky", "owl", "elm", "tree", "reef", "moss", "lark", "river", "cedar", "maple",
            "forest", "meadow", "willow", "thistle", "juniper", "mangrove", "sunlight", "heather",
        ]))
    }

    #[test]
    fn test_variant_labels_in_report_order() {
        let labels: Vec<String> = VARIANTS.iter().map(ToString::to_string).collect();
        assert_eq!(
            labels,
            ["REUSE/32BIT", "REUSE/64BIT", "RECREATE/32BIT", "RECREATE/64BIT"]
        );
    }

    #[tokio::test]
    async fn test_concurrent_run_leaves_corpus_untouched() {
        let corpus = corpus();
        let before = corpus.bucket_sizes();
        let snapshot = (*corpus).clone();

        let results = run_all(Arc::clone(&corpus), small_config(2_000, 5_000))
            .await
            .unwrap();

        assert_eq!(corpus.bucket_sizes(), before);
        assert_eq!(*corpus, snapshot);
        assert_eq!(results.len(), 4);
        for ((variant, result), expected) in results.iter().zip(VARIANTS) {
            assert_eq!(*variant, expected);
            assert_eq!(result.total_trials, 5_000);
            assert!(result.collision_count <= result.total_trials);
            assert!((0.0..=100.0).contains(&result.collision_percentage));
        }
    }

    #[tokio::test]
    async fn test_empty_population_reports_no_collisions() {
        let results = run_all(corpus(), small_config(0, 1_000)).await.unwrap();
        for (_, result) in results {
            assert_eq!(result.total_trials, 1_000);
            assert_eq!(result.collision_count, 0);
        }
    }

    #[tokio::test]
    async fn test_collision_rates_agree_across_engine_widths() {
        // Three 3-letter words, never mangled: only "Cat", "Dog" and "Owl"
        // exist, so two of them in the set make about two thirds of draws hit.
        let corpus = Arc::new(WordCorpus::from_words(["cat", "dog", "owl"]));
        let config = Arc::new(AppConfig {
            nickname: NicknameOptions {
                min_len: 3,
                max_len: 3,
                min_word_len: 3,
                max_word_len: 3,
                mangling_factor: 1000.0,
            },
            experiment: ExperimentConfig {
                initial_nicknames: 2,
                tries: 3_000,
                progress_interval: 0,
            },
            ..AppConfig::default()
        });

        let results = run_all(corpus, config).await.unwrap();
        let rate = |lifecycle: EngineLifecycle, width: EngineWidth| {
            results
                .iter()
                .find(|(v, _)| v.lifecycle == lifecycle && v.width == width)
                .map(|(_, r)| r.collision_percentage)
                .unwrap()
        };
        for lifecycle in [EngineLifecycle::Reuse, EngineLifecycle::Recreate] {
            let narrow = rate(lifecycle, EngineWidth::Bits32);
            let wide = rate(lifecycle, EngineWidth::Bits64);
            assert!(narrow > 0.0 && wide > 0.0, "{}: {} vs {}", lifecycle, narrow, wide);
            assert!(narrow <= 100.0 && wide <= 100.0);
            let ratio = narrow.max(wide) / narrow.min(wide);
            assert!(ratio < 10.0, "{}: {} vs {}", lifecycle, narrow, wide);
        }
    }

    #[tokio::test]
    async fn test_first_failure_returns_without_waiting_for_others() {
        let release = Arc::new(AtomicBool::new(false));
        let held = Arc::clone(&release);
        let run = run_variants(&VARIANTS, move |variant| {
            if variant == VARIANTS[2] {
                anyhow::bail!("entropy source unavailable");
            }
            let started = Instant::now();
            while !held.load(Ordering::SeqCst) && started.elapsed() < Duration::from_secs(30) {
                std::thread::sleep(Duration::from_millis(5));
            }
            Ok(ExperimentResult::new(0, 0))
        });

        let outcome = tokio::time::timeout(Duration::from_secs(10), run).await;
        release.store(true, Ordering::SeqCst);
        let err = outcome.expect("error should arrive before slow workers finish").unwrap_err();
        assert!(err.to_string().contains("entropy source unavailable"));
    }

    #[tokio::test]
    async fn test_unusable_corpus_fails_the_run() {
        let corpus = Arc::new(WordCorpus::from_words(["breakthrough"]));
        assert!(run_all(corpus, small_config(10, 10)).await.is_err());
    }
}
