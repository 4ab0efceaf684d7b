mod config;
mod corpus;
mod error;
mod experiment;
mod logging;
mod sampling;

use crate::corpus::WordCorpus;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Optional first argument: word list path
    let word_list = std::env::args_os().nth(1).map(PathBuf::from);

    let cfg = config::load_config(word_list)?;
    logging::init(&cfg.logging);

    if let Err(e) = run(cfg).await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn load_corpus(path: &Path) -> Result<WordCorpus> {
    let corpus = WordCorpus::load(path).context("failed to load word list")?;
    if corpus.is_empty() {
        anyhow::bail!("no usable words in {}", path.display());
    }
    Ok(corpus)
}

async fn run(cfg: config::AppConfig) -> Result<()> {
    let corpus = load_corpus(&cfg.word_list)?;
    logging::report_corpus(&corpus);

    let results = experiment::run_all(Arc::new(corpus), Arc::new(cfg)).await?;
    for (variant, result) in &results {
        logging::report_result(variant, result);
    }
    Ok(())
}
