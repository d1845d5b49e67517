//! Batch chunking pipeline.
//!
//! Coordinates a corpus run:
//! 1. Walk the text directory for paper ids
//! 2. Load each paper's text and metadata
//! 3. Run every configured strategy
//! 4. Persist each strategy's chunks and count the successes
//! 5. Write the run summary
//!
//! Papers are chunked on blocking worker threads, at most
//! `limits.max_concurrent_documents` at a time. Each worker returns its
//! own partial [`RunStats`]; partials are merged here as workers finish.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::core::chunker::StrategyDispatcher;
use crate::core::config::Config;
use crate::core::corpus::loader::CorpusLoader;
use crate::core::corpus::sink::{ChunkSink, JsonDirSink};
use crate::core::corpus::walker::FileWalker;
use crate::core::error::Result;
use crate::core::stats::RunStats;
use crate::core::types::{Chunk, ChunkingStrategy};

/// Outcome of a corpus run, as written to the summary file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    #[serde(flatten)]
    pub stats: RunStats,

    /// Paper text files found by the walker
    pub papers_found: usize,

    pub duration_ms: u64,
    pub completed_at: DateTime<Utc>,
}

impl RunSummary {
    /// Stamp final counters with the completion time
    pub fn finish(stats: RunStats, papers_found: usize, duration_ms: u64) -> Self {
        Self {
            stats,
            papers_found,
            duration_ms,
            completed_at: Utc::now(),
        }
    }
}

/// Shared, read-only state handed to every worker
struct Worker {
    loader: CorpusLoader,
    dispatcher: StrategyDispatcher,
    strategies: Vec<ChunkingStrategy>,
    sink: Arc<dyn ChunkSink>,
}

/// Orchestrates a chunking run over a corpus directory
pub struct ChunkingPipeline {
    walker: FileWalker,
    text_dir: PathBuf,
    max_concurrent: usize,
    worker: Arc<Worker>,
}

impl ChunkingPipeline {
    /// Build a pipeline writing to the JSON layout under
    /// `corpus.output_dir`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let sink = JsonDirSink::new(&config.corpus.output_dir, &config.corpus.summary_file);
        Self::new(config, Arc::new(sink))
    }

    /// Build a pipeline writing to `sink`.
    ///
    /// `config` should already be validated; invalid glob patterns are
    /// reported here.
    pub fn new(config: &Config, sink: Arc<dyn ChunkSink>) -> Result<Self> {
        let corpus = &config.corpus;
        let walker = FileWalker::new(
            corpus.include_patterns.clone(),
            corpus.exclude_patterns.clone(),
            corpus.max_file_size_mb,
        )?;

        Ok(Self {
            walker,
            text_dir: corpus.text_dir.clone(),
            max_concurrent: config.limits.max_concurrent_documents.max(1),
            worker: Arc::new(Worker {
                loader: CorpusLoader::new(&corpus.text_dir, &corpus.metadata_dir),
                dispatcher: StrategyDispatcher::new(&config.chunking),
                strategies: config.chunking.strategies.clone(),
                sink,
            }),
        })
    }

    /// Chunk every paper in the corpus and write the run summary.
    ///
    /// Per-paper failures are logged and counted, never returned. Only
    /// an invalid walk or a failed summary write fails the run.
    pub async fn run(&self) -> Result<RunSummary> {
        let start = Instant::now();

        tracing::info!("Starting paper chunking from {:?}", self.text_dir);
        let ids = self.walker.collect_ids(&self.text_dir)?;
        tracing::info!("Found {} papers to chunk", ids.len());

        let papers_found = ids.len();
        let stats = self.process_ids(ids).await;
        let summary = RunSummary::finish(stats, papers_found, start.elapsed().as_millis() as u64);

        log_summary(&summary);
        self.worker.sink.write_summary(&summary).await?;

        Ok(summary)
    }

    /// Chunk the given papers and return the merged counters
    pub async fn process_ids(&self, ids: Vec<String>) -> RunStats {
        let total = ids.len();
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));
        let mut tasks = JoinSet::new();

        for id in ids {
            let semaphore = Arc::clone(&semaphore);
            let worker = Arc::clone(&self.worker);
            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await;
                worker.process(id).await
            });
        }

        let mut stats = RunStats::new();
        let mut done = 0;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(partial) => stats.merge(&partial),
                Err(e) => tracing::error!("Chunking worker failed: {}", e),
            }

            done += 1;
            if done % 100 == 0 {
                tracing::info!("Progress: {}/{} papers processed", done, total);
            }
        }

        stats
    }
}

impl Worker {
    /// Load, chunk and persist one paper. Returns this paper's counts.
    async fn process(self: Arc<Self>, id: String) -> RunStats {
        let mut stats = RunStats::new();

        let worker = Arc::clone(&self);
        let load_id = id.clone();
        let chunked = tokio::task::spawn_blocking(move || worker.chunk(&load_id)).await;

        let results = match chunked {
            Ok(Ok(results)) => results,
            Ok(Err(e)) => {
                if e.is_skippable() {
                    tracing::warn!("Skipping {}: {}", id, e);
                } else {
                    tracing::error!("Error processing {}: {}", id, e);
                }
                stats.record_skip();
                return stats;
            }
            Err(e) => {
                tracing::error!("Chunking task for {} failed: {}", id, e);
                stats.record_skip();
                return stats;
            }
        };

        let mut persisted = false;
        for (strategy, chunks) in results {
            match self.sink.write(strategy, &id, &chunks).await {
                Ok(()) => {
                    stats.record(strategy, chunks.len());
                    persisted = true;
                }
                Err(e) => {
                    tracing::error!("Failed to save {} chunks for {}: {}", strategy, id, e);
                }
            }
        }

        if persisted {
            stats.record_paper();
        }
        stats
    }

    fn chunk(&self, id: &str) -> Result<Vec<(ChunkingStrategy, Vec<Chunk>)>> {
        let document = self.loader.load(id)?;
        tracing::debug!("Chunking paper: {}", id);

        Ok(self
            .strategies
            .iter()
            .map(|strategy| (*strategy, self.dispatcher.chunk_document(*strategy, &document)))
            .collect())
    }
}

fn log_summary(summary: &RunSummary) {
    let stats = &summary.stats;
    tracing::info!(
        "Chunking complete: {} papers processed, {} skipped, {} chunks in {}ms",
        stats.papers_processed,
        stats.papers_skipped,
        stats.total_chunks(),
        summary.duration_ms
    );
    for (counter, value) in stats.snapshot() {
        tracing::info!("  {counter}: {value}");
    }
}
