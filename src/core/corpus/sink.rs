//! Chunk persistence.
//!
//! The pipeline hands every strategy's chunks to a [`ChunkSink`]. The
//! on-disk layout is one pretty-printed JSON array per paper and
//! strategy: `<output_dir>/<strategy>/<arxiv_id>.json`.

use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::core::corpus::pipeline::RunSummary;
use crate::core::error::{ChunkError, Result};
use crate::core::types::{Chunk, ChunkingStrategy};

/// Destination for chunk sequences and run summaries
#[async_trait]
pub trait ChunkSink: Send + Sync {
    /// Persist the chunks one strategy produced for one paper
    async fn write(&self, strategy: ChunkingStrategy, id: &str, chunks: &[Chunk]) -> Result<()>;

    /// Persist the end-of-run summary
    async fn write_summary(&self, summary: &RunSummary) -> Result<()>;
}

/// Writes chunk files and the summary as JSON on disk
#[derive(Debug, Clone)]
pub struct JsonDirSink {
    output_dir: PathBuf,
    summary_file: PathBuf,
}

impl JsonDirSink {
    pub fn new(output_dir: impl Into<PathBuf>, summary_file: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            summary_file: summary_file.into(),
        }
    }

    /// Path of the chunk file for `strategy` and paper `id`
    pub fn chunk_path(&self, strategy: ChunkingStrategy, id: &str) -> PathBuf {
        self.output_dir
            .join(strategy.as_str())
            .join(format!("{id}.json"))
    }

    pub fn summary_file(&self) -> &Path {
        &self.summary_file
    }
}

async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            ChunkError::OutputError(format!("Failed to create directory {parent:?}: {e}"))
        })?;
    }

    let json = serde_json::to_string_pretty(value)?;
    tokio::fs::write(path, json)
        .await
        .map_err(|e| ChunkError::OutputError(format!("Failed to write {path:?}: {e}")))
}

#[async_trait]
impl ChunkSink for JsonDirSink {
    async fn write(&self, strategy: ChunkingStrategy, id: &str, chunks: &[Chunk]) -> Result<()> {
        let path = self.chunk_path(strategy, id);
        write_json(&path, chunks).await?;
        tracing::debug!("Wrote {} {} chunks to {:?}", chunks.len(), strategy, path);
        Ok(())
    }

    async fn write_summary(&self, summary: &RunSummary) -> Result<()> {
        write_json(&self.summary_file, summary).await?;
        tracing::info!("Summary written to {:?}", self.summary_file);
        Ok(())
    }
}

/// Keeps everything in memory. Used by tests and dry runs.
#[derive(Debug, Default)]
pub struct MemorySink {
    chunks: Mutex<BTreeMap<(ChunkingStrategy, String), Vec<Chunk>>>,
    summary: Mutex<Option<RunSummary>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chunks written for `strategy` and paper `id`
    pub fn chunks(&self, strategy: ChunkingStrategy, id: &str) -> Option<Vec<Chunk>> {
        self.chunks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&(strategy, id.to_string()))
            .cloned()
    }

    /// Number of (strategy, paper) records written
    pub fn len(&self) -> usize {
        self.chunks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn summary(&self) -> Option<RunSummary> {
        self.summary
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl ChunkSink for MemorySink {
    async fn write(&self, strategy: ChunkingStrategy, id: &str, chunks: &[Chunk]) -> Result<()> {
        self.chunks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert((strategy, id.to_string()), chunks.to_vec());
        Ok(())
    }

    async fn write_summary(&self, summary: &RunSummary) -> Result<()> {
        *self
            .summary
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(summary.clone());
        Ok(())
    }
}
