//! Run statistics.
//!
//! Counters are an explicit value owned by whoever drives a batch.
//! Parallel workers each fill their own `RunStats` and the driver
//! folds them together with [`RunStats::merge`] at a single point.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::types::ChunkingStrategy;

/// Per-run counters: papers processed and chunks per strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Papers with at least one successful strategy run
    pub papers_processed: usize,

    /// Papers skipped because their input could not be loaded
    pub papers_skipped: usize,

    pub recursive_chunks: usize,
    pub token_based_chunks: usize,
    pub section_based_chunks: usize,
    pub hybrid_chunks: usize,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one successful strategy run that produced `chunks` chunks
    pub fn record(&mut self, strategy: ChunkingStrategy, chunks: usize) {
        *self.counter_mut(strategy) += chunks;
    }

    /// Count one processed paper
    pub fn record_paper(&mut self) {
        self.papers_processed += 1;
    }

    /// Count one skipped paper
    pub fn record_skip(&mut self) {
        self.papers_skipped += 1;
    }

    /// Chunks produced so far by `strategy`
    pub fn chunks_for(&self, strategy: ChunkingStrategy) -> usize {
        match strategy {
            ChunkingStrategy::Recursive => self.recursive_chunks,
            ChunkingStrategy::TokenBased => self.token_based_chunks,
            ChunkingStrategy::SectionBased => self.section_based_chunks,
            ChunkingStrategy::Hybrid => self.hybrid_chunks,
        }
    }

    /// Chunks produced across all strategies
    pub fn total_chunks(&self) -> usize {
        ChunkingStrategy::ALL
            .iter()
            .map(|s| self.chunks_for(*s))
            .sum()
    }

    /// Fold another worker's partial counts into this one
    pub fn merge(&mut self, other: &RunStats) {
        self.papers_processed += other.papers_processed;
        self.papers_skipped += other.papers_skipped;
        for strategy in ChunkingStrategy::ALL {
            self.record(strategy, other.chunks_for(strategy));
        }
    }

    /// Flat counter mapping: `papers_processed` plus `<strategy>_chunks`
    pub fn snapshot(&self) -> BTreeMap<String, usize> {
        let mut counters = BTreeMap::new();
        counters.insert("papers_processed".to_string(), self.papers_processed);
        for strategy in ChunkingStrategy::ALL {
            counters.insert(format!("{strategy}_chunks"), self.chunks_for(strategy));
        }
        counters
    }

    fn counter_mut(&mut self, strategy: ChunkingStrategy) -> &mut usize {
        match strategy {
            ChunkingStrategy::Recursive => &mut self.recursive_chunks,
            ChunkingStrategy::TokenBased => &mut self.token_based_chunks,
            ChunkingStrategy::SectionBased => &mut self.section_based_chunks,
            ChunkingStrategy::Hybrid => &mut self.hybrid_chunks,
        }
    }
}
