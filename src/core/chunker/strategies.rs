//! Strategy dispatch and chunk metadata tagging.
//!
//! All four strategies go through one entry point,
//! [`StrategyDispatcher::chunk`], and share the same tagging step, so
//! ordinals, `total_chunks` and offsets are assigned the same way
//! everywhere. The dispatcher holds no mutable state: the same input
//! always produces the same chunks.

use crate::core::chunker::sections::{Section, SectionDetector};
use crate::core::chunker::splitter::{BoundedSplitter, Span};
use crate::core::config::ChunkingConfig;
use crate::core::types::{
    Chunk, ChunkId, ChunkMetadata, ChunkingStrategy, Document, DocumentMetadata, HybridMode,
};

/// A chunk before the sequence length is known
struct Draft<'a> {
    span: Span,
    chunk_id: ChunkId,
    section: Option<&'a str>,
    is_subsection: Option<bool>,
    mode: Option<HybridMode>,
}

impl<'a> Draft<'a> {
    fn plain(span: Span, index: usize) -> Self {
        Self {
            span,
            chunk_id: ChunkId::Index(index),
            section: None,
            is_subsection: None,
            mode: None,
        }
    }
}

/// Runs chunking strategies over document text.
#[derive(Debug, Clone)]
pub struct StrategyDispatcher {
    config: ChunkingConfig,
    detector: SectionDetector,
    recursive: BoundedSplitter,
    token: BoundedSplitter,
    section: BoundedSplitter,
    hybrid: BoundedSplitter,
    whole_section_labels: Vec<String>,
}

impl StrategyDispatcher {
    /// Build a dispatcher from a validated chunking configuration.
    ///
    /// # Panics
    ///
    /// Panics if a splitter budget is zero or its overlap is not smaller
    /// than its size. [`crate::core::config::Config::validate`] rejects
    /// such configurations.
    pub fn new(config: &ChunkingConfig) -> Self {
        Self {
            detector: SectionDetector::new(config.include_front_matter),
            recursive: BoundedSplitter::new(config.recursive.chunk_size, config.recursive.overlap),
            token: BoundedSplitter::tokens(config.token.max_tokens, config.token.overlap),
            section: BoundedSplitter::new(config.section.chunk_size, config.section.overlap),
            hybrid: BoundedSplitter::new(config.hybrid.chunk_size, config.hybrid.overlap),
            whole_section_labels: config
                .hybrid
                .whole_section_labels
                .iter()
                .map(|label| label.to_lowercase())
                .collect(),
            config: config.clone(),
        }
    }

    /// The configuration this dispatcher was built from
    pub fn config(&self) -> &ChunkingConfig {
        &self.config
    }

    /// Detect the sections of `text` with this dispatcher's detector
    pub fn detect_sections<'a>(&self, text: &'a str) -> Vec<Section<'a>> {
        self.detector.detect(text)
    }

    /// Chunk `text` with `strategy`, tagging each chunk with `base`.
    ///
    /// Blank text yields an empty sequence.
    pub fn chunk(
        &self,
        strategy: ChunkingStrategy,
        text: &str,
        base: &DocumentMetadata,
    ) -> Vec<Chunk> {
        match strategy {
            ChunkingStrategy::Recursive => self.chunk_recursive(text, base),
            ChunkingStrategy::TokenBased => self.chunk_token_based(text, base),
            ChunkingStrategy::SectionBased => self.chunk_by_sections(text, base),
            ChunkingStrategy::Hybrid => self.chunk_hybrid(text, base),
        }
    }

    /// Chunk a loaded document with `strategy`
    pub fn chunk_document(&self, strategy: ChunkingStrategy, document: &Document) -> Vec<Chunk> {
        self.chunk(strategy, &document.text, &document.metadata)
    }

    /// Character-bounded recursive splitting of the whole document.
    pub fn chunk_recursive(&self, text: &str, base: &DocumentMetadata) -> Vec<Chunk> {
        let drafts = self
            .recursive
            .split(text)
            .into_iter()
            .enumerate()
            .map(|(idx, span)| Draft::plain(span, idx))
            .collect();

        self.finish(ChunkingStrategy::Recursive, text, base, drafts)
    }

    /// Approximate-token-bounded splitting of the whole document.
    pub fn chunk_token_based(&self, text: &str, base: &DocumentMetadata) -> Vec<Chunk> {
        let drafts = self
            .token
            .split(text)
            .into_iter()
            .enumerate()
            .map(|(idx, span)| Draft::plain(span, idx))
            .collect();

        self.finish(ChunkingStrategy::TokenBased, text, base, drafts)
    }

    /// One chunk per section; sections above the sub-split threshold are
    /// split and tagged with composite `"<section>_<sub>"` ids.
    pub fn chunk_by_sections(&self, text: &str, base: &DocumentMetadata) -> Vec<Chunk> {
        let threshold = self.config.section.subsplit_threshold;
        let mut drafts = Vec::new();

        for (section_idx, section) in self.detector.detect(text).iter().enumerate() {
            if section.text.chars().count() > threshold {
                for (sub_idx, span) in self.section.split(section.text).into_iter().enumerate() {
                    drafts.push(Draft {
                        span: shift(span, section.offset),
                        chunk_id: ChunkId::Sub {
                            section: section_idx,
                            sub: sub_idx,
                        },
                        section: Some(section.label),
                        is_subsection: Some(true),
                        mode: None,
                    });
                }
            } else {
                drafts.push(Draft {
                    span: section_span(section),
                    chunk_id: ChunkId::Index(section_idx),
                    section: Some(section.label),
                    is_subsection: Some(false),
                    mode: None,
                });
            }
        }

        self.finish(ChunkingStrategy::SectionBased, text, base, drafts)
    }

    /// Per-section strategy: summary-like sections are kept whole, the
    /// rest are split with the smaller hybrid budget. Short sections are
    /// skipped. One ordinal counter runs across the whole document.
    pub fn chunk_hybrid(&self, text: &str, base: &DocumentMetadata) -> Vec<Chunk> {
        let min_chars = self.config.hybrid.min_section_chars;
        let mut drafts: Vec<Draft> = Vec::new();

        for section in self.detector.detect(text) {
            if section.text.chars().count() < min_chars {
                tracing::trace!("Skipping short section '{}'", section.label);
                continue;
            }

            if self.keeps_whole(section.label) {
                drafts.push(Draft {
                    span: section_span(&section),
                    chunk_id: ChunkId::Index(drafts.len()),
                    section: Some(section.label),
                    is_subsection: None,
                    mode: Some(HybridMode::WholeSection),
                });
                continue;
            }

            for span in self.hybrid.split(section.text) {
                drafts.push(Draft {
                    span: shift(span, section.offset),
                    chunk_id: ChunkId::Index(drafts.len()),
                    section: Some(section.label),
                    is_subsection: None,
                    mode: Some(HybridMode::SmartSplit),
                });
            }
        }

        self.finish(ChunkingStrategy::Hybrid, text, base, drafts)
    }

    fn keeps_whole(&self, label: &str) -> bool {
        let label = label.to_lowercase();
        self.whole_section_labels.iter().any(|l| *l == label)
    }

    fn finish(
        &self,
        strategy: ChunkingStrategy,
        text: &str,
        base: &DocumentMetadata,
        drafts: Vec<Draft<'_>>,
    ) -> Vec<Chunk> {
        let total_chunks = drafts.len();
        let max_tokens =
            (strategy == ChunkingStrategy::TokenBased).then_some(self.config.token.max_tokens);

        drafts
            .into_iter()
            .map(|draft| Chunk {
                content: draft.span.slice(text).to_string(),
                metadata: ChunkMetadata {
                    document: base.clone(),
                    chunk_id: draft.chunk_id,
                    chunk_type: strategy,
                    total_chunks,
                    start_offset: draft.span.start,
                    end_offset: draft.span.end,
                    section: draft.section.map(str::to_string),
                    is_subsection: draft.is_subsection,
                    max_tokens,
                    strategy: draft.mode,
                },
            })
            .collect()
    }
}

fn section_span(section: &Section<'_>) -> Span {
    Span::new(section.offset, section.offset + section.text.len())
}

fn shift(span: Span, by: usize) -> Span {
    Span::new(span.start + by, span.end + by)
}
