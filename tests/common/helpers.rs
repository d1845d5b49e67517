// Test helper functions

use paperchunk::core::chunker::StrategyDispatcher;
use paperchunk::core::config::ChunkingConfig;
use paperchunk::core::types::{Chunk, ChunkId, DocumentMetadata};

/// Dispatcher with the default thresholds
#[allow(dead_code)]
pub fn default_dispatcher() -> StrategyDispatcher {
    StrategyDispatcher::new(&ChunkingConfig::default())
}

/// Metadata used for chunks that don't come from a corpus
#[allow(dead_code)]
pub fn base_metadata() -> DocumentMetadata {
    DocumentMetadata::new("2401.00001", "Attention Is Mostly What You Need", "cs.CL")
}

/// Assert the invariants every strategy's output must hold for `text`:
/// non-empty trimmed content that is the exact slice at its offsets,
/// `total_chunks` equal to the sequence length, and unique ids in
/// document order.
#[allow(dead_code)]
pub fn assert_chunk_invariants(text: &str, chunks: &[Chunk]) {
    for (idx, chunk) in chunks.iter().enumerate() {
        let meta = &chunk.metadata;

        assert!(!chunk.content.is_empty(), "chunk {idx} is empty");
        assert_eq!(chunk.content, chunk.content.trim(), "chunk {idx} not trimmed");
        assert_eq!(
            &text[meta.start_offset..meta.end_offset],
            chunk.content,
            "chunk {idx} offsets do not point at its content"
        );
        assert_eq!(meta.total_chunks, chunks.len());
    }

    let ids: Vec<ChunkId> = chunks.iter().map(|c| c.metadata.chunk_id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(ids, sorted, "chunk ids must be unique and ordered");

    if ids.iter().all(|id| matches!(id, ChunkId::Index(_))) {
        let expected: Vec<ChunkId> = (0..chunks.len()).map(ChunkId::Index).collect();
        assert_eq!(ids, expected, "scalar ids must be contiguous from 0");
    }
}
