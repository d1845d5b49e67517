// UTF-8 safety: multi-byte text never splits a code point and sizes are
// counted in characters, not bytes.

use crate::common::{assert_chunk_invariants, base_metadata, default_dispatcher};
use paperchunk::core::chunker::BoundedSplitter;
use paperchunk::core::types::ChunkingStrategy;

#[test]
fn test_emoji_paper_all_strategies() {
    let text = format!(
        "Abstract\n{}\n\nResults\n{}",
        "🚀 Launch went well 🎉. ".repeat(20),
        "🦀🧪✅ ".repeat(400)
    );
    let dispatcher = default_dispatcher();

    for strategy in ChunkingStrategy::ALL {
        let chunks = dispatcher.chunk(strategy, &text, &base_metadata());
        assert!(!chunks.is_empty());
        assert_chunk_invariants(&text, &chunks);
    }
}

#[test]
fn test_cjk_without_separators_uses_char_budget() {
    let text = "日本語のテキスト".repeat(300);
    let splitter = BoundedSplitter::new(100, 20);

    let chunks = splitter.split_text(&text);
    assert!(chunks.len() > 1);
    for chunk in &chunks {
        assert!(chunk.chars().count() <= 100);
    }
    // Byte length is three times the char count; a byte budget would
    // have produced far more chunks
    assert!(chunks[0].len() > 100);
}

#[test]
fn test_mixed_scripts_round_trip_through_offsets() {
    let text = "Introduction\nПривет мир. مرحبا بالعالم. Hello world. 你好世界。\n".repeat(60);
    let chunks = default_dispatcher().chunk(ChunkingStrategy::Recursive, &text, &base_metadata());

    assert_chunk_invariants(&text, &chunks);
    for chunk in &chunks {
        assert!(text.is_char_boundary(chunk.metadata.start_offset));
        assert!(text.is_char_boundary(chunk.metadata.end_offset));
    }
}
