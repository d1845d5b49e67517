// Strategy invariants over a realistic paper, plus the configurable
// thresholds.

use crate::common::{assert_chunk_invariants, base_metadata, default_dispatcher, sample_paper};
use paperchunk::core::chunker::StrategyDispatcher;
use paperchunk::core::config::ChunkingConfig;
use paperchunk::core::types::{ChunkId, ChunkingStrategy, HybridMode};

#[test]
fn test_all_strategies_hold_invariants() {
    let text = sample_paper();
    let dispatcher = default_dispatcher();

    for strategy in ChunkingStrategy::ALL {
        let chunks = dispatcher.chunk(strategy, &text, &base_metadata());
        assert!(!chunks.is_empty(), "{strategy} produced nothing");
        assert_chunk_invariants(&text, &chunks);

        for chunk in &chunks {
            assert_eq!(chunk.metadata.chunk_type, strategy);
            assert_eq!(chunk.metadata.document, base_metadata());
        }
    }
}

#[test]
fn test_sample_paper_hybrid_plan() {
    let text = sample_paper();
    let chunks = default_dispatcher().chunk(ChunkingStrategy::Hybrid, &text, &base_metadata());

    let plan: Vec<(&str, HybridMode)> = chunks
        .iter()
        .map(|c| (c.metadata.section.as_deref().unwrap(), c.metadata.strategy.unwrap()))
        .collect();

    // Related work and references are under 100 chars
    assert_eq!(plan[0], ("Abstract", HybridMode::WholeSection));
    assert!(plan.contains(&("1. Introduction", HybridMode::SmartSplit)));
    assert!(plan.contains(&("3. Methods", HybridMode::SmartSplit)));
    assert!(plan.contains(&("4. Experiments", HybridMode::SmartSplit)));
    assert_eq!(plan.last(), Some(&("Conclusion", HybridMode::WholeSection)));
    assert!(!plan.iter().any(|(label, _)| *label == "2 Related Work"));
    assert!(!plan.iter().any(|(label, _)| *label == "References"));
}

#[test]
fn test_recursive_bound_and_overlap() {
    let text = sample_paper();
    let chunks = default_dispatcher().chunk(ChunkingStrategy::Recursive, &text, &base_metadata());

    assert!(chunks.len() > 1);
    for chunk in &chunks {
        assert!(chunk.content.chars().count() <= 1000);
    }
    for pair in chunks.windows(2) {
        let (prev, next) = (&pair[0].metadata, &pair[1].metadata);
        if next.start_offset < prev.end_offset {
            let shared = &text[next.start_offset..prev.end_offset];
            assert!(pair[0].content.ends_with(shared));
            assert!(shared.chars().count() <= 200);
        }
    }
}

#[test]
fn test_section_threshold_boundary() {
    let dispatcher = default_dispatcher();

    let at_threshold = format!("Methods\n{}", "a".repeat(2000));
    let chunks = dispatcher.chunk(ChunkingStrategy::SectionBased, &at_threshold, &base_metadata());
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].metadata.chunk_id, ChunkId::Index(0));
    assert_eq!(chunks[0].metadata.is_subsection, Some(false));

    let above = format!("Methods\n{}", "a".repeat(2001));
    let chunks = dispatcher.chunk(ChunkingStrategy::SectionBased, &above, &base_metadata());
    assert!(chunks.len() > 1);
    assert!(chunks.iter().all(|c| c.metadata.is_subsection == Some(true)));
    assert_eq!(chunks[0].metadata.chunk_id, ChunkId::Sub { section: 0, sub: 0 });
}

#[test]
fn test_hybrid_length_floor() {
    let dispatcher = default_dispatcher();

    let short = format!("Discussion\n{}", "d".repeat(99));
    assert!(dispatcher
        .chunk(ChunkingStrategy::Hybrid, &short, &base_metadata())
        .is_empty());

    let enough = format!("Discussion\n{}", "d".repeat(100));
    let chunks = dispatcher.chunk(ChunkingStrategy::Hybrid, &enough, &base_metadata());
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].metadata.strategy, Some(HybridMode::SmartSplit));

    let abstract_text = format!("Abstract\n{}", "d".repeat(100));
    let chunks = dispatcher.chunk(ChunkingStrategy::Hybrid, &abstract_text, &base_metadata());
    assert_eq!(chunks[0].metadata.strategy, Some(HybridMode::WholeSection));
}

#[test]
fn test_custom_thresholds() {
    let mut config = ChunkingConfig::default();
    config.section.subsplit_threshold = 50;
    config.section.chunk_size = 40;
    config.section.overlap = 10;
    config.hybrid.min_section_chars = 10;
    config.hybrid.whole_section_labels = vec!["Discussion".to_string()];
    let dispatcher = StrategyDispatcher::new(&config);

    let text = "Discussion\nThe findings here are long enough to be kept whole as one chunk.";

    let hybrid = dispatcher.chunk(ChunkingStrategy::Hybrid, text, &base_metadata());
    assert_eq!(hybrid.len(), 1);
    assert_eq!(hybrid[0].metadata.strategy, Some(HybridMode::WholeSection));

    let sections = dispatcher.chunk(ChunkingStrategy::SectionBased, text, &base_metadata());
    assert!(sections.len() > 1);
    for chunk in &sections {
        assert!(chunk.content.chars().count() <= 40);
    }
    assert_chunk_invariants(text, &sections);
}

#[test]
fn test_token_budget() {
    let text = "alpha beta gamma delta ".repeat(300);
    let chunks = default_dispatcher().chunk(ChunkingStrategy::TokenBased, &text, &base_metadata());

    assert_chunk_invariants(&text, &chunks);
    for chunk in &chunks {
        assert!(chunk.content.split_whitespace().count() <= 512);
        assert_eq!(chunk.metadata.max_tokens, Some(512));
        assert!(chunk.metadata.section.is_none());
    }
}

#[test]
fn test_subsplit_section_then_whole_section() {
    let text = format!(
        "Introduction\n{}\n\nConclusion\nWe conclude.",
        "word ".repeat(1000)
    );
    let chunks = default_dispatcher().chunk(ChunkingStrategy::SectionBased, &text, &base_metadata());
    assert_chunk_invariants(&text, &chunks);

    let ids: Vec<String> = chunks.iter().map(|c| c.metadata.chunk_id.to_string()).collect();
    assert_eq!(ids, vec!["0_0", "0_1", "0_2", "0_3", "0_4", "0_5", "1"]);

    let last = chunks.last().unwrap();
    assert_eq!(last.content, "We conclude.");
    assert_eq!(last.metadata.is_subsection, Some(false));
}

#[test]
fn test_title_block_does_not_shift_section_ids() {
    let text = "A Paper Title\nJ. Doe\n\nAbstract\nShort abstract.\n\nIntroduction\nBody.";
    let chunks = default_dispatcher().chunk(ChunkingStrategy::SectionBased, text, &base_metadata());

    let plan: Vec<(ChunkId, &str)> = chunks
        .iter()
        .map(|c| (c.metadata.chunk_id, c.metadata.section.as_deref().unwrap()))
        .collect();
    assert_eq!(
        plan,
        vec![(ChunkId::Index(0), "Abstract"), (ChunkId::Index(1), "Introduction")]
    );
}
