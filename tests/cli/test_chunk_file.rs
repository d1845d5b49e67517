//! chunk-file command tests

use super::test_helpers::{create_cli_test_config, write_paper};
use crate::common::{long_paper, sample_paper};
use paperchunk::cli::commands::chunk_file::{chunk_file, execute, ChunkFileArgs};
use paperchunk::cli::OutputFormat;
use paperchunk::core::types::{ChunkId, ChunkingStrategy};
use std::path::PathBuf;

fn args(path: PathBuf, strategy: ChunkingStrategy) -> ChunkFileArgs {
    ChunkFileArgs {
        path,
        strategy,
        id: None,
        title: "A Paper".to_string(),
        category: "cs.LG".to_string(),
        full: false,
    }
}

#[test]
fn test_id_defaults_to_file_stem() {
    let (_temp, path) = write_paper("2401.00001.txt", &sample_paper());
    let config = create_cli_test_config();

    let chunks = chunk_file(&args(path, ChunkingStrategy::Recursive), &config).unwrap();
    assert!(!chunks.is_empty());
    for chunk in &chunks {
        assert_eq!(chunk.metadata.document.arxiv_id, "2401.00001");
        assert_eq!(chunk.metadata.document.title, "A Paper");
        assert_eq!(chunk.metadata.document.primary_category, "cs.LG");
    }
}

#[test]
fn test_explicit_id_and_strategy() {
    let (_temp, path) = write_paper("paper.txt", &long_paper());
    let config = create_cli_test_config();

    let mut args = args(path, ChunkingStrategy::SectionBased);
    args.id = Some("custom-id".to_string());

    let chunks = chunk_file(&args, &config).unwrap();
    assert_eq!(chunks[0].metadata.document.arxiv_id, "custom-id");
    assert_eq!(chunks[1].metadata.chunk_id, ChunkId::Sub { section: 1, sub: 0 });
}

#[tokio::test]
async fn test_execute_both_formats() {
    let (_temp, path) = write_paper("paper.txt", &sample_paper());
    let config = create_cli_test_config();

    for format in [OutputFormat::Human, OutputFormat::Json] {
        let result = execute(args(path.clone(), ChunkingStrategy::Hybrid), &config, format).await;
        assert!(result.is_ok());
    }
}

#[tokio::test]
async fn test_missing_file() {
    let config = create_cli_test_config();
    let result = execute(
        args(PathBuf::from("/nonexistent/paper.txt"), ChunkingStrategy::Recursive),
        &config,
        OutputFormat::Human,
    )
    .await;

    let err = result.unwrap_err().to_string();
    assert!(err.contains("Failed to read"));
}
