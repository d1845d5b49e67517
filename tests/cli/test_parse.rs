//! Argument parsing tests

use clap::Parser;
use paperchunk::cli::{Cli, Commands, OutputFormat};
use paperchunk::core::types::ChunkingStrategy;
use std::path::PathBuf;

#[test]
fn test_parse_chunk_corpus_flags() {
    let cli = Cli::try_parse_from([
        "paperchunk",
        "--format",
        "json",
        "chunk-corpus",
        "--text-dir",
        "/data/text",
        "--strategy",
        "section-based",
        "-s",
        "hybrid",
        "--jobs",
        "3",
        "--quiet",
    ])
    .unwrap();

    assert_eq!(cli.format, OutputFormat::Json);
    match cli.command {
        Commands::ChunkCorpus(args) => {
            assert_eq!(args.text_dir, Some(PathBuf::from("/data/text")));
            assert_eq!(
                args.strategies,
                vec![ChunkingStrategy::SectionBased, ChunkingStrategy::Hybrid]
            );
            assert_eq!(args.jobs, Some(3));
            assert!(args.quiet);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_chunk_file_defaults() {
    let cli = Cli::try_parse_from(["paperchunk", "chunk-file", "paper.txt"]).unwrap();

    assert_eq!(cli.format, OutputFormat::Human);
    assert!(!cli.log_json);
    match cli.command {
        Commands::ChunkFile(args) => {
            assert_eq!(args.path, PathBuf::from("paper.txt"));
            assert_eq!(args.strategy, ChunkingStrategy::Recursive);
            assert_eq!(args.category, "unknown");
            assert!(args.id.is_none());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli =
        Cli::try_parse_from(["paperchunk", "detect-sections", "p.txt", "--log-json"]).unwrap();
    assert!(cli.log_json);
}

#[test]
fn test_strategy_aliases() {
    for (name, expected) in [
        ("token-based", ChunkingStrategy::TokenBased),
        ("token_based", ChunkingStrategy::TokenBased),
        ("token", ChunkingStrategy::TokenBased),
        ("section", ChunkingStrategy::SectionBased),
    ] {
        let cli = Cli::try_parse_from(["paperchunk", "chunk-file", "p.txt", "-s", name]).unwrap();
        match cli.command {
            Commands::ChunkFile(args) => assert_eq!(args.strategy, expected, "{name}"),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}

#[test]
fn test_unknown_strategy_lists_possible_values() {
    let err = Cli::try_parse_from(["paperchunk", "chunk-file", "p.txt", "--strategy", "semantic"])
        .unwrap_err()
        .to_string();
    assert!(err.contains("section-based"), "{err}");
    assert!(err.contains("hybrid"), "{err}");
}

#[test]
fn test_missing_subcommand_rejected() {
    assert!(Cli::try_parse_from(["paperchunk"]).is_err());
}
