//! Chunk-file command - chunk one text file with one strategy

use crate::cli::output::{colors, preview};
use crate::cli::OutputFormat;
use crate::core::chunker::StrategyDispatcher;
use crate::core::config::Config;
use crate::core::corpus::walker::document_id;
use crate::core::types::{Chunk, ChunkingStrategy, DocumentMetadata};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the chunk-file command
#[derive(Args, Debug)]
pub struct ChunkFileArgs {
    /// Path to the paper text file
    pub path: PathBuf,

    /// Chunking strategy
    #[arg(long, short = 's', default_value = "recursive")]
    pub strategy: ChunkingStrategy,

    /// Document id (default: file name without extension)
    #[arg(long)]
    pub id: Option<String>,

    /// Paper title
    #[arg(long, default_value = "")]
    pub title: String,

    /// Primary subject category
    #[arg(long, default_value = "unknown")]
    pub category: String,

    /// Print full chunk content instead of a preview
    #[arg(long)]
    pub full: bool,
}

/// Read and chunk the file named by `args`
pub fn chunk_file(args: &ChunkFileArgs, config: &Config) -> Result<Vec<Chunk>, String> {
    let text = fs::read_to_string(&args.path)
        .map_err(|e| format!("Failed to read '{}': {}", args.path.display(), e))?;

    let id = args
        .id
        .clone()
        .or_else(|| document_id(&args.path))
        .ok_or_else(|| {
            format!(
                "Cannot derive a document id from '{}'. Pass --id.",
                args.path.display()
            )
        })?;

    let metadata = DocumentMetadata::new(id, args.title.clone(), args.category.clone());
    let dispatcher = StrategyDispatcher::new(&config.chunking);

    Ok(dispatcher.chunk(args.strategy, &text, &metadata))
}

/// Execute the chunk-file command
pub async fn execute(
    args: ChunkFileArgs,
    config: &Arc<Config>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let chunks = chunk_file(&args, config)?;

    match format {
        OutputFormat::Human => {
            println!(
                "{} {} chunks from {}",
                colors::section(args.strategy.as_str()),
                colors::number(&chunks.len().to_string()),
                colors::file_path(&args.path.display().to_string())
            );
            for chunk in &chunks {
                let meta = &chunk.metadata;
                let section = meta
                    .section
                    .as_deref()
                    .map(|s| format!(" {}", colors::section(s)))
                    .unwrap_or_default();

                println!(
                    "\n{}{} {}",
                    colors::label(&format!("[{}]", meta.chunk_id)),
                    section,
                    colors::dim(&format!(
                        "bytes {}..{}, {} chars",
                        meta.start_offset,
                        meta.end_offset,
                        chunk.content.chars().count()
                    ))
                );
                if args.full {
                    println!("{}", chunk.content);
                } else {
                    println!("{}", preview(&chunk.content, 100));
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&chunks)?);
        }
    }

    Ok(())
}
