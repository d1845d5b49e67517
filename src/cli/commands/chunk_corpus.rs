//! Chunk-corpus command - run the batch pipeline over a paper corpus

use crate::cli::output::{colors, format_duration};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::corpus::{ChunkingPipeline, RunSummary};
use crate::core::types::ChunkingStrategy;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the chunk-corpus command
#[derive(Args, Debug, Default)]
pub struct ChunkCorpusArgs {
    /// Directory of <arxiv_id>.txt files
    #[arg(long)]
    pub text_dir: Option<PathBuf>,

    /// Directory of <arxiv_id>.json metadata files
    #[arg(long)]
    pub metadata_dir: Option<PathBuf>,

    /// Root of the <strategy>/<arxiv_id>.json output tree
    #[arg(long, short = 'o')]
    pub output_dir: Option<PathBuf>,

    /// Where to write the run summary
    #[arg(long)]
    pub summary_file: Option<PathBuf>,

    /// Strategy to run (can be specified multiple times; default: configured list)
    #[arg(long = "strategy", short = 's')]
    pub strategies: Vec<ChunkingStrategy>,

    /// Papers chunked at the same time
    #[arg(long, short = 'j')]
    pub jobs: Option<usize>,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl ChunkCorpusArgs {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply(&self, config: &Config) -> crate::core::error::Result<Config> {
        let mut config = config.clone();

        if let Some(dir) = &self.text_dir {
            config.corpus.text_dir = dir.clone();
        }
        if let Some(dir) = &self.metadata_dir {
            config.corpus.metadata_dir = dir.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.corpus.output_dir = dir.clone();
        }
        if let Some(file) = &self.summary_file {
            config.corpus.summary_file = file.clone();
        }
        if !self.strategies.is_empty() {
            config.chunking.strategies = self.strategies.clone();
        }
        if let Some(jobs) = self.jobs {
            config.limits.max_concurrent_documents = jobs;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Execute the chunk-corpus command
pub async fn execute(
    args: ChunkCorpusArgs,
    config: &Arc<Config>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.apply(config)?;

    if !args.quiet && format == OutputFormat::Human {
        eprintln!(
            "Chunking papers in {}...",
            colors::file_path(&config.corpus.text_dir.display().to_string())
        );
    }

    let pipeline = ChunkingPipeline::from_config(&config)?;
    let summary = pipeline.run().await?;

    match format {
        OutputFormat::Human => print_summary(&summary, &config),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}

fn print_summary(summary: &RunSummary, config: &Config) {
    let stats = &summary.stats;

    println!(
        "{} {} of {} papers in {}",
        colors::success("Chunked"),
        colors::number(&stats.papers_processed.to_string()),
        colors::number(&summary.papers_found.to_string()),
        colors::number(&format_duration(summary.duration_ms))
    );
    if stats.papers_skipped > 0 {
        println!(
            "{} {} papers with missing or invalid input",
            colors::warning("Skipped"),
            colors::number(&stats.papers_skipped.to_string())
        );
    }
    for strategy in &config.chunking.strategies {
        println!(
            "  {:<14} {} chunks",
            colors::section(strategy.as_str()),
            colors::number(&stats.chunks_for(*strategy).to_string())
        );
    }
    println!(
        "  {:<14} {} chunks",
        colors::label("total"),
        colors::number(&stats.total_chunks().to_string())
    );
    println!(
        "Output: {}",
        colors::file_path(&config.corpus.output_dir.display().to_string())
    );
    println!(
        "Summary: {}",
        colors::file_path(&config.corpus.summary_file.display().to_string())
    );
}
