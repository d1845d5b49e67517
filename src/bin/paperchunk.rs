//! paperchunk CLI - chunk research papers for retrieval
//!
//! # Examples
//!
//! ```bash
//! # Chunk the whole corpus with every configured strategy
//! paperchunk chunk-corpus
//!
//! # Only section-based and hybrid, four papers at a time
//! paperchunk chunk-corpus --strategy section-based --strategy hybrid --jobs 4
//!
//! # Inspect one paper
//! paperchunk detect-sections raw_data/arxiv/text/2401.00001.txt
//! paperchunk chunk-file raw_data/arxiv/text/2401.00001.txt --strategy hybrid
//! ```

use clap::Parser;
use paperchunk::cli::{exit_code, run, Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging(json: bool, default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr; stdout carries command output
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_directive = match &cli.command {
        Commands::ChunkCorpus(args) if !args.quiet => "paperchunk=info",
        _ => "paperchunk=warn",
    };
    init_logging(cli.log_json, default_directive);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(exit_code(e.as_ref()));
    }
}
