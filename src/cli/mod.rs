//! CLI adapter for paperchunk
//!
//! Command-line front end over `core/`: batch corpus runs, one-off file
//! chunking and section inspection.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// paperchunk - research paper chunking
///
/// Splits extracted paper text into overlapping chunks with four
/// strategies (recursive, token-based, section-based and hybrid) for
/// retrieval pipelines.
#[derive(Parser, Debug)]
#[command(name = "paperchunk")]
#[command(version)]
#[command(about = "Chunk research papers for retrieval", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// How command results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colored text for a terminal
    #[default]
    Human,
    /// Machine-readable JSON on stdout
    Json,
}

/// paperchunk subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Chunk every paper in the corpus with the configured strategies
    #[command(name = "chunk-corpus")]
    ChunkCorpus(commands::ChunkCorpusArgs),

    /// Chunk a single text file with one strategy
    #[command(name = "chunk-file")]
    ChunkFile(commands::ChunkFileArgs),

    /// Show the sections detected in a text file
    #[command(name = "detect-sections")]
    DetectSections(commands::SectionsArgs),

    /// Print the effective configuration after file and env overrides
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Print a shell completion script
    ///
    /// Examples:
    ///
    ///   bash:  paperchunk completions bash > ~/.local/share/bash-completion/completions/paperchunk
    ///   zsh:   paperchunk completions zsh > ~/.zfunc/_paperchunk
    ///   fish:  paperchunk completions fish > ~/.config/fish/completions/paperchunk.fish
    Completions(commands::CompletionsArgs),
}

/// Dispatch a parsed command line
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Completions need no configuration
    let command = match cli.command {
        Commands::Completions(args) => return commands::completions::execute(args),
        command => command,
    };

    let xdg = XdgDirs::new();
    xdg.log_paths();

    let config = Config::load_with_xdg(&xdg)?;
    config.log_config();
    let config = Arc::new(config);

    match command {
        Commands::ChunkCorpus(args) => {
            commands::chunk_corpus::execute(args, &config, cli.format).await
        }
        Commands::ChunkFile(args) => commands::chunk_file::execute(args, &config, cli.format).await,
        Commands::DetectSections(args) => {
            commands::sections::execute(args, &config, cli.format).await
        }
        Commands::ShowConfig(args) => commands::config::execute(args, &config, cli.format).await,
        Commands::Completions(_) => unreachable!("completions return before config load"),
    }
}

/// Process exit status for a failed command: 2 when the arguments or
/// configuration were rejected, 1 otherwise.
pub fn exit_code(err: &(dyn std::error::Error + 'static)) -> i32 {
    match err.downcast_ref::<crate::core::error::ChunkError>() {
        Some(e) if e.is_bad_request() => 2,
        _ => 1,
    }
}
