//! Config command - show current configuration

use crate::cli::output::print_header;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print the effective configuration as TOML
    #[arg(long)]
    pub toml: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    #[serde(flatten)]
    pub config: Config,
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    config: &Arc<Config>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.toml {
        print!("{}", toml::to_string_pretty(config.as_ref())?);
        return Ok(());
    }

    let response = ConfigResponse {
        config_file: XdgDirs::new().config_file().display().to_string(),
        config: config.as_ref().clone(),
    };

    match format {
        OutputFormat::Human => {
            let chunking = &response.config.chunking;
            let strategies: Vec<&str> = chunking.strategies.iter().map(|s| s.as_str()).collect();

            print_header("Configuration:", format);
            println!("  config_file: {}", response.config_file);
            println!("  chunking:");
            println!("    strategies: {}", strategies.join(", "));
            println!("    include_front_matter: {}", chunking.include_front_matter);
            println!(
                "    recursive: chunk_size={} overlap={}",
                chunking.recursive.chunk_size, chunking.recursive.overlap
            );
            println!(
                "    token: max_tokens={} overlap={}",
                chunking.token.max_tokens, chunking.token.overlap
            );
            println!(
                "    section: subsplit_threshold={} chunk_size={} overlap={}",
                chunking.section.subsplit_threshold,
                chunking.section.chunk_size,
                chunking.section.overlap
            );
            println!(
                "    hybrid: min_section_chars={} chunk_size={} overlap={} whole_section_labels={:?}",
                chunking.hybrid.min_section_chars,
                chunking.hybrid.chunk_size,
                chunking.hybrid.overlap,
                chunking.hybrid.whole_section_labels
            );
            let corpus = &response.config.corpus;
            println!("  corpus:");
            println!("    text_dir: {}", corpus.text_dir.display());
            println!("    metadata_dir: {}", corpus.metadata_dir.display());
            println!("    output_dir: {}", corpus.output_dir.display());
            println!("    summary_file: {}", corpus.summary_file.display());
            println!("    include_patterns: {:?}", corpus.include_patterns);
            println!("    exclude_patterns: {:?}", corpus.exclude_patterns);
            println!("  limits:");
            println!(
                "    max_concurrent_documents: {}",
                response.config.limits.max_concurrent_documents
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
