//! Detect-sections command - show how a paper is cut into sections

use crate::cli::output::{colors, preview};
use crate::cli::OutputFormat;
use crate::core::chunker::SectionDetector;
use crate::core::config::Config;
use clap::Args;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the detect-sections command
#[derive(Args, Debug)]
pub struct SectionsArgs {
    /// Path to the paper text file
    pub path: PathBuf,
}

/// One detected section
#[derive(Debug, Serialize)]
pub struct SectionEntry {
    pub label: String,
    pub kind: &'static str,
    pub offset: usize,
    pub heading_offset: Option<usize>,
    pub chars: usize,
    pub preview: String,
}

/// Detected sections response
#[derive(Debug, Serialize)]
pub struct SectionsResponse {
    pub path: String,
    pub sections: Vec<SectionEntry>,
}

/// Detect the sections of `text` as response entries
pub fn section_entries(text: &str, config: &Config) -> Vec<SectionEntry> {
    SectionDetector::new(config.chunking.include_front_matter)
        .detect(text)
        .into_iter()
        .map(|section| SectionEntry {
            label: section.label.to_string(),
            kind: section.kind.as_str(),
            offset: section.offset,
            heading_offset: section.heading_offset,
            chars: section.text.chars().count(),
            preview: preview(section.text, 60),
        })
        .collect()
}

/// Execute the detect-sections command
pub async fn execute(
    args: SectionsArgs,
    config: &Arc<Config>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(&args.path)
        .map_err(|e| format!("Failed to read '{}': {}", args.path.display(), e))?;

    let response = SectionsResponse {
        path: args.path.display().to_string(),
        sections: section_entries(&text, config),
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} sections in {}",
                colors::number(&response.sections.len().to_string()),
                colors::file_path(&response.path)
            );
            for entry in &response.sections {
                println!(
                    "  {:<24} {} {}",
                    colors::section(&entry.label),
                    colors::dim(&format!("@{} ({} chars)", entry.offset, entry.chars)),
                    entry.preview
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
