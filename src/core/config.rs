//! Configuration management for paperchunk.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with defaults for every chunking threshold.

use crate::core::error::{ChunkError, Result};
use crate::core::types::ChunkingStrategy;
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Chunking engine configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChunkingConfig {
    /// Strategies run for every document, in this order
    #[serde(default = "default_strategies")]
    pub strategies: Vec<ChunkingStrategy>,

    /// Keep text before the first heading as a "Front Matter" section.
    /// Off by default: title and author lines are not chunked.
    #[serde(default)]
    pub include_front_matter: bool,

    #[serde(default)]
    pub recursive: RecursiveConfig,
    #[serde(default)]
    pub token: TokenConfig,
    #[serde(default)]
    pub section: SectionConfig,
    #[serde(default)]
    pub hybrid: HybridConfig,
}

/// Recursive strategy budget, in characters
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecursiveConfig {
    #[serde(default = "default_recursive_chunk_size")]
    pub chunk_size: usize,
    #[serde(default = "default_recursive_overlap")]
    pub overlap: usize,
}

/// Token strategy budget, in approximate (whitespace) tokens
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
    #[serde(default = "default_token_overlap")]
    pub overlap: usize,
}

/// Section strategy configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SectionConfig {
    /// Sections longer than this many characters are sub-split
    #[serde(default = "default_subsplit_threshold")]
    pub subsplit_threshold: usize,
    #[serde(default = "default_recursive_chunk_size")]
    pub chunk_size: usize,
    #[serde(default = "default_recursive_overlap")]
    pub overlap: usize,
}

/// Hybrid strategy configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HybridConfig {
    /// Sections shorter than this many characters are skipped
    #[serde(default = "default_min_section_chars")]
    pub min_section_chars: usize,
    #[serde(default = "default_hybrid_chunk_size")]
    pub chunk_size: usize,
    #[serde(default = "default_hybrid_overlap")]
    pub overlap: usize,

    /// Section labels (case-insensitive) kept as one chunk
    #[serde(default = "default_whole_section_labels")]
    pub whole_section_labels: Vec<String>,
}

/// Corpus layout configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// Directory of `<arxiv_id>.txt` files
    #[serde(default = "default_text_dir")]
    pub text_dir: PathBuf,

    /// Directory of `<arxiv_id>.json` metadata files
    #[serde(default = "default_metadata_dir")]
    pub metadata_dir: PathBuf,

    /// Root of the `<strategy>/<arxiv_id>.json` output tree
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Run summary location
    #[serde(default = "default_summary_file")]
    pub summary_file: PathBuf,

    /// File patterns to include (glob syntax)
    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,

    /// File patterns to exclude (glob syntax)
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// Maximum text file size in MB (skip larger files)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,
}

/// Resource limits
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LimitsConfig {
    /// Documents chunked at the same time
    #[serde(default = "default_max_concurrent_documents")]
    pub max_concurrent_documents: usize,
}

fn default_strategies() -> Vec<ChunkingStrategy> {
    ChunkingStrategy::ALL.to_vec()
}

fn default_recursive_chunk_size() -> usize {
    1000
}

fn default_recursive_overlap() -> usize {
    200
}

fn default_max_tokens() -> usize {
    512
}

fn default_token_overlap() -> usize {
    50
}

fn default_subsplit_threshold() -> usize {
    2000
}

fn default_min_section_chars() -> usize {
    100
}

fn default_hybrid_chunk_size() -> usize {
    800
}

fn default_hybrid_overlap() -> usize {
    150
}

fn default_whole_section_labels() -> Vec<String> {
    vec!["abstract".to_string(), "conclusion".to_string()]
}

fn default_text_dir() -> PathBuf {
    PathBuf::from("raw_data/arxiv/text")
}

fn default_metadata_dir() -> PathBuf {
    PathBuf::from("raw_data/arxiv/metadata")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("processed/chunked")
}

fn default_summary_file() -> PathBuf {
    PathBuf::from("logs/chunking_summary.json")
}

fn default_include_patterns() -> Vec<String> {
    vec!["*.txt".to_string()]
}

fn default_max_file_size() -> usize {
    50
}

fn default_max_concurrent_documents() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            strategies: default_strategies(),
            include_front_matter: false,
            recursive: RecursiveConfig::default(),
            token: TokenConfig::default(),
            section: SectionConfig::default(),
            hybrid: HybridConfig::default(),
        }
    }
}

impl Default for RecursiveConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_recursive_chunk_size(),
            overlap: default_recursive_overlap(),
        }
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            max_tokens: default_max_tokens(),
            overlap: default_token_overlap(),
        }
    }
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            subsplit_threshold: default_subsplit_threshold(),
            chunk_size: default_recursive_chunk_size(),
            overlap: default_recursive_overlap(),
        }
    }
}

impl Default for HybridConfig {
    fn default() -> Self {
        Self {
            min_section_chars: default_min_section_chars(),
            chunk_size: default_hybrid_chunk_size(),
            overlap: default_hybrid_overlap(),
            whole_section_labels: default_whole_section_labels(),
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            text_dir: default_text_dir(),
            metadata_dir: default_metadata_dir(),
            output_dir: default_output_dir(),
            summary_file: default_summary_file(),
            include_patterns: default_include_patterns(),
            exclude_patterns: Vec::new(),
            max_file_size_mb: default_max_file_size(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_concurrent_documents: default_max_concurrent_documents(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ChunkError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. PAPERCHUNK_CONFIG env var
    /// 2. XDG config file (~/.config/paperchunk/config.toml)
    /// 3. ./paperchunk.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("PAPERCHUNK_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("paperchunk.toml").exists() {
                Self::from_file("paperchunk.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Chunking configuration
        if let Ok(strategies) = env::var("PAPERCHUNK_STRATEGIES") {
            let parsed: std::result::Result<Vec<ChunkingStrategy>, _> = strategies
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::parse)
                .collect();
            match parsed {
                Ok(list) => self.chunking.strategies = list,
                Err(e) => tracing::warn!("Ignoring PAPERCHUNK_STRATEGIES: {e}"),
            }
        }
        if let Ok(size) = env::var("PAPERCHUNK_CHUNK_SIZE") {
            if let Ok(s) = size.parse() {
                self.chunking.recursive.chunk_size = s;
            }
        }
        if let Ok(overlap) = env::var("PAPERCHUNK_OVERLAP") {
            if let Ok(o) = overlap.parse() {
                self.chunking.recursive.overlap = o;
            }
        }
        if let Ok(max_tokens) = env::var("PAPERCHUNK_MAX_TOKENS") {
            if let Ok(t) = max_tokens.parse() {
                self.chunking.token.max_tokens = t;
            }
        }
        if let Ok(threshold) = env::var("PAPERCHUNK_SUBSPLIT_THRESHOLD") {
            if let Ok(t) = threshold.parse() {
                self.chunking.section.subsplit_threshold = t;
            }
        }
        if let Ok(min_chars) = env::var("PAPERCHUNK_MIN_SECTION_CHARS") {
            if let Ok(m) = min_chars.parse() {
                self.chunking.hybrid.min_section_chars = m;
            }
        }

        // Corpus configuration
        if let Ok(dir) = env::var("PAPERCHUNK_TEXT_DIR") {
            self.corpus.text_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = env::var("PAPERCHUNK_METADATA_DIR") {
            self.corpus.metadata_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = env::var("PAPERCHUNK_OUTPUT_DIR") {
            self.corpus.output_dir = PathBuf::from(dir);
        }
        if let Ok(file) = env::var("PAPERCHUNK_SUMMARY_FILE") {
            self.corpus.summary_file = PathBuf::from(file);
        }
        if let Ok(max_size) = env::var("PAPERCHUNK_MAX_FILE_SIZE_MB") {
            if let Ok(size) = max_size.parse() {
                self.corpus.max_file_size_mb = size;
            }
        }

        // Limits configuration
        if let Ok(max_concurrent) = env::var("PAPERCHUNK_MAX_CONCURRENT_DOCUMENTS") {
            if let Ok(max) = max_concurrent.parse() {
                self.limits.max_concurrent_documents = max;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let chunking = &self.chunking;

        if chunking.strategies.is_empty() {
            return Err(ChunkError::ConfigError(
                "At least one chunking strategy is required".to_string(),
            ));
        }

        check_budget("recursive", chunking.recursive.chunk_size, chunking.recursive.overlap)?;
        check_budget("token", chunking.token.max_tokens, chunking.token.overlap)?;
        check_budget("section", chunking.section.chunk_size, chunking.section.overlap)?;
        check_budget("hybrid", chunking.hybrid.chunk_size, chunking.hybrid.overlap)?;

        if chunking.section.subsplit_threshold == 0 {
            return Err(ChunkError::ConfigError(
                "Section sub-split threshold must be non-zero".to_string(),
            ));
        }

        if self.corpus.include_patterns.is_empty() {
            return Err(ChunkError::ConfigError(
                "At least one include pattern is required".to_string(),
            ));
        }

        if self.limits.max_concurrent_documents == 0 {
            return Err(ChunkError::ConfigError(
                "Max concurrent documents must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log the effective configuration
    pub fn log_config(&self) {
        let chunking = &self.chunking;
        let strategies: Vec<&str> = chunking.strategies.iter().map(|s| s.as_str()).collect();

        tracing::info!("Configuration loaded:");
        tracing::info!("  Strategies: {}", strategies.join(", "));
        tracing::info!(
            "  Recursive: {} chars, {} overlap",
            chunking.recursive.chunk_size,
            chunking.recursive.overlap
        );
        tracing::info!(
            "  Token: {} tokens, {} overlap",
            chunking.token.max_tokens,
            chunking.token.overlap
        );
        tracing::info!(
            "  Section: sub-split above {} chars at {}/{}",
            chunking.section.subsplit_threshold,
            chunking.section.chunk_size,
            chunking.section.overlap
        );
        tracing::info!(
            "  Hybrid: skip below {} chars, split at {}/{}, whole: {:?}",
            chunking.hybrid.min_section_chars,
            chunking.hybrid.chunk_size,
            chunking.hybrid.overlap,
            chunking.hybrid.whole_section_labels
        );
        tracing::info!("  Text dir: {:?}", self.corpus.text_dir);
        tracing::info!("  Metadata dir: {:?}", self.corpus.metadata_dir);
        tracing::info!("  Output dir: {:?}", self.corpus.output_dir);
        tracing::info!("  Summary file: {:?}", self.corpus.summary_file);
        tracing::info!(
            "  Max concurrent documents: {}",
            self.limits.max_concurrent_documents
        );
    }
}

fn check_budget(name: &str, size: usize, overlap: usize) -> Result<()> {
    if size == 0 {
        return Err(ChunkError::ConfigError(format!(
            "{name} chunk size must be non-zero"
        )));
    }
    if overlap >= size {
        return Err(ChunkError::ConfigError(format!(
            "{name} overlap must be less than chunk size"
        )));
    }
    Ok(())
}
