//! Core data types for paperchunk.
//!
//! Documents come in, chunks go out. Everything here is plain data:
//! serializable, comparable, and never mutated once built.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::core::error::ChunkError;

/// The four segmentation strategies.
///
/// On the command line the names are kebab-case (`token-based`); the
/// snake_case forms and the short `token` / `section` are aliases.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum ChunkingStrategy {
    /// Character-bounded recursive splitting of the whole document
    Recursive,
    /// Approximate-token-bounded splitting of the whole document
    #[value(alias = "token_based", alias = "token")]
    TokenBased,
    /// One chunk per detected section, long sections sub-split
    #[value(alias = "section_based", alias = "section")]
    SectionBased,
    /// Per-section choice between whole emission and smart splitting
    Hybrid,
}

impl ChunkingStrategy {
    /// All strategies, in the order the batch driver runs them.
    pub const ALL: [ChunkingStrategy; 4] = [
        ChunkingStrategy::Recursive,
        ChunkingStrategy::TokenBased,
        ChunkingStrategy::SectionBased,
        ChunkingStrategy::Hybrid,
    ];

    /// Stable name used in metadata, output directories and stats keys
    pub fn as_str(&self) -> &'static str {
        match self {
            ChunkingStrategy::Recursive => "recursive",
            ChunkingStrategy::TokenBased => "token_based",
            ChunkingStrategy::SectionBased => "section_based",
            ChunkingStrategy::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for ChunkingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChunkingStrategy {
    type Err = ChunkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "recursive" => Ok(ChunkingStrategy::Recursive),
            "token_based" | "token" => Ok(ChunkingStrategy::TokenBased),
            "section_based" | "section" => Ok(ChunkingStrategy::SectionBased),
            "hybrid" => Ok(ChunkingStrategy::Hybrid),
            _ => Err(ChunkError::UnknownStrategy(s.to_string())),
        }
    }
}

/// How the hybrid strategy treated a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HybridMode {
    /// The section was emitted as a single chunk
    WholeSection,
    /// The section was split with the hybrid budget
    SmartSplit,
}

/// Lightweight metadata describing a source paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Unique document identifier (arXiv id)
    pub arxiv_id: String,

    /// Paper title
    pub title: String,

    /// Primary subject category
    #[serde(default = "default_category")]
    pub primary_category: String,
}

fn default_category() -> String {
    "unknown".to_string()
}

impl DocumentMetadata {
    pub fn new(
        arxiv_id: impl Into<String>,
        title: impl Into<String>,
        primary_category: impl Into<String>,
    ) -> Self {
        Self {
            arxiv_id: arxiv_id.into(),
            title: title.into(),
            primary_category: primary_category.into(),
        }
    }
}

/// A loaded paper: metadata plus full extracted text.
#[derive(Debug, Clone)]
pub struct Document {
    pub metadata: DocumentMetadata,
    pub text: String,
}

/// Ordinal identifier of a chunk within one strategy run.
///
/// Serialized as a bare number for scalar ids and as
/// `"<section>_<sub>"` for section sub-chunks.
///
/// Ids order by position in the document: `Index(i)` sorts as section
/// `i` with no sub-chunk, so `"0_5" < "1"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkId {
    Index(usize),
    Sub { section: usize, sub: usize },
}

impl ChunkId {
    fn position(&self) -> (usize, Option<usize>) {
        match *self {
            ChunkId::Index(i) => (i, None),
            ChunkId::Sub { section, sub } => (section, Some(sub)),
        }
    }
}

impl Ord for ChunkId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.position().cmp(&other.position())
    }
}

impl PartialOrd for ChunkId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkId::Index(i) => write!(f, "{i}"),
            ChunkId::Sub { section, sub } => write!(f, "{section}_{sub}"),
        }
    }
}

impl FromStr for ChunkId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            part.parse::<usize>()
                .map_err(|e| format!("invalid chunk id '{s}': {e}"))
        };
        match s.split_once('_') {
            Some((section, sub)) => Ok(ChunkId::Sub {
                section: parse(section)?,
                sub: parse(sub)?,
            }),
            None => Ok(ChunkId::Index(parse(s)?)),
        }
    }
}

impl Serialize for ChunkId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ChunkId::Index(i) => serializer.serialize_u64(*i as u64),
            ChunkId::Sub { .. } => serializer.collect_str(self),
        }
    }
}

impl<'de> Deserialize<'de> for ChunkId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(usize),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(i) => Ok(ChunkId::Index(i)),
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Metadata attached to every chunk.
///
/// Document fields are flattened in, followed by the strategy tag,
/// ordinal and position. Strategy-specific fields are omitted from
/// the serialized form when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    #[serde(flatten)]
    pub document: DocumentMetadata,

    /// Ordinal within this strategy run
    pub chunk_id: ChunkId,

    /// Strategy that produced the chunk
    pub chunk_type: ChunkingStrategy,

    /// Number of chunks in this strategy run
    pub total_chunks: usize,

    /// Byte offset where the chunk starts in the document text
    pub start_offset: usize,

    /// Byte offset where the chunk ends in the document text
    pub end_offset: usize,

    /// Section label (section-based and hybrid)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,

    /// Whether the chunk is a piece of a sub-split section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_subsection: Option<bool>,

    /// Token budget (token-based only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>,

    /// Hybrid treatment of the owning section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<HybridMode>,
}

/// A single output chunk: content plus metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub content: String,
    pub metadata: ChunkMetadata,
}
