//! Core domain logic (interface-agnostic)
//!
//! Everything here is independent of the command-line front end.
//!
//! # Architecture
//!
//! - **chunker**: Section detection, bounded splitting and the four
//!   chunking strategies
//! - **stats**: Per-run counters
//! - **corpus**: Corpus walking, loading, persistence and the batch
//!   pipeline
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling

pub mod chunker;
pub mod config;
pub mod corpus;
pub mod error;
pub mod stats;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{ChunkError, Result};
pub use stats::RunStats;
pub use types::{Chunk, ChunkMetadata, ChunkingStrategy, Document, DocumentMetadata};
