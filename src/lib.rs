//! paperchunk - chunking engine for research papers
//!
//! Turns extracted paper text into ordered, overlapping chunks for
//! retrieval-augmented generation, using four interchangeable
//! strategies.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - chunker (section detection, bounded splitting, strategies)
//!   - stats (per-run counters)
//!   - corpus (walking, loading, persistence, batch pipeline)
//!   - config, error, types, xdg
//!
//! - **cli**: Command-line adapter (depends on core)
//!
//! # Key Features
//!
//! - UTF-8 safe splitting (character counts, never slices a code point)
//! - Heading detection with literal heading removal
//! - Deterministic output: same input, same chunks
//! - Bounded parallel corpus runs with per-worker statistics

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::chunker::{BoundedSplitter, SectionDetector, StrategyDispatcher};
pub use crate::core::config::Config;
pub use crate::core::error::{ChunkError, Result};
pub use crate::core::stats::RunStats;
pub use crate::core::types::*;
