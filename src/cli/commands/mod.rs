//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod chunk_corpus;
pub mod chunk_file;
pub mod completions;
pub mod config;
pub mod sections;

// Re-export argument types for use in mod.rs
pub use chunk_corpus::ChunkCorpusArgs;
pub use chunk_file::ChunkFileArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use sections::SectionsArgs;
