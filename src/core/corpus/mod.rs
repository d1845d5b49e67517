//! Corpus driver: walks a paper corpus, runs the chunking engine over
//! every paper and persists the results.

pub mod loader;
pub mod pipeline;
pub mod sink;
pub mod walker;

pub use loader::CorpusLoader;
pub use pipeline::{ChunkingPipeline, RunSummary};
pub use sink::{ChunkSink, JsonDirSink, MemorySink};
pub use walker::FileWalker;
