// Common test utilities and fixtures

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in some test binaries but are used in others
#[allow(unused_imports)]
pub use fixtures::{long_paper, sample_paper, TestCorpus};
#[allow(unused_imports)]
pub use helpers::{assert_chunk_invariants, base_metadata, default_dispatcher};
