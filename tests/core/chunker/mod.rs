//! Chunking engine tests
//!
//! Section reconstruction, strategy invariants, the long-introduction
//! end-to-end case and UTF-8 safety.

mod test_sections;
mod test_strategies;
mod test_utf8;
