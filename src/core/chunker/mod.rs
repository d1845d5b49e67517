//! The chunking engine.
//!
//! Turns paper text into ordered chunk sequences. Key pieces:
//!
//! - **sections**: heading detection over unstructured text
//! - **splitter**: bounded, overlapping splitting by characters or
//!   approximate tokens, preferring paragraph, line, sentence and word
//!   boundaries before falling back to single characters
//! - **strategies**: the recursive, token-based, section-based and
//!   hybrid strategies behind one dispatcher
//!
//! # Safety
//!
//! Every boundary the engine produces falls on a character boundary.
//! Sizes are counted with `chars()`, so text containing emoji or CJK
//! characters is never sliced mid code point.

pub mod sections;
pub mod splitter;
pub mod strategies;

pub use sections::{Section, SectionDetector, SectionKind};
pub use splitter::{estimate_tokens, BoundedSplitter, SizeUnit, Span};
pub use strategies::StrategyDispatcher;
