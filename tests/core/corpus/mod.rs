//! Corpus driver tests
//!
//! Runs the pipeline over temporary corpora with the JSON sink and with
//! sinks that fail.
