// Test fixtures for integration testing

use paperchunk::core::config::Config;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A small structured paper with front matter and every common heading
#[allow(dead_code)]
pub fn sample_paper() -> String {
    let mut text = String::from("Sparse Routing for Long Documents\nA. Author, B. Author\n\n");
    text.push_str("Abstract\n");
    text.push_str(&"We propose a routing scheme for long documents. ".repeat(4));
    text.push_str("\n\n1. Introduction\n");
    text.push_str(&"Long documents are hard to retrieve from. ".repeat(30));
    text.push_str("\n\n2 Related Work\nPrior work exists.\n\n3. Methods\n");
    text.push_str(&"We route each paragraph to a bucket.\n".repeat(20));
    text.push_str("\n4. Experiments\n");
    text.push_str(&"Accuracy went up on every benchmark we tried. ".repeat(10));
    text.push_str("\n\nConclusion\n");
    text.push_str(&"Routing helps and is cheap to compute. ".repeat(4));
    text.push_str("\n\nReferences\n[1] Someone. A paper. 2020.\n");
    text
}

/// A paper whose introduction is far above the sub-split threshold
#[allow(dead_code)]
pub fn long_paper() -> String {
    format!("Abstract\nFoo bar.\n\nIntroduction\n{}", "word ".repeat(1000))
}

/// Temporary corpus laid out as text/, metadata/, chunked/ and logs/
#[allow(dead_code)]
pub struct TestCorpus {
    pub dir: TempDir,
}

#[allow(dead_code)]
impl TestCorpus {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(dir.path().join("text")).expect("Failed to create text dir");
        fs::create_dir_all(dir.path().join("metadata")).expect("Failed to create metadata dir");
        Self { dir }
    }

    pub fn text_dir(&self) -> PathBuf {
        self.dir.path().join("text")
    }

    pub fn metadata_dir(&self) -> PathBuf {
        self.dir.path().join("metadata")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("chunked")
    }

    pub fn summary_file(&self) -> PathBuf {
        self.dir.path().join("logs/chunking_summary.json")
    }

    /// Add a paper with both text and metadata
    pub fn add_paper(&self, id: &str, text: &str) -> &Self {
        self.add_text(id, text);
        self.add_metadata(
            id,
            &format!(r#"{{"arxiv_id": "{id}", "title": "Paper {id}", "primary_category": "cs.IR"}}"#),
        );
        self
    }

    pub fn add_text(&self, id: &str, text: &str) -> &Self {
        fs::write(self.text_dir().join(format!("{id}.txt")), text).expect("Failed to write text");
        self
    }

    pub fn add_metadata(&self, id: &str, json: &str) -> &Self {
        fs::write(self.metadata_dir().join(format!("{id}.json")), json)
            .expect("Failed to write metadata");
        self
    }

    /// Default configuration pointed at this corpus
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.corpus.text_dir = self.text_dir();
        config.corpus.metadata_dir = self.metadata_dir();
        config.corpus.output_dir = self.output_dir();
        config.corpus.summary_file = self.summary_file();
        config.limits.max_concurrent_documents = 4;
        config
    }
}
