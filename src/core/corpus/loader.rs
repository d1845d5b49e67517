//! Loads papers from the corpus layout.
//!
//! A paper `<id>` is the pair `<text_dir>/<id>.txt` and
//! `<metadata_dir>/<id>.json`. Anything wrong with either file is an
//! input-missing error: the batch driver skips the paper and moves on.

use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::error::{ChunkError, Result};
use crate::core::types::{Document, DocumentMetadata};

/// Reads paper text and metadata pairs
#[derive(Debug, Clone)]
pub struct CorpusLoader {
    text_dir: PathBuf,
    metadata_dir: PathBuf,
}

/// Metadata as found on disk: required fields are checked by hand so a
/// missing one can be named in the error.
#[derive(Deserialize)]
struct RawMetadata {
    arxiv_id: Option<String>,
    title: Option<String>,
    primary_category: Option<String>,
}

impl CorpusLoader {
    pub fn new(text_dir: impl Into<PathBuf>, metadata_dir: impl Into<PathBuf>) -> Self {
        Self {
            text_dir: text_dir.into(),
            metadata_dir: metadata_dir.into(),
        }
    }

    pub fn text_path(&self, id: &str) -> PathBuf {
        self.text_dir.join(format!("{id}.txt"))
    }

    pub fn metadata_path(&self, id: &str) -> PathBuf {
        self.metadata_dir.join(format!("{id}.json"))
    }

    /// Load paper `id`.
    pub fn load(&self, id: &str) -> Result<Document> {
        let text = read_input(id, &self.text_path(id), "text file")?;
        let raw = read_input(id, &self.metadata_path(id), "metadata file")?;
        let metadata = parse_metadata(id, &raw)?;

        Ok(Document { metadata, text })
    }
}

fn read_input(id: &str, path: &Path, what: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        let what = match e.kind() {
            ErrorKind::NotFound => format!("{what} not found at {path:?}"),
            ErrorKind::InvalidData => format!("{what} at {path:?} is not valid UTF-8"),
            _ => format!("cannot read {what} at {path:?}: {e}"),
        };
        ChunkError::MissingInput {
            id: id.to_string(),
            what,
        }
    })
}

fn parse_metadata(id: &str, raw: &str) -> Result<DocumentMetadata> {
    let invalid = |message: String| ChunkError::InvalidMetadata {
        id: id.to_string(),
        message,
    };

    let parsed: RawMetadata = serde_json::from_str(raw).map_err(|e| invalid(e.to_string()))?;
    let arxiv_id = parsed
        .arxiv_id
        .ok_or_else(|| invalid("missing field `arxiv_id`".to_string()))?;
    let title = parsed
        .title
        .ok_or_else(|| invalid("missing field `title`".to_string()))?;

    if arxiv_id != id {
        tracing::debug!("Metadata for {} declares arxiv_id {}", id, arxiv_id);
    }

    Ok(DocumentMetadata {
        arxiv_id,
        title,
        primary_category: parsed
            .primary_category
            .unwrap_or_else(|| "unknown".to_string()),
    })
}
