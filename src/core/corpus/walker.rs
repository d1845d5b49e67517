//! Corpus directory walker with pattern-based filtering.
//!
//! Finds the paper text files of a corpus and turns them into document
//! ids. Unreadable entries are logged and skipped; the walk itself only
//! fails on invalid patterns.

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::{ChunkError, Result};

/// Walks a text directory and selects paper files
#[derive(Debug, Clone)]
pub struct FileWalker {
    /// Patterns to include (e.g., "*.txt")
    include_patterns: Vec<Pattern>,

    /// Patterns to exclude (e.g., "**/drafts/**")
    exclude_patterns: Vec<Pattern>,

    /// Text files above this size are not treated as papers
    max_file_size_bytes: u64,
}

fn compile(patterns: Vec<String>, kind: &str) -> Result<Vec<Pattern>> {
    patterns
        .into_iter()
        .map(|p| {
            Pattern::new(&p)
                .map_err(|e| ChunkError::ConfigError(format!("Invalid {kind} pattern '{p}': {e}")))
        })
        .collect()
}

impl FileWalker {
    /// Create a walker from glob patterns and a size limit in megabytes.
    ///
    /// Returns a `ConfigError` if any pattern is invalid.
    pub fn new(
        include_patterns: Vec<String>,
        exclude_patterns: Vec<String>,
        max_file_size_mb: usize,
    ) -> Result<Self> {
        Ok(Self {
            include_patterns: compile(include_patterns, "include")?,
            exclude_patterns: compile(exclude_patterns, "exclude")?,
            max_file_size_bytes: (max_file_size_mb as u64) * 1024 * 1024,
        })
    }

    /// Collect matching files under `root`, sorted by path.
    ///
    /// A missing root is reported as an empty corpus.
    pub fn collect_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            tracing::warn!("Corpus directory does not exist: {:?}", root);
            return Ok(Vec::new());
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| self.should_descend(e, root))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if let Ok(metadata) = entry.metadata() {
                if metadata.len() > self.max_file_size_bytes {
                    tracing::debug!("Skipping large file: {:?} ({} bytes)", path, metadata.len());
                    continue;
                }
            }

            if self.matches_patterns(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    /// Document ids (file stems) of the matching files, in path order
    pub fn collect_ids(&self, root: &Path) -> Result<Vec<String>> {
        Ok(self
            .collect_files(root)?
            .iter()
            .filter_map(|path| document_id(path))
            .collect())
    }

    /// Hidden and excluded directories are pruned. The root never is.
    fn should_descend(&self, entry: &DirEntry, root: &Path) -> bool {
        let path = entry.path();
        if path == root || !entry.file_type().is_dir() {
            return true;
        }

        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.starts_with('.'));
        if hidden {
            return false;
        }

        if self.exclude_patterns.iter().any(|p| p.matches_path(path)) {
            tracing::debug!("Skipping excluded directory: {:?}", path);
            return false;
        }

        true
    }

    fn matches_patterns(&self, path: &Path) -> bool {
        let Some(path_str) = path.to_str() else {
            return false;
        };
        let file_name = path.file_name().and_then(|f| f.to_str());

        let included = self.include_patterns.is_empty()
            || self
                .include_patterns
                .iter()
                .any(|p| p.matches(path_str) || file_name.is_some_and(|f| p.matches(f)));

        included && !self.exclude_patterns.iter().any(|p| p.matches(path_str))
    }
}

/// Document id of a text file: its file name without extension
pub fn document_id(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
}
