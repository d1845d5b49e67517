//! Config directory lookup
//!
//! Resolves where paperchunk looks for its configuration file on
//! Linux/Unix systems.

use std::env;
use std::path::PathBuf;

/// XDG directory structure for paperchunk
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
}

impl XdgDirs {
    /// `PAPERCHUNK_CONFIG_DIR` wins over `XDG_CONFIG_HOME`, which wins
    /// over `~/.config`.
    pub fn new() -> Self {
        Self {
            config_dir: resolve("PAPERCHUNK_CONFIG_DIR", "XDG_CONFIG_HOME", ".config"),
        }
    }

    /// Config file path, honoring PAPERCHUNK_CONFIG_FILE
    pub fn config_file(&self) -> PathBuf {
        if let Ok(file) = env::var("PAPERCHUNK_CONFIG_FILE") {
            return PathBuf::from(file);
        }

        self.config_dir.join("config.toml")
    }

    /// Debug-log the directories in use
    pub fn log_paths(&self) {
        tracing::debug!("XDG directories resolved:");
        tracing::debug!("  Config: {:?}", self.config_dir);
        tracing::debug!("  Config file: {:?}", self.config_file());
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve(explicit_var: &str, xdg_var: &str, home_fallback: &str) -> PathBuf {
    if let Ok(dir) = env::var(explicit_var) {
        return PathBuf::from(dir);
    }

    if let Ok(base) = env::var(xdg_var) {
        return PathBuf::from(base).join("paperchunk");
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(home_fallback)
        .join("paperchunk")
}
