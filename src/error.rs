// File: src/error.rs
use std::path::{Path, PathBuf};

/// Everything that can go wrong while loading tables or reading a name.
/// Reading itself only fails on an unsupported language tag.
#[derive(thiserror::Error, Debug)]
pub enum LoreError {
    #[error("unsupported language: {0:?}")]
    UnsupportedLanguage(String),
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog error: {0}")]
    Catalog(#[from] serde_json::Error),
    #[error("dictionary snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl LoreError {
    /// Wraps an IO error with the file it came from.
    pub fn read(path: &Path) -> impl FnOnce(std::io::Error) -> LoreError + '_ {
        move |source| LoreError::Read {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LoreError>;
