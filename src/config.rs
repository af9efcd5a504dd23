//! Engine configuration.
//!
//! Read from a TOML file; every field is optional and missing ones take the
//! defaults below. Command-line flags in the binary override file values.

use crate::error::{LoreError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Catalog JSON. `None` uses the catalog compiled into the crate.
    pub catalog_path: Option<PathBuf>,
    /// CMU-style pronunciation dictionary. `None` (the default) disables the
    /// dictionary path and every name is read from its spelling.
    pub dictionary_path: Option<PathBuf>,
    /// Binary snapshot of the parsed dictionary, rebuilt when stale.
    pub snapshot_path: Option<PathBuf>,
    /// When a dictionary word yields no catalog symbols, read it with the
    /// cluster tokenizer instead of returning nothing.
    pub fallback_on_empty_dictionary_hit: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            dictionary_path: None,
            snapshot_path: None,
            fallback_on_empty_dictionary_hit: false,
        }
    }
}

impl EngineConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(LoreError::read(path))?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let paths = [
            ("catalog_path", &self.catalog_path),
            ("dictionary_path", &self.dictionary_path),
            ("snapshot_path", &self.snapshot_path),
        ];
        for (field, path) in paths {
            if matches!(path, Some(p) if p.as_os_str().is_empty()) {
                return Err(LoreError::InvalidConfig(format!("{field} is empty")));
            }
        }
        if self.snapshot_path.is_some() && self.dictionary_path.is_none() {
            return Err(LoreError::InvalidConfig(
                "snapshot_path needs a dictionary_path to rebuild from".to_string(),
            ));
        }
        Ok(())
    }
}
