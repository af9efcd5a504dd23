// File: src/core/catalog.rs
use crate::core::types::{PhonemeAttributeEntry, PhonemeSet};
use crate::error::{LoreError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

const BUILTIN_CATALOG: &str = include_str!("../../data/phoneme_dataset.json");

/// Static symbol → attributes reference data. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct PhonemeCatalog {
    entries: Vec<PhonemeAttributeEntry>,
    /// Symbol → index of its first entry.
    index: HashMap<String, usize>,
}

impl PhonemeCatalog {
    pub fn from_entries(entries: Vec<PhonemeAttributeEntry>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            index.entry(entry.phoneme.clone()).or_insert(i);
        }
        Self { entries, index }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<PhonemeAttributeEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(LoreError::read(path))?;
        let catalog = Self::from_json_str(&json)?;
        info!(path = %path.display(), entries = catalog.len(), "phoneme catalog loaded");
        Ok(catalog)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.index.contains_key(symbol)
    }

    /// First entry whose `Phoneme` equals `symbol`.
    pub fn find(&self, symbol: &str) -> Option<&PhonemeAttributeEntry> {
        self.index.get(symbol).map(|&i| &self.entries[i])
    }

    /// Attribute records for the symbols the catalog knows, in set order.
    /// Unknown symbols are skipped, so the result is never longer than `symbols`.
    pub fn resolve(&self, symbols: &PhonemeSet) -> Vec<PhonemeAttributeEntry> {
        symbols
            .iter()
            .filter_map(|symbol| self.find(symbol))
            .cloned()
            .collect()
    }

    pub fn entries(&self) -> &[PhonemeAttributeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
