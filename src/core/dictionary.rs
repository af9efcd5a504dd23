// File: src/core/dictionary.rs
use crate::error::{LoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// Lines starting with this marker are comments.
pub const COMMENT_MARKER: &str = ";;;";

/// One pronunciation: ARPAbet codes with stress digits removed.
pub type Pronunciation = Vec<String>;

/// Exact-lookup pronunciation table, keyed by lower-case word.
/// Variants for the same word are kept in file order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PronunciationDictionary {
    entries: HashMap<String, Vec<Pronunciation>>,
}

impl PronunciationDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a dictionary file. Bytes are decoded as latin-1, so files that
    /// are not valid UTF-8 still load.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(LoreError::read(path))?;
        let dict = Self::parse_bytes(&bytes);
        info!(
            path = %path.display(),
            words = dict.len(),
            variants = dict.variant_count(),
            "pronunciation dictionary loaded"
        );
        Ok(dict)
    }

    /// Latin-1 decode: every byte becomes the code point of the same value.
    pub fn parse_bytes(bytes: &[u8]) -> Self {
        let text: String = bytes.iter().map(|&b| char::from(b)).collect();
        Self::parse_str(&text)
    }

    /// Best-effort parse. Comments and lines with fewer than two tokens
    /// are skipped without complaint.
    pub fn parse_str(text: &str) -> Self {
        let mut dict = Self::new();
        for line in text.lines() {
            dict.add_line(line);
        }
        dict
    }

    fn add_line(&mut self, line: &str) {
        if line.starts_with(COMMENT_MARKER) {
            return;
        }
        let mut tokens = line.split_whitespace();
        let Some(word) = tokens.next() else { return };
        let codes: Pronunciation = tokens.map(|code| strip_stress(code).to_string()).collect();
        if codes.is_empty() {
            return;
        }
        self.entries.entry(word.to_lowercase()).or_default().push(codes);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn variants(&self, word: &str) -> Option<&[Pronunciation]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    pub fn first_variant(&self, word: &str) -> Option<&Pronunciation> {
        self.entries.get(word).and_then(|variants| variants.first())
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of pronunciations across all words.
    pub fn variant_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

/// `AE1` → `AE`. Strips any run of trailing ASCII digits.
pub fn strip_stress(code: &str) -> &str {
    code.trim_end_matches(|c: char| c.is_ascii_digit())
}
