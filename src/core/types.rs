// src/core/types.rs
use crate::error::LoreError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// A phonetic symbol such as `/ʃ/`. Symbols carry their slashes.
pub type Symbol = String;

/// One record of the phoneme attribute catalog.
/// Field names on disk are kept exactly as the catalog file spells them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhonemeAttributeEntry {
    #[serde(rename = "Phoneme")]
    pub phoneme: Symbol,
    #[serde(rename = "Chakra")]
    pub chakra: String,
    #[serde(rename = "Element")]
    pub element: String,
    /// Emotional register. Usually one of the [`Bhava`] labels, but the
    /// catalog is free to carry others; those are ignored when tallying.
    #[serde(rename = "Bhava")]
    pub bhava: String,
    #[serde(rename = "Rasa")]
    pub rasa: String,
    #[serde(rename = "Cultural Notes")]
    pub cultural_notes: String,
}

/// The closed set of languages a name can be read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Sanskrit,
    Hindi,
    Kannada,
    Arabic,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Sanskrit,
        Language::Hindi,
        Language::Kannada,
        Language::Arabic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Sanskrit => "Sanskrit",
            Language::Hindi => "Hindi",
            Language::Kannada => "Kannada",
            Language::Arabic => "Arabic",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = LoreError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let tag = tag.trim();
        Language::ALL
            .into_iter()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| LoreError::UnsupportedLanguage(tag.to_string()))
    }
}

/// The fixed Bhava vocabulary. Declaration order is the tie-break order
/// used by the archetype selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bhava {
    Power,
    Compassion,
    Creativity,
    Stability,
    Expression,
    Intuition,
}

impl Bhava {
    pub const VOCABULARY: [Bhava; 6] = [
        Bhava::Power,
        Bhava::Compassion,
        Bhava::Creativity,
        Bhava::Stability,
        Bhava::Expression,
        Bhava::Intuition,
    ];

    /// Exact, case-sensitive match against the vocabulary.
    pub fn from_label(label: &str) -> Option<Bhava> {
        match label {
            "Power" => Some(Bhava::Power),
            "Compassion" => Some(Bhava::Compassion),
            "Creativity" => Some(Bhava::Creativity),
            "Stability" => Some(Bhava::Stability),
            "Expression" => Some(Bhava::Expression),
            "Intuition" => Some(Bhava::Intuition),
            _ => None,
        }
    }

    /// Position in [`Bhava::VOCABULARY`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Narrative template picked for a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Warrior,
    Sage,
    Trickster,
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Archetype::Warrior => "Warrior",
            Archetype::Sage => "Sage",
            Archetype::Trickster => "Trickster",
        };
        f.write_str(label)
    }
}

/// Symbols produced for one (name, language) pair.
///
/// Keeps first-insertion order for display and rejects duplicates.
/// Two sets compare equal when they hold the same symbols, whatever the order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct PhonemeSet {
    symbols: Vec<Symbol>,
    seen: HashSet<Symbol>,
}

impl PhonemeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the symbol was already present.
    pub fn insert(&mut self, symbol: impl Into<Symbol>) -> bool {
        let symbol = symbol.into();
        if self.seen.contains(&symbol) {
            return false;
        }
        self.seen.insert(symbol.clone());
        self.symbols.push(symbol);
        true
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.seen.contains(symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl PartialEq for PhonemeSet {
    fn eq(&self, other: &Self) -> bool {
        self.seen == other.seen
    }
}

impl Eq for PhonemeSet {}

impl<S: Into<Symbol>> FromIterator<S> for PhonemeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = PhonemeSet::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<Symbol>> Extend<S> for PhonemeSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for symbol in iter {
            self.insert(symbol);
        }
    }
}

impl From<Vec<Symbol>> for PhonemeSet {
    fn from(symbols: Vec<Symbol>) -> Self {
        symbols.into_iter().collect()
    }
}

impl From<PhonemeSet> for Vec<Symbol> {
    fn from(set: PhonemeSet) -> Self {
        set.symbols
    }
}

impl<'a> IntoIterator for &'a PhonemeSet {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_tags_parse_case_insensitively() {
        assert_eq!("sanskrit".parse::<Language>().unwrap(), Language::Sanskrit);
        assert_eq!(" Arabic ".parse::<Language>().unwrap(), Language::Arabic);
        assert!(matches!(
            "Klingon".parse::<Language>(),
            Err(LoreError::UnsupportedLanguage(tag)) if tag == "Klingon"
        ));
    }

    #[test]
    fn phoneme_set_rejects_duplicates_and_keeps_order() {
        let mut set = PhonemeSet::new();
        assert!(set.insert("/k/"));
        assert!(set.insert("/a/"));
        assert!(!set.insert("/k/"));
        assert_eq!(set.as_slice(), &["/k/".to_string(), "/a/".to_string()]);
    }

    #[test]
    fn phoneme_set_equality_ignores_order() {
        let a: PhonemeSet = ["/a/", "/b/"].into_iter().collect();
        let b: PhonemeSet = ["/b/", "/a/"].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn bhava_vocabulary_order_matches_index() {
        for (i, bhava) in Bhava::VOCABULARY.iter().enumerate() {
            assert_eq!(bhava.index(), i);
        }
        assert_eq!(Bhava::from_label("power"), None);
    }
}
