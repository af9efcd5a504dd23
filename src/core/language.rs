// File: src/core/language.rs
use crate::core::types::{Language, Symbol};
use std::collections::HashSet;

const INDIC_VOWELS: &[&str] = &[
    "/a/", "/aː/", "/i/", "/iː/", "/u/", "/uː/", "/e/", "/eː/", "/o/", "/oː/", "/ai/", "/au/",
];

const INDIC_CONSONANTS: &[&str] = &[
    "/p/", "/pʰ/", "/b/", "/bʱ/", "/t/", "/tʰ/", "/d/", "/dʱ/", "/ʈ/", "/ɖ/", "/k/", "/kʰ/",
    "/g/", "/gʱ/", "/m/", "/n/", "/ɳ/", "/s/", "/ʃ/", "/h/", "/l/", "/ɭ/", "/r/", "/ʋ/", "/j/",
];

// Sanskrit readings keep the palatal sibilant out of the admissible set.
const SANSKRIT_CONSONANTS: &[&str] = &[
    "/p/", "/pʰ/", "/b/", "/bʱ/", "/t/", "/tʰ/", "/d/", "/dʱ/", "/ʈ/", "/ɖ/", "/k/", "/kʰ/",
    "/g/", "/gʱ/", "/m/", "/n/", "/ɳ/", "/s/", "/h/", "/l/", "/ɭ/", "/r/", "/ʋ/", "/j/",
];

const KANNADA_VOWELS: &[&str] = &[
    "/a/", "/aː/", "/i/", "/iː/", "/u/", "/uː/", "/e/", "/eː/", "/o/", "/oː/",
];

const ARABIC_VOWELS: &[&str] = &["/a/", "/aː/", "/i/", "/iː/", "/u/", "/uː/"];

const ARABIC_CONSONANTS: &[&str] = &[
    "/p/", "/b/", "/t/", "/d/", "/k/", "/g/", "/q/", "/ʔ/", "/tˤ/", "/dˤ/", "/m/", "/n/",
    "/s/", "/ʃ/", "/x/", "/ħ/", "/h/", "/ð/", "/z/", "/ɣ/", "/ʕ/", "/sˤ/", "/ðˤ/", "/dʒ/",
    "/ʒ/", "/l/", "/r/", "/j/", "/w/",
];

const ENGLISH_VOWELS: &[&str] = &[
    "/a/", "/e/", "/i/", "/o/", "/u/", "/ɛ/", "/ɔ/", "/ɑ/", "/ɪ/", "/ʊ/", "/ə/", "/ai/", "/au/",
];

const ENGLISH_CONSONANTS: &[&str] = &[
    "/p/", "/b/", "/t/", "/d/", "/k/", "/g/", "/m/", "/n/", "/ŋ/", "/f/", "/θ/", "/s/", "/ʃ/",
    "/h/", "/ð/", "/z/", "/dʒ/", "/ʒ/", "/tʃ/", "/l/", "/r/", "/w/", "/j/",
];

/// Symbols a language admits on the heuristic path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageConstraint {
    pub vowels: HashSet<Symbol>,
    pub consonants: HashSet<Symbol>,
}

impl LanguageConstraint {
    pub fn new<V, C>(vowels: V, consonants: C) -> Self
    where
        V: IntoIterator,
        V::Item: Into<Symbol>,
        C: IntoIterator,
        C::Item: Into<Symbol>,
    {
        Self {
            vowels: vowels.into_iter().map(Into::into).collect(),
            consonants: consonants.into_iter().map(Into::into).collect(),
        }
    }

    pub fn admits(&self, symbol: &str) -> bool {
        self.vowels.contains(symbol) || self.consonants.contains(symbol)
    }
}

/// One constraint per supported language.
#[derive(Debug, Clone)]
pub struct LanguageRules {
    sanskrit: LanguageConstraint,
    hindi: LanguageConstraint,
    kannada: LanguageConstraint,
    arabic: LanguageConstraint,
    english: LanguageConstraint,
}

fn constraint_from(vowels: &[&str], consonants: &[&str]) -> LanguageConstraint {
    LanguageConstraint::new(vowels.iter().copied(), consonants.iter().copied())
}

impl LanguageRules {
    pub fn builtin() -> Self {
        Self {
            sanskrit: constraint_from(INDIC_VOWELS, SANSKRIT_CONSONANTS),
            hindi: constraint_from(INDIC_VOWELS, INDIC_CONSONANTS),
            kannada: constraint_from(KANNADA_VOWELS, INDIC_CONSONANTS),
            arabic: constraint_from(ARABIC_VOWELS, ARABIC_CONSONANTS),
            english: constraint_from(ENGLISH_VOWELS, ENGLISH_CONSONANTS),
        }
    }

    pub fn constraint(&self, language: Language) -> &LanguageConstraint {
        match language {
            Language::Sanskrit => &self.sanskrit,
            Language::Hindi => &self.hindi,
            Language::Kannada => &self.kannada,
            Language::Arabic => &self.arabic,
            Language::English => &self.english,
        }
    }
}

impl Default for LanguageRules {
    fn default() -> Self {
        Self::builtin()
    }
}
