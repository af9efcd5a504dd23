use crate::config::EngineConfig;
use crate::core::arpabet::code_to_symbol;
use crate::core::archetype::select_archetype;
use crate::core::catalog::PhonemeCatalog;
use crate::core::converter::ClusterTokenizer;
use crate::core::dictionary::PronunciationDictionary;
use crate::core::language::LanguageRules;
use crate::core::types::{Archetype, Language, PhonemeAttributeEntry, PhonemeSet};
use crate::error::Result;
use crate::persistence::load_or_build;
use serde::Serialize;
use tracing::{debug, info, warn};

/// The pronunciation dictionary only describes names read in this language.
pub const DICTIONARY_LANGUAGE: Language = Language::English;

/// Which lookup produced a reading's symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReadingSource {
    Dictionary,
    Heuristic,
}

/// Everything the pipeline derives from one (name, language) pair.
#[derive(Debug, Clone, Serialize)]
pub struct NameReading {
    pub name: String,
    pub language: Language,
    pub source: ReadingSource,
    pub phonemes: PhonemeSet,
    pub attributes: Vec<PhonemeAttributeEntry>,
    pub archetype: Archetype,
}

// All tables are built once and never mutated, so a single engine can be
// shared across threads by reference.
pub struct LoreEngine {
    catalog: PhonemeCatalog,
    tokenizer: ClusterTokenizer,
    rules: LanguageRules,
    dictionary: PronunciationDictionary,
    fallback_on_empty_dictionary_hit: bool,
}

impl LoreEngine {
    pub fn new(
        catalog: PhonemeCatalog,
        tokenizer: ClusterTokenizer,
        rules: LanguageRules,
        dictionary: PronunciationDictionary,
    ) -> Self {
        Self {
            catalog,
            tokenizer,
            rules,
            dictionary,
            fallback_on_empty_dictionary_hit: false,
        }
    }

    /// Built-in catalog and tables around the given dictionary.
    pub fn with_dictionary(dictionary: PronunciationDictionary) -> Result<Self> {
        Ok(Self::new(
            PhonemeCatalog::builtin()?,
            ClusterTokenizer::default(),
            LanguageRules::builtin(),
            dictionary,
        ))
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;

        let catalog = match &config.catalog_path {
            Some(path) => PhonemeCatalog::load(path)?,
            None => PhonemeCatalog::builtin()?,
        };

        let dictionary = match (&config.dictionary_path, &config.snapshot_path) {
            (Some(source), Some(snapshot)) => load_or_build(source, snapshot)?,
            (Some(source), None) => PronunciationDictionary::load(source)?,
            (None, _) => {
                warn!("no pronunciation dictionary configured, every name is read heuristically");
                PronunciationDictionary::new()
            }
        };

        info!(
            catalog = catalog.len(),
            dictionary = dictionary.len(),
            "lore engine ready"
        );
        Ok(Self::new(catalog, ClusterTokenizer::default(), LanguageRules::builtin(), dictionary)
            .fallback_on_empty_dictionary_hit(config.fallback_on_empty_dictionary_hit))
    }

    pub fn fallback_on_empty_dictionary_hit(mut self, enabled: bool) -> Self {
        self.fallback_on_empty_dictionary_hit = enabled;
        self
    }

    pub fn catalog(&self) -> &PhonemeCatalog {
        &self.catalog
    }

    pub fn dictionary(&self) -> &PronunciationDictionary {
        &self.dictionary
    }

    /// Symbols for `name` read in `language`.
    pub fn transliterate(&self, name: &str, language: Language) -> PhonemeSet {
        self.transliterate_with_source(name, language).1
    }

    /// Like [`transliterate`](Self::transliterate) but takes a language tag,
    /// failing on tags outside the supported set before any work is done.
    pub fn transliterate_tagged(&self, name: &str, language: &str) -> Result<PhonemeSet> {
        let language: Language = language.parse()?;
        Ok(self.transliterate(name, language))
    }

    fn transliterate_with_source(&self, name: &str, language: Language) -> (ReadingSource, PhonemeSet) {
        let name = name.trim().to_lowercase();

        if language == DICTIONARY_LANGUAGE {
            if let Some(codes) = self.dictionary.first_variant(&name) {
                let symbols: PhonemeSet = codes
                    .iter()
                    .map(|code| code_to_symbol(code))
                    .filter(|symbol| self.catalog.contains(symbol))
                    .collect();

                if !symbols.is_empty() || !self.fallback_on_empty_dictionary_hit {
                    debug!(name = %name, symbols = symbols.len(), "read from pronunciation dictionary");
                    return (ReadingSource::Dictionary, symbols);
                }
                debug!(name = %name, "dictionary reading empty after catalog filter, using clusters");
            }
        }

        let symbols = self.tokenizer.tokenize(&name, self.rules.constraint(language));
        debug!(name = %name, %language, symbols = symbols.len(), "read from spelling clusters");
        (ReadingSource::Heuristic, symbols)
    }

    pub fn resolve(&self, symbols: &PhonemeSet) -> Vec<PhonemeAttributeEntry> {
        self.catalog.resolve(symbols)
    }

    pub fn select_archetype(&self, attributes: &[PhonemeAttributeEntry]) -> Archetype {
        select_archetype(attributes)
    }

    /// Runs the whole pipeline: transliterate, resolve, pick the archetype.
    pub fn read_name(&self, name: &str, language: &str) -> Result<NameReading> {
        let language: Language = language.parse()?;
        let (source, phonemes) = self.transliterate_with_source(name, language);
        let attributes = self.resolve(&phonemes);
        let archetype = self.select_archetype(&attributes);

        if phonemes.is_empty() {
            warn!(name = %name.trim(), %language, "no phonemes detected");
        }

        Ok(NameReading {
            name: name.trim().to_string(),
            language,
            source,
            phonemes,
            attributes,
            archetype,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoreError;

    fn entry(phoneme: &str, bhava: &str) -> PhonemeAttributeEntry {
        PhonemeAttributeEntry {
            phoneme: phoneme.to_string(),
            chakra: "Muladhara".to_string(),
            element: "Earth".to_string(),
            bhava: bhava.to_string(),
            rasa: "Vira".to_string(),
            cultural_notes: String::new(),
        }
    }

    fn engine(catalog: Vec<PhonemeAttributeEntry>, dict: &str) -> LoreEngine {
        LoreEngine::new(
            PhonemeCatalog::from_entries(catalog),
            ClusterTokenizer::default(),
            LanguageRules::builtin(),
            PronunciationDictionary::parse_str(dict),
        )
    }

    #[test]
    fn bat_reads_from_dictionary_and_drops_unknown_vowel() {
        let engine = engine(vec![entry("/b/", "Stability"), entry("/t/", "Power")], "BAT  B AE1 T1\n");
        let reading = engine.read_name("Bat", "English").unwrap();
        assert_eq!(reading.source, ReadingSource::Dictionary);
        let expected: PhonemeSet = ["/b/", "/t/"].into_iter().collect();
        assert_eq!(reading.phonemes, expected);
        assert_eq!(reading.attributes.len(), 2);
    }

    #[test]
    fn dictionary_is_ignored_for_other_languages() {
        let engine = engine(vec![entry("/b/", "Power")], "BAT  B AE1 T1\n");
        let (source, _) = engine.transliterate_with_source("bat", Language::Hindi);
        assert_eq!(source, ReadingSource::Heuristic);
    }

    #[test]
    fn empty_dictionary_hit_stays_empty_by_default() {
        let engine = engine(vec![], "BAT  B AE1 T1\n");
        assert!(engine.transliterate("bat", Language::English).is_empty());
    }

    #[test]
    fn empty_dictionary_hit_can_fall_back_to_clusters() {
        let engine = engine(vec![], "BAT  B AE1 T1\n").fallback_on_empty_dictionary_hit(true);
        let (source, symbols) = engine.transliterate_with_source("bat", Language::English);
        assert_eq!(source, ReadingSource::Heuristic);
        assert!(symbols.contains("/b/"));
        assert!(symbols.contains("/t/"));
    }

    #[test]
    fn unknown_language_fails_fast() {
        let engine = engine(vec![], "");
        assert!(matches!(
            engine.transliterate_tagged("arjun", "Elvish"),
            Err(LoreError::UnsupportedLanguage(_))
        ));
        assert!(engine.read_name("arjun", "Elvish").is_err());
    }

    #[test]
    fn builtin_tables_read_sample_word() {
        let dict = PronunciationDictionary::parse_str("EMMA  EH1 M AH0\n");
        let engine = LoreEngine::with_dictionary(dict).unwrap();
        let symbols = engine.transliterate("emma", Language::English);
        let expected: PhonemeSet = ["/ɛ/", "/m/", "/ə/"].into_iter().collect();
        assert_eq!(symbols, expected);
    }

    #[test]
    fn whitespace_and_case_are_normalized() {
        let engine = engine(vec![], "");
        assert_eq!(
            engine.transliterate("  ARJUN ", Language::Sanskrit),
            engine.transliterate("arjun", Language::Sanskrit)
        );
    }
}
