//! Dictionary loading from disk: encodings, snapshots and config wiring.

use lore_core::core::dictionary::PronunciationDictionary;
use lore_core::persistence::{load_from_disk, load_or_build};
use lore_core::{EngineConfig, Language, LoreEngine, LoreError, ReadingSource};
use std::fs;
use tempfile::TempDir;

#[test]
fn non_utf8_file_loads_with_partial_results() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cmudict-0.7b");
    let mut bytes = b";;; header \xa9 1998\n".to_vec();
    bytes.extend_from_slice(b"JOS\xc9  HH OW0 Z EY1\n");
    bytes.extend_from_slice(b"BROKEN\n");
    bytes.extend_from_slice(b"ROSE  R OW1 Z\n");
    fs::write(&path, bytes).unwrap();

    let dict = PronunciationDictionary::load(&path).unwrap();
    assert_eq!(dict.len(), 2);
    assert_eq!(dict.first_variant("jos\u{e9}").unwrap(), &vec!["HH", "OW", "Z", "EY"]);
    assert!(!dict.contains("broken"));
}

#[test]
fn engine_built_from_config_file_uses_snapshot() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("names.dict");
    let snapshot = dir.path().join("cache").join("names.bin");
    fs::write(&source, "ROSE  R OW1 Z\n").unwrap();

    let config_path = dir.path().join("lore.toml");
    let config_text = format!(
        "dictionary_path = {:?}\nsnapshot_path = {:?}\n",
        source.display().to_string(),
        snapshot.display().to_string()
    );
    fs::write(&config_path, config_text).unwrap();

    let config = EngineConfig::load(&config_path).unwrap();
    let engine = LoreEngine::from_config(&config).unwrap();
    assert!(snapshot.exists());
    assert!(load_from_disk(&snapshot).unwrap().1.contains("rose"));

    let reading = engine.read_name("Rose", "English").unwrap();
    assert_eq!(reading.source, ReadingSource::Dictionary);
    assert!(reading.phonemes.contains("/r/"));
    assert!(reading.phonemes.contains("/z/"));
}

#[test]
fn fallback_flag_rereads_words_with_no_catalog_symbols() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("odd.dict");
    // Every code here maps to a symbol the shipped catalog lacks.
    fs::write(&source, "OY  OY1\n").unwrap();

    let strict = EngineConfig {
        dictionary_path: Some(source.clone()),
        ..EngineConfig::default()
    };
    let engine = LoreEngine::from_config(&strict).unwrap();
    assert!(engine.transliterate("oy", Language::English).is_empty());

    let lenient = EngineConfig {
        fallback_on_empty_dictionary_hit: true,
        ..strict
    };
    let engine = LoreEngine::from_config(&lenient).unwrap();
    let symbols = engine.transliterate("oy", Language::English);
    assert!(symbols.contains("/o/"));
}

#[test]
fn stale_snapshot_is_replaced() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("names.dict");
    let snapshot = dir.path().join("names.bin");

    fs::write(&source, "ROSE  R OW1 Z\n").unwrap();
    let first = load_or_build(&source, &snapshot).unwrap();
    assert!(!first.contains("liam"));

    fs::write(&source, "ROSE  R OW1 Z\nLIAM  L IY1 AH0 M\n").unwrap();
    let second = load_or_build(&source, &snapshot).unwrap();
    assert!(second.contains("liam"));
    assert!(load_from_disk(&snapshot).unwrap().1.contains("liam"));
}

#[test]
fn snapshot_from_another_dictionary_is_rebuilt() {
    let dir = TempDir::new().unwrap();
    let older = dir.path().join("b.dict");
    let newer = dir.path().join("a.dict");
    let snapshot = dir.path().join("shared.bin");

    // The second source is older than the snapshot, so only its identity differs.
    fs::write(&older, "LIAM  L IY1 AH0 M
").unwrap();
    fs::write(&newer, "ROSE  R OW1 Z
").unwrap();
    assert!(load_or_build(&newer, &snapshot).unwrap().contains("rose"));

    let dict = load_or_build(&older, &snapshot).unwrap();
    assert!(dict.contains("liam"));
    assert!(!dict.contains("rose"));

    let (header, cached) = load_from_disk(&snapshot).unwrap();
    assert_eq!(header.source, fs::canonicalize(&older).unwrap());
    assert!(cached.contains("liam"));
}

#[test]
fn default_config_reads_without_a_dictionary() {
    let engine = LoreEngine::from_config(&EngineConfig::default()).unwrap();
    assert!(engine.dictionary().is_empty());

    let reading = engine.read_name("Arjun", "Sanskrit").unwrap();
    assert_eq!(reading.source, ReadingSource::Heuristic);
    assert!(!reading.phonemes.is_empty());
}

#[test]
fn missing_dictionary_error_names_the_file() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("cmudict-missing.dict");
    let config = EngineConfig {
        dictionary_path: Some(source.clone()),
        ..EngineConfig::default()
    };

    let err = LoreEngine::from_config(&config).err().unwrap();
    assert!(matches!(&err, LoreError::Read { path, .. } if path == &source));
    assert!(err.to_string().contains("cmudict-missing.dict"));
}
