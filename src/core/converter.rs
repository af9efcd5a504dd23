// File: src/core/converter.rs
use crate::core::clusters::{ClusterMap, MAX_CLUSTER_LEN};
use crate::core::language::LanguageConstraint;
use crate::core::types::PhonemeSet;

/// Greedy longest-match segmenter from spelling clusters to phonetic symbols.
pub struct ClusterTokenizer {
    clusters: ClusterMap,
}

impl ClusterTokenizer {
    pub fn new(clusters: ClusterMap) -> Self {
        Self { clusters }
    }

    /// Segments an already-normalized name and keeps the candidates the
    /// language admits.
    ///
    /// At each position the longest registered cluster wins (3, then 2, then 1
    /// characters). Filtering happens after that choice: a 3-letter cluster
    /// whose candidates are all rejected still consumes its letters.
    /// Characters with no cluster at all are skipped.
    pub fn tokenize(&self, name: &str, constraint: &LanguageConstraint) -> PhonemeSet {
        let chars: Vec<char> = name.chars().collect();
        let mut result = PhonemeSet::new();
        let mut buf = String::with_capacity(MAX_CLUSTER_LEN * 4);
        let mut i = 0;

        while i < chars.len() {
            let longest = MAX_CLUSTER_LEN.min(chars.len() - i);
            let mut consumed = 1;

            for len in (1..=longest).rev() {
                buf.clear();
                buf.extend(&chars[i..i + len]);
                if let Some(candidates) = self.clusters.candidates(&buf) {
                    result.extend(
                        candidates
                            .iter()
                            .filter(|symbol| constraint.admits(symbol))
                            .cloned(),
                    );
                    consumed = len;
                    break;
                }
            }

            i += consumed;
        }

        result
    }
}

impl Default for ClusterTokenizer {
    fn default() -> Self {
        Self::new(ClusterMap::builtin())
    }
}
