// File: src/core/clusters.rs
use crate::core::types::Symbol;
use std::collections::HashMap;

/// Longest spelling cluster the table may hold, in characters.
pub const MAX_CLUSTER_LEN: usize = 3;

/// Spelling clusters (1-3 letters) and the symbols each may stand for,
/// most likely reading first.
const BUILTIN_CLUSTERS: &[(&str, &[&str])] = &[
    ("a", &["/a/", "/aː/", "/ɑ/", "/ə/"]), ("b", &["/b/", "/bʱ/"]),
    ("c", &["/k/", "/s/", "/tʃ/"]), ("d", &["/d/", "/dʱ/", "/ɖ/", "/dˤ/"]),
    ("e", &["/e/", "/eː/", "/ɛ/", "/ə/"]), ("f", &["/f/"]),
    ("g", &["/g/", "/gʱ/", "/ɣ/"]), ("h", &["/h/", "/ħ/", "/ʕ/"]),
    ("i", &["/i/", "/iː/", "/ɪ/", "/ɨ/"]), ("j", &["/j/", "/dʒ/"]),
    ("k", &["/k/", "/kʰ/"]), ("l", &["/l/", "/ɭ/"]), ("m", &["/m/"]),
    ("n", &["/n/", "/ɳ/", "/ŋ/"]), ("o", &["/o/", "/oː/", "/ɔ/", "/ø/"]),
    ("p", &["/p/", "/pʰ/"]), ("q", &["/q/"]), ("r", &["/r/"]),
    ("s", &["/s/", "/sˤ/", "/ʃ/"]), ("t", &["/t/", "/tʰ/", "/ʈ/", "/tˤ/"]),
    ("u", &["/u/", "/uː/", "/ʊ/", "/ɯ/"]), ("v", &["/ʋ/", "/v/"]),
    ("w", &["/w/"]), ("x", &["/x/"]), ("y", &["/y/", "/i/"]), ("z", &["/z/", "/ʒ/"]),
    // Digraphs
    ("ai", &["/ai/"]), ("au", &["/au/"]), ("sh", &["/ʃ/"]), ("ch", &["/tʃ/"]),
    ("th", &["/θ/", "/ð/"]), ("zh", &["/ʒ/"]), ("ph", &["/f/"]), ("bh", &["/bʱ/"]),
    ("dh", &["/dʱ/", "/ðˤ/"]), ("gh", &["/gʱ/", "/ɣ/"]), ("kh", &["/kʰ/", "/x/"]),
    ("ng", &["/ŋ/"]), ("oe", &["/ø/", "/œ/"]), ("rh", &["/r/"]), ("dj", &["/dʒ/"]),
    ("ts", &["/tʃ/"]), ("dz", &["/dʒ/"]),
    // Trigraphs
    ("sch", &["/ʃ/"]), ("str", &["/s/", "/t/", "/r/"]), ("spr", &["/s/", "/p/", "/r/"]),
    ("thr", &["/θ/", "/r/"]), ("shr", &["/ʃ/", "/r/"]), ("khr", &["/kʰ/", "/r/"]),
    ("ghr", &["/gʱ/", "/r/"]),
];

/// Orthographic cluster → candidate symbols. Keys are lower-case.
#[derive(Debug, Clone)]
pub struct ClusterMap {
    clusters: HashMap<String, Vec<Symbol>>,
}

impl ClusterMap {
    pub fn builtin() -> Self {
        Self::from_pairs(
            BUILTIN_CLUSTERS
                .iter()
                .map(|(cluster, symbols)| (*cluster, symbols.iter().copied())),
        )
    }

    /// Builds a table from `(cluster, candidates)` pairs. Clusters longer than
    /// [`MAX_CLUSTER_LEN`] characters can never match and are dropped.
    pub fn from_pairs<K, I, S>(pairs: impl IntoIterator<Item = (K, I)>) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        let mut clusters = HashMap::new();
        for (cluster, symbols) in pairs {
            let key = cluster.as_ref().to_lowercase();
            let len = key.chars().count();
            if len == 0 || len > MAX_CLUSTER_LEN {
                continue;
            }
            clusters.insert(key, symbols.into_iter().map(Into::into).collect());
        }
        Self { clusters }
    }

    pub fn candidates(&self, cluster: &str) -> Option<&[Symbol]> {
        self.clusters.get(cluster).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

impl Default for ClusterMap {
    fn default() -> Self {
        Self::builtin()
    }
}
