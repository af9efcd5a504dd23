// File: src/core/arpabet.rs

/// Symbol used for any code the table does not know: the mid-central vowel.
pub const DEFAULT_SYMBOL: &str = "/ə/";

/// Maps one stress-free ARPAbet code to its phonetic symbol.
/// Total: unknown codes resolve to [`DEFAULT_SYMBOL`].
pub fn code_to_symbol(code: &str) -> &'static str {
    match code {
        // Vowels and diphthongs
        "AA" => "/ɑ/", "AE" => "/æ/", "AH" => "/ə/", "AO" => "/ɔ/",
        "AW" => "/au/", "AY" => "/ai/", "EH" => "/ɛ/", "ER" => "/ɚ/",
        "EY" => "/eɪ/", "IH" => "/ɪ/", "IY" => "/i/", "OW" => "/oʊ/",
        "OY" => "/ɔɪ/", "UH" => "/ʊ/", "UW" => "/u/",
        // Consonants
        "P" => "/p/", "B" => "/b/", "T" => "/t/", "D" => "/d/",
        "K" => "/k/", "G" => "/g/", "M" => "/m/", "N" => "/n/",
        "NG" => "/ŋ/", "F" => "/f/", "V" => "/v/", "TH" => "/θ/",
        "DH" => "/ð/", "S" => "/s/", "Z" => "/z/", "SH" => "/ʃ/",
        "ZH" => "/ʒ/", "CH" => "/tʃ/", "JH" => "/dʒ/", "L" => "/l/",
        "R" => "/r/", "W" => "/w/", "Y" => "/j/", "HH" => "/h/",
        _ => DEFAULT_SYMBOL,
    }
}
