// File: src/core/archetype.rs
use crate::core::types::{Archetype, Bhava, PhonemeAttributeEntry};

/// Picks the narrative archetype from the dominant Bhava.
///
/// Counts are taken over the fixed vocabulary only; other labels are
/// ignored. The first vocabulary entry to reach the maximum wins. An empty
/// list reads as Sage.
pub fn select_archetype(attributes: &[PhonemeAttributeEntry]) -> Archetype {
    if attributes.is_empty() {
        return Archetype::Sage;
    }

    let mut counts = [0usize; Bhava::VOCABULARY.len()];
    for bhava in attributes.iter().filter_map(|attr| Bhava::from_label(&attr.bhava)) {
        counts[bhava.index()] += 1;
    }

    let mut dominant = Bhava::VOCABULARY[0];
    for bhava in Bhava::VOCABULARY.into_iter().skip(1) {
        if counts[bhava.index()] > counts[dominant.index()] {
            dominant = bhava;
        }
    }

    archetype_for(dominant)
}

fn archetype_for(bhava: Bhava) -> Archetype {
    match bhava {
        Bhava::Power => Archetype::Warrior,
        Bhava::Compassion | Bhava::Intuition => Archetype::Sage,
        Bhava::Creativity | Bhava::Expression => Archetype::Trickster,
        Bhava::Stability => Archetype::Sage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_bhavas(bhavas: &[&str]) -> Vec<PhonemeAttributeEntry> {
        bhavas
            .iter()
            .enumerate()
            .map(|(i, bhava)| PhonemeAttributeEntry {
                phoneme: format!("/p{i}/"),
                chakra: String::new(),
                element: String::new(),
                bhava: bhava.to_string(),
                rasa: String::new(),
                cultural_notes: String::new(),
            })
            .collect()
    }

    #[test]
    fn empty_reads_as_sage() {
        assert_eq!(select_archetype(&[]), Archetype::Sage);
    }

    #[test]
    fn tie_goes_to_earlier_vocabulary_entry() {
        let attrs = with_bhavas(&["Compassion", "Power", "Compassion", "Power"]);
        assert_eq!(select_archetype(&attrs), Archetype::Warrior);

        let attrs = with_bhavas(&["Expression", "Compassion"]);
        assert_eq!(select_archetype(&attrs), Archetype::Sage);
    }

    #[test]
    fn dominant_bhava_maps_to_archetype() {
        assert_eq!(select_archetype(&with_bhavas(&["Creativity"])), Archetype::Trickster);
        assert_eq!(select_archetype(&with_bhavas(&["Expression", "Expression", "Power"])), Archetype::Trickster);
        assert_eq!(select_archetype(&with_bhavas(&["Intuition"])), Archetype::Sage);
        assert_eq!(select_archetype(&with_bhavas(&["Stability", "Stability", "Power"])), Archetype::Sage);
    }

    #[test]
    fn unknown_labels_are_not_counted() {
        let attrs = with_bhavas(&["Mystery", "Mystery", "Mystery", "Creativity"]);
        assert_eq!(select_archetype(&attrs), Archetype::Trickster);
    }

    #[test]
    fn all_unknown_labels_leave_power_as_first_maximum() {
        let attrs = with_bhavas(&["Mystery", "Devotion"]);
        assert_eq!(select_archetype(&attrs), Archetype::Warrior);
    }
}
