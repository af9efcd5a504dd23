//! Hand-off to the generative collaborators.
//!
//! The engine stops at a [`NameReading`]. Text and image generation happen
//! elsewhere; this module turns a reading into the prompts those services
//! receive, plus a serializable bundle carrying everything they need.

use crate::core::engine::NameReading;
use crate::core::types::{Archetype, Language, PhonemeAttributeEntry, Symbol};
use serde::Serialize;

/// Distinct attribute values of a reading, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttributeSummary {
    pub phonemes: Vec<Symbol>,
    pub chakras: Vec<String>,
    pub elements: Vec<String>,
    pub bhavas: Vec<String>,
    pub rasas: Vec<String>,
    pub cultural_notes: Vec<String>,
}

impl AttributeSummary {
    pub fn from_attributes(attributes: &[PhonemeAttributeEntry]) -> Self {
        let mut summary = Self::default();
        for attr in attributes {
            summary.phonemes.push(attr.phoneme.clone());
            push_unique(&mut summary.chakras, &attr.chakra);
            push_unique(&mut summary.elements, &attr.element);
            push_unique(&mut summary.bhavas, &attr.bhava);
            push_unique(&mut summary.rasas, &attr.rasa);
            summary.cultural_notes.push(attr.cultural_notes.clone());
        }
        summary
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

/// Prompt for the lore text, shaped by the archetype.
pub fn lore_prompt(name: &str, attributes: &[PhonemeAttributeEntry], archetype: Archetype) -> String {
    let s = AttributeSummary::from_attributes(attributes);
    let phonemes = s.phonemes.join(", ");
    let bhavas = s.bhavas.join(", ");
    let chakras = s.chakras.join(", ");
    let elements = s.elements.join(", ");
    let rasas = s.rasas.join(", ");
    let notes = s.cultural_notes.join("; ");

    match archetype {
        Archetype::Warrior => format!(
            "Create a fantastical, mythical lore (400-600 words) for a warrior named {name}. \
             Their name's sounds ({phonemes}) evoke {bhavas} and are tied to {chakras} chakras \
             and {elements} elements. Weave a tale of epic battles, divine weapons, and a quest \
             to restore balance, infused with {rasas} emotions. Include cultural notes: {notes}."
        ),
        Archetype::Sage => format!(
            "Create a fantastical, mythical lore (400-600 words) for a sage named {name}. \
             Their name's sounds ({phonemes}) resonate with {bhavas}, linked to {chakras} chakras \
             and {elements} elements. Craft a story of wisdom, ancient prophecies, and spiritual \
             guidance, filled with {rasas} emotions. Include cultural notes: {notes}."
        ),
        Archetype::Trickster => format!(
            "Create a fantastical, mythical lore (400-600 words) for a trickster named {name}. \
             Their name's sounds ({phonemes}) embody {bhavas}, connected to {chakras} chakras \
             and {elements} elements. Spin a tale of cunning, magical pranks, and unexpected \
             heroism, infused with {rasas} emotions. Include cultural notes: {notes}."
        ),
    }
}

/// Prompt for the portrait image. Element names are lower-cased.
pub fn portrait_prompt(name: &str, attributes: &[PhonemeAttributeEntry], archetype: Archetype) -> String {
    let mut elements: Vec<String> = Vec::new();
    for attr in attributes {
        push_unique(&mut elements, &attr.element.to_lowercase());
    }
    let elements = elements.join(", ");

    match archetype {
        Archetype::Warrior => format!(
            "A majestic portrait of {name}, a fierce warrior in ornate armor, wielding a glowing \
             divine weapon, standing on a battlefield with {elements}. Mythical, vibrant, epic."
        ),
        Archetype::Sage => format!(
            "A serene portrait of {name}, a wise sage in flowing robes, surrounded by glowing \
             runes and {elements}, meditating in an ancient temple. Mystical, ethereal."
        ),
        Archetype::Trickster => format!(
            "A whimsical portrait of {name}, a cunning trickster with a mischievous grin, \
             juggling magical orbs of {elements}, in a vibrant, enchanted forest. Playful, \
             fantastical."
        ),
    }
}

/// Everything the generative collaborators receive for one name.
#[derive(Debug, Clone, Serialize)]
pub struct LoreRequest {
    pub name: String,
    pub language: Language,
    pub archetype: Archetype,
    pub phonemes: Vec<Symbol>,
    pub attributes: Vec<PhonemeAttributeEntry>,
    pub lore_prompt: String,
    pub portrait_prompt: String,
}

impl From<&NameReading> for LoreRequest {
    fn from(reading: &NameReading) -> Self {
        Self {
            name: reading.name.clone(),
            language: reading.language,
            archetype: reading.archetype,
            phonemes: reading.phonemes.as_slice().to_vec(),
            attributes: reading.attributes.clone(),
            lore_prompt: lore_prompt(&reading.name, &reading.attributes, reading.archetype),
            portrait_prompt: portrait_prompt(&reading.name, &reading.attributes, reading.archetype),
        }
    }
}
