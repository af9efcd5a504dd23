// src/core/mod.rs

pub mod archetype;
pub mod arpabet;
pub mod catalog;
pub mod clusters;
pub mod converter;
pub mod dictionary;
pub mod engine;
pub mod language;
pub mod types;
