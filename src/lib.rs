// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod lore;
pub mod persistence;

pub use crate::config::EngineConfig;
pub use crate::core::engine::{LoreEngine, NameReading, ReadingSource};
pub use crate::core::types::{Archetype, Language, PhonemeAttributeEntry, PhonemeSet};
pub use crate::error::{LoreError, Result};
