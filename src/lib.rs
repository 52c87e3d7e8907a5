//! # archetype-ccg
//!
//! Procedural card generation, deck validation and deck persistence for an
//! archetype-based collectible card game.
//!
//! ## Design Principles
//!
//! 1. **Budgeted Stats**: A card's attack + health comes from a budget that
//!    grows with cost; the archetype decides the split, jitter keeps cards
//!    varied.
//!
//! 2. **One Validation Rule Set**: Every flow that saves or plays a deck goes
//!    through `DeckValidator`. Required card fields are declared once
//!    (`CardField::REQUIRED`).
//!
//! 3. **Injectable Edges**: Randomness (`StatRng`) and persistence
//!    (`DeckStore`) are traits, so tests pin both.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Archetypes, cards, the card generator
//! - `decks`: Deck validation, preview decks, deck building
//! - `storage`: Deck stores and the deck repository

pub mod cards;
pub mod core;
pub mod decks;
pub mod storage;

// Re-export commonly used types
pub use crate::core::{
    CardRng, CardRngState, CurveSlot, Error, GeneratorConfig, RepositoryConfig, Result, StatRng,
    DECK_SIZE, MAX_COST, MIN_COST, PREVIEW_SIZE,
};

pub use crate::cards::{
    Archetype, ArchetypeRegistry, Card, CardCandidate, CardDefect, CardField, CardGenerator, CardId,
};

pub use crate::decks::{generate_preview_deck, Deck, DeckBuilder, DeckCandidate, DeckValidator};

pub use crate::storage::{DeckRepository, DeckStore, FileStore, MemoryStore};
