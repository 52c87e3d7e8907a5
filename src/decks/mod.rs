//! Decks: validation, previews and manual building.
//!
//! ## Key Types
//!
//! - `Deck`: Validated, named, single-archetype deck
//! - `DeckCandidate`: Unchecked deck data
//! - `DeckValidator`: The one rule set every flow uses before a deck is
//!   saved or played
//! - `DeckBuilder`: Persistent in-progress deck
//! - `generate_preview_deck`: Sample deck across the cost curve

pub mod builder;
pub mod deck;
pub mod preview;
pub mod validator;

pub use builder::DeckBuilder;
pub use deck::{Deck, DeckCandidate};
pub use preview::generate_preview_deck;
pub use validator::DeckValidator;
