//! Deck persistence.
//!
//! - `DeckStore`: whole-document key-value port
//! - `MemoryStore` / `FileStore`: backends
//! - `DeckRepository`: named deck CRUD over a store

pub mod repository;
pub mod store;

pub use repository::{deserialize_decks, serialize_decks, DeckRepository};
pub use store::{DeckStore, FileStore, MemoryStore};
