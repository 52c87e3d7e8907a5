//! Named deck persistence.
//!
//! All decks live in one JSON array under a single collection key. Every
//! mutation reads the whole array, edits it and writes it back, so two
//! writers racing on the same store resolve as last-writer-wins at the
//! granularity of the whole list.

use log::{debug, warn};

use super::store::DeckStore;
use crate::core::{Error, RepositoryConfig, Result};
use crate::decks::{Deck, DeckValidator};

/// Serialize decks into the stored document format.
pub fn serialize_decks(decks: &[Deck]) -> Result<String> {
    Ok(serde_json::to_string(decks)?)
}

/// Parse a stored document.
pub fn deserialize_decks(text: &str) -> Result<Vec<Deck>> {
    Ok(serde_json::from_str(text)?)
}

/// Load/save/delete decks by name against a [`DeckStore`].
///
/// ## Example
///
/// ```
/// use archetype_ccg::storage::{DeckRepository, MemoryStore};
///
/// let repo = DeckRepository::new(MemoryStore::new());
/// assert!(repo.list().unwrap().is_empty());
/// assert!(repo.load("missing").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct DeckRepository<S> {
    store: S,
    config: RepositoryConfig,
}

impl<S: DeckStore> DeckRepository<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_config(store, RepositoryConfig::default())
    }

    #[must_use]
    pub fn with_config(store: S, config: RepositoryConfig) -> Self {
        Self { store, config }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    #[must_use]
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Every saved deck, in stored order.
    pub fn list(&self) -> Result<Vec<Deck>> {
        let key = &self.config.collection_key;
        match self.store.read(key)? {
            None => Ok(Vec::new()),
            Some(text) => deserialize_decks(&text).map_err(|err| {
                warn!("collection '{key}' could not be parsed: {err}");
                err
            }),
        }
    }

    /// Deck with the given name.
    pub fn load(&self, name: &str) -> Result<Deck> {
        self.list()?
            .into_iter()
            .find(|deck| deck.name == name)
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Load a deck and re-check it before play.
    pub fn select(&self, name: &str, validator: &DeckValidator<'_>) -> Result<Deck> {
        let deck = self.load(name)?;
        validator.validate_deck(&deck)
    }

    /// Insert or replace a deck by name.
    ///
    /// A replaced deck moves to the end of the list.
    pub fn save(&mut self, deck: &Deck) -> Result<()> {
        if deck.name.trim().is_empty() {
            return Err(Error::MissingDeckName);
        }

        let mut decks = self.list()?;
        decks.retain(|d| d.name != deck.name);
        decks.push(deck.clone());
        self.write_all(&decks)?;

        debug!("saved deck '{}' ({} decks stored)", deck.name, decks.len());
        Ok(())
    }

    /// Remove a deck by name. Absent names are not an error.
    pub fn delete(&mut self, name: &str) -> Result<()> {
        let mut decks = self.list()?;
        let before = decks.len();
        decks.retain(|d| d.name != name);
        if decks.len() == before {
            return Ok(());
        }

        self.write_all(&decks)?;
        debug!("deleted deck '{name}'");
        Ok(())
    }

    fn write_all(&mut self, decks: &[Deck]) -> Result<()> {
        let text = serialize_decks(decks)?;
        self.store.write(&self.config.collection_key, &text)
    }
}
