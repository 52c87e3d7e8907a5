//! Deck values.
//!
//! `Deck` is the checked form: named, single-archetype, every card complete.
//! `DeckCandidate` is whatever the caller has before validation, possibly
//! missing its card list or holding null/incomplete cards.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardCandidate};

/// A validated deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Unique key among saved decks.
    pub name: String,

    /// Archetype key shared by every card.
    pub archetype: String,

    pub cards: Vec<Card>,
}

impl Deck {
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// An unchecked deck.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckCandidate {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub archetype: Option<String>,

    /// `None` when the card list itself is absent; `Some(None)` entries
    /// are null card slots.
    #[serde(default)]
    pub cards: Option<Vec<Option<CardCandidate>>>,
}

impl DeckCandidate {
    /// Candidate from complete cards.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        archetype: impl Into<String>,
        cards: impl IntoIterator<Item = Card>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            archetype: Some(archetype.into()),
            cards: Some(
                cards
                    .into_iter()
                    .map(|card| Some(CardCandidate::from(card)))
                    .collect(),
            ),
        }
    }
}

impl From<Deck> for DeckCandidate {
    fn from(deck: Deck) -> Self {
        Self::new(deck.name, deck.archetype, deck.cards)
    }
}
