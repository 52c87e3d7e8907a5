//! Deck validation.
//!
//! Checks run in order and stop at the first failure:
//!
//! 1. The card list exists (`MalformedDeck`)
//! 2. No card slot is null or incomplete (`MissingFields`, every defect listed)
//! 3. Exactly `deck_size` cards (`WrongCardCount`)
//! 4. The declared archetype is registered (`UnknownArchetype`)
//! 5. Every card is relabelled with the deck's archetype
//!
//! Step 5 is the only correction ever applied. The input is never modified.

use log::warn;

use super::deck::{Deck, DeckCandidate};
use crate::cards::{ArchetypeRegistry, CardDefect, CardGenerator};
use crate::core::{Error, Result, DECK_SIZE};

/// Validator bound to a registry and a deck size.
#[derive(Clone, Copy, Debug)]
pub struct DeckValidator<'a> {
    registry: &'a ArchetypeRegistry,
    deck_size: usize,
}

impl<'a> DeckValidator<'a> {
    /// Validator requiring the standard deck size.
    #[must_use]
    pub fn new(registry: &'a ArchetypeRegistry) -> Self {
        Self::with_deck_size(registry, DECK_SIZE)
    }

    /// Validator over a generator's registry, requiring its configured
    /// deck size.
    #[must_use]
    pub fn for_generator(generator: &'a CardGenerator) -> Self {
        Self::with_deck_size(generator.registry(), generator.config().deck_size)
    }

    #[must_use]
    pub fn with_deck_size(registry: &'a ArchetypeRegistry, deck_size: usize) -> Self {
        Self { registry, deck_size }
    }

    /// Validate a candidate, returning a new normalized deck.
    pub fn validate(&self, candidate: &DeckCandidate) -> Result<Deck> {
        let result = self.check(candidate);
        if let Err(err) = &result {
            warn!(
                "rejected deck '{}': {err}",
                candidate.name.as_deref().unwrap_or_default()
            );
        }
        result
    }

    /// Re-check an already typed deck.
    pub fn validate_deck(&self, deck: &Deck) -> Result<Deck> {
        self.validate(&DeckCandidate::from(deck.clone()))
    }

    fn check(&self, candidate: &DeckCandidate) -> Result<Deck> {
        let slots = candidate.cards.as_ref().ok_or(Error::MalformedDeck)?;

        let mut cards = Vec::with_capacity(slots.len());
        let mut defects = Vec::new();
        for (index, slot) in slots.iter().enumerate() {
            match slot {
                None => defects.push(CardDefect::null_card(index)),
                Some(card) => match card.clone().into_card() {
                    Ok(card) => cards.push(card),
                    Err(missing) => defects.push(CardDefect::new(index, missing)),
                },
            }
        }
        if !defects.is_empty() {
            return Err(Error::MissingFields(defects));
        }

        if cards.len() != self.deck_size {
            return Err(Error::WrongCardCount {
                found: cards.len(),
                expected: self.deck_size,
            });
        }

        let archetype = candidate.archetype.clone().unwrap_or_default();
        if !self.registry.contains(&archetype) {
            return Err(Error::UnknownArchetype(archetype));
        }

        for card in &mut cards {
            if card.card_type != archetype {
                card.card_type.clone_from(&archetype);
            }
        }

        Ok(Deck {
            name: candidate.name.clone().unwrap_or_default(),
            archetype,
            cards,
        })
    }
}
