//! Manual deck building.
//!
//! Every edit returns a new builder; earlier values stay valid, so a UI can
//! keep them as undo history. Cards are held in a persistent `im::Vector`,
//! making those snapshots O(1) to clone.

use im::Vector;

use super::deck::{Deck, DeckCandidate};
use super::validator::DeckValidator;
use crate::cards::{Card, CardGenerator, CardId};
use crate::core::{Error, GeneratorConfig, Result, StatRng, DECK_SIZE};

/// Immutable in-progress deck.
///
/// ## Example
///
/// ```
/// use archetype_ccg::cards::CardGenerator;
/// use archetype_ccg::core::CardRng;
/// use archetype_ccg::decks::DeckBuilder;
///
/// let generator = CardGenerator::builtin();
/// let mut rng = CardRng::new(3);
///
/// let empty = DeckBuilder::new("Rush", "runner");
/// let one = empty.generate_card(&generator, 2, false, &mut rng).unwrap();
///
/// assert_eq!(empty.len(), 0);
/// assert_eq!(one.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DeckBuilder {
    name: String,
    archetype: String,
    cards: Vector<Card>,
    capacity: usize,
}

impl DeckBuilder {
    #[must_use]
    pub fn new(name: impl Into<String>, archetype: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            archetype: archetype.into(),
            cards: Vector::new(),
            capacity: DECK_SIZE,
        }
    }

    /// Empty deck holding at most `config.deck_size` cards.
    #[must_use]
    pub fn with_config(
        name: impl Into<String>,
        archetype: impl Into<String>,
        config: &GeneratorConfig,
    ) -> Self {
        Self::new(name, archetype).with_capacity(config.deck_size)
    }

    /// Re-open a saved deck for editing.
    ///
    /// Cards are relabelled with the deck's archetype.
    #[must_use]
    pub fn from_deck(deck: &Deck) -> Self {
        Self {
            name: deck.name.clone(),
            archetype: deck.archetype.clone(),
            cards: deck
                .cards
                .iter()
                .map(|card| card.relabelled(&deck.archetype))
                .collect(),
            capacity: DECK_SIZE,
        }
    }

    #[must_use]
    pub fn with_capacity(&self, capacity: usize) -> Self {
        Self {
            capacity,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_archetype(&self, archetype: impl Into<String>) -> Self {
        Self {
            archetype: archetype.into(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn archetype(&self) -> &str {
        &self.archetype
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.capacity
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Append a card.
    pub fn with_card(&self, card: Card) -> Result<Self> {
        if self.is_full() {
            return Err(Error::DeckFull {
                capacity: self.capacity,
            });
        }
        let mut next = self.clone();
        next.cards.push_back(card);
        Ok(next)
    }

    /// Remove the card at `index`. Out-of-range indices leave the deck as is.
    #[must_use]
    pub fn without_card(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index < next.cards.len() {
            next.cards.remove(index);
        }
        next
    }

    /// Generate a card of this deck's archetype and append it.
    pub fn generate_card<R: StatRng + ?Sized>(
        &self,
        generator: &CardGenerator,
        cost: i64,
        has_taunt: bool,
        rng: &mut R,
    ) -> Result<Self> {
        if self.is_full() {
            return Err(Error::DeckFull {
                capacity: self.capacity,
            });
        }
        let id = CardId::new(format!("custom_{:016x}", rng.next_u64()));
        let card = generator.generate(id, &self.archetype, has_taunt, cost, rng)?;
        self.with_card(card)
    }

    /// Unchecked view of the current state.
    #[must_use]
    pub fn candidate(&self) -> DeckCandidate {
        DeckCandidate::new(self.name.clone(), self.archetype.clone(), self.cards.iter().cloned())
    }

    /// Validate into a saveable deck. The name must not be blank.
    pub fn finish(&self, validator: &DeckValidator<'_>) -> Result<Deck> {
        if self.name.trim().is_empty() {
            return Err(Error::MissingDeckName);
        }
        validator.validate(&self.candidate())
    }
}
