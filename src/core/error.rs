//! Crate-wide error type.
//!
//! Every fallible operation returns [`Result`]. All variants are caller
//! errors except [`Error::StoreUnavailable`], which may succeed on retry.

use thiserror::Error;

use crate::cards::CardDefect;

/// Errors reported by generation, validation and persistence.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Card cost outside the supported range.
    #[error("invalid card cost {cost}: must be within {min}..={max}")]
    InvalidCost { cost: i64, min: u8, max: u8 },

    /// Archetype key not present in the registry.
    #[error("unknown archetype '{0}'")]
    UnknownArchetype(String),

    /// Deck has no card sequence at all.
    #[error("malformed deck: card list is missing")]
    MalformedDeck,

    /// One or more cards are null or lack required fields.
    #[error("{} card(s) missing required fields: {}", .0.len(), describe_defects(.0))]
    MissingFields(Vec<CardDefect>),

    /// Deck does not hold exactly the required number of cards.
    #[error("deck must have exactly {expected} cards (found {found})")]
    WrongCardCount { found: usize, expected: usize },

    /// Backing store could not be read or written.
    #[error("deck store unavailable: {0}")]
    StoreUnavailable(String),

    /// Stored document is not a valid deck list.
    #[error("deck store is corrupt: {0}")]
    CorruptStore(String),

    /// Lookup by key or name failed.
    #[error("'{0}' not found")]
    NotFound(String),

    /// Attempted to save a deck without a name.
    #[error("deck name must not be empty")]
    MissingDeckName,

    /// Builder already holds a full deck.
    #[error("deck is full ({capacity} cards)")]
    DeckFull { capacity: usize },
}

impl Error {
    /// Whether the failed operation may succeed if retried later.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::StoreUnavailable(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::StoreUnavailable(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::CorruptStore(e.to_string())
    }
}

fn describe_defects(defects: &[CardDefect]) -> String {
    defects
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
