//! Tunable parameters.
//!
//! - `GeneratorConfig`: stat budget curve, jitter, taunt shift, deck sizes
//!   and the preview cost curve
//! - `RepositoryConfig`: where decks live in the backing store
//!
//! Defaults reproduce the shipped game balance.

use serde::{Deserialize, Serialize};

/// Lowest playable cost.
pub const MIN_COST: u8 = 1;

/// Highest playable cost.
pub const MAX_COST: u8 = 10;

/// Cards in a playable deck.
pub const DECK_SIZE: usize = 25;

/// Cards in a browsing preview with the default curve.
pub const PREVIEW_SIZE: usize = 15;

/// One step of the preview cost curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveSlot {
    /// Mana cost of the cards in this tier.
    pub cost: u8,
    /// Number of cards generated at this cost.
    pub count: usize,
}

impl CurveSlot {
    #[must_use]
    pub const fn new(cost: u8, count: usize) -> Self {
        Self { cost, count }
    }
}

/// Card generation and deck shape configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Budget gained per point of cost.
    pub budget_per_cost: f64,

    /// Budget every card gets regardless of cost.
    pub budget_base: f64,

    /// Maximum relative jitter applied to each stat half (0.2 = ±20%).
    pub jitter: f64,

    /// Fraction of the attack allocation moved into health for taunt cards.
    pub taunt_shift: f64,

    /// Health floor after rounding.
    pub min_health: u32,

    /// Required number of cards in a playable deck.
    pub deck_size: usize,

    /// Preview cost curve, walked in order.
    pub preview_curve: Vec<CurveSlot>,

    /// Every `taunt_period`-th preview card gets taunt. Zero disables.
    pub taunt_period: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let preview_curve = (MIN_COST..=MAX_COST)
            .map(|cost| CurveSlot::new(cost, if cost <= 5 { 2 } else { 1 }))
            .collect();

        Self {
            budget_per_cost: 2.0,
            budget_base: 1.0,
            jitter: 0.2,
            taunt_shift: 0.3,
            min_health: 1,
            deck_size: DECK_SIZE,
            preview_curve,
            taunt_period: 3,
        }
    }
}

impl GeneratorConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the budget curve `per_cost * cost + base`.
    #[must_use]
    pub fn with_budget(mut self, per_cost: f64, base: f64) -> Self {
        self.budget_per_cost = per_cost;
        self.budget_base = base;
        self
    }

    /// Set the relative jitter.
    #[must_use]
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter.max(0.0);
        self
    }

    /// Set the taunt shift fraction, clamped to `[0, 1]`.
    #[must_use]
    pub fn with_taunt_shift(mut self, shift: f64) -> Self {
        self.taunt_shift = shift.clamp(0.0, 1.0);
        self
    }

    /// Set the required number of cards in a playable deck.
    #[must_use]
    pub fn with_deck_size(mut self, deck_size: usize) -> Self {
        self.deck_size = deck_size;
        self
    }

    /// Set the preview cost curve.
    #[must_use]
    pub fn with_preview_curve(mut self, curve: Vec<CurveSlot>) -> Self {
        self.preview_curve = curve;
        self
    }

    /// Total stat budget for a card of the given cost.
    #[must_use]
    pub fn budget(&self, cost: u8) -> f64 {
        self.budget_per_cost * f64::from(cost) + self.budget_base
    }

    /// Number of cards a preview built with this curve contains.
    #[must_use]
    pub fn preview_size(&self) -> usize {
        self.preview_curve.iter().map(|slot| slot.count).sum()
    }
}

/// Deck repository configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Key of the single record holding every saved deck.
    pub collection_key: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            collection_key: "customDecks".to_string(),
        }
    }
}

impl RepositoryConfig {
    /// Use a different collection key.
    #[must_use]
    pub fn with_collection_key(mut self, key: impl Into<String>) -> Self {
        self.collection_key = key.into();
        self
    }
}
