//! Procedural card generation.
//!
//! A card's stats come from a budget that grows with cost:
//!
//! 1. `budget = budget_per_cost * cost + budget_base`
//! 2. The archetype's `stat_bias` splits it into attack and health halves
//! 3. Taunt moves `taunt_shift` of the attack half into health
//! 4. Each half is jittered independently, then floored
//! 5. Attack is floored at 0, health at `min_health`
//!
//! Generation is randomized on purpose, nothing is cached by input.

use log::debug;

use super::card::{Card, CardId};
use super::registry::ArchetypeRegistry;
use crate::core::{Error, GeneratorConfig, Result, StatRng, MAX_COST, MIN_COST};

const OFFENSIVE_TITLES: [&str; 5] = ["Warrior", "Raider", "Veteran", "Champion", "Warlord"];
const DEFENSIVE_TITLES: [&str; 5] = ["Sentry", "Guardian", "Defender", "Bulwark", "Colossus"];

/// Check that `cost` is within the playable range.
pub fn check_cost(cost: i64) -> Result<u8> {
    u8::try_from(cost)
        .ok()
        .filter(|c| (MIN_COST..=MAX_COST).contains(c))
        .ok_or(Error::InvalidCost {
            cost,
            min: MIN_COST,
            max: MAX_COST,
        })
}

/// Display name for a card: archetype name plus a title for its cost tier.
#[must_use]
pub fn card_name(archetype_name: &str, cost: u8, has_taunt: bool) -> String {
    let tier = usize::from(cost / 2).min(OFFENSIVE_TITLES.len() - 1);
    let title = if has_taunt {
        DEFENSIVE_TITLES[tier]
    } else {
        OFFENSIVE_TITLES[tier]
    };
    format!("{archetype_name} {title}")
}

/// Card generator bound to an archetype registry.
///
/// ## Example
///
/// ```
/// use archetype_ccg::cards::CardGenerator;
/// use archetype_ccg::core::CardRng;
///
/// let generator = CardGenerator::builtin();
/// let mut rng = CardRng::new(1);
///
/// let card = generator.generate("c1", "orc", false, 4, &mut rng).unwrap();
/// assert_eq!(card.card_type, "orc");
/// assert!(card.health >= 1);
/// ```
#[derive(Clone, Debug)]
pub struct CardGenerator {
    registry: ArchetypeRegistry,
    config: GeneratorConfig,
}

impl CardGenerator {
    #[must_use]
    pub fn new(registry: ArchetypeRegistry, config: GeneratorConfig) -> Self {
        Self { registry, config }
    }

    /// Generator over the shipped archetypes with default balance.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(ArchetypeRegistry::builtin(), GeneratorConfig::default())
    }

    #[must_use]
    pub fn registry(&self) -> &ArchetypeRegistry {
        &self.registry
    }

    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate one card.
    ///
    /// Fails with `InvalidCost` outside `1..=10` and `UnknownArchetype`
    /// for unregistered keys. No partial card is ever returned.
    pub fn generate<R: StatRng + ?Sized>(
        &self,
        id: impl Into<CardId>,
        archetype_key: &str,
        has_taunt: bool,
        cost: i64,
        rng: &mut R,
    ) -> Result<Card> {
        let cost = check_cost(cost)?;
        let archetype = self
            .registry
            .find(archetype_key)
            .ok_or_else(|| Error::UnknownArchetype(archetype_key.to_string()))?;

        let budget = self.config.budget(cost);
        let mut attack_share = budget * archetype.attack_share();
        let mut health_share = budget - attack_share;

        if has_taunt {
            let shift = attack_share * self.config.taunt_shift;
            attack_share -= shift;
            health_share += shift;
        }

        let attack = jittered(attack_share, self.config.jitter, rng);
        let health = jittered(health_share, self.config.jitter, rng).max(self.config.min_health);

        let card = Card::from_archetype(
            id.into(),
            archetype,
            card_name(&archetype.name, cost, has_taunt),
            cost,
            attack,
            health,
            has_taunt,
        );
        debug!(
            "generated {} '{}' cost={} atk={} hp={} taunt={}",
            card.id, card.name, card.cost, card.attack, card.health, card.has_taunt
        );
        Ok(card)
    }
}

fn jittered<R: StatRng + ?Sized>(share: f64, spread: f64, rng: &mut R) -> u32 {
    let value = (share * (1.0 + rng.jitter(spread))).floor();
    if value <= 0.0 {
        0
    } else {
        value as u32
    }
}
