//! Preview decks for browsing an archetype.
//!
//! A preview walks the configured cost curve, generating `count` cards per
//! tier, and gives every `taunt_period`-th card taunt. Ids are only unique
//! within one preview. Previews are never cached here; a caller that needs
//! the same preview twice must keep the result.

use log::debug;

use crate::cards::{Card, CardGenerator};
use crate::core::{Error, Result, StatRng};

/// Generate a preview deck for `archetype_key`.
///
/// Returns exactly `generator.config().preview_size()` cards.
pub fn generate_preview_deck<R: StatRng + ?Sized>(
    generator: &CardGenerator,
    archetype_key: &str,
    rng: &mut R,
) -> Result<Vec<Card>> {
    if !generator.registry().contains(archetype_key) {
        return Err(Error::UnknownArchetype(archetype_key.to_string()));
    }

    let config = generator.config();
    let mut cards = Vec::with_capacity(config.preview_size());
    for slot in &config.preview_curve {
        for _ in 0..slot.count {
            let index = cards.len();
            let period = config.taunt_period;
            let has_taunt = period > 0 && index % period == period - 1;
            let id = format!("preview_{archetype_key}_{index}");
            let card = generator.generate(id, archetype_key, has_taunt, i64::from(slot.cost), rng)?;
            cards.push(card);
        }
    }

    debug!("assembled {} card preview for '{archetype_key}'", cards.len());
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::ArchetypeRegistry;
    use crate::core::{CardRng, CurveSlot, GeneratorConfig, PREVIEW_SIZE};

    #[test]
    fn test_preview_size_for_every_archetype() {
        let generator = CardGenerator::builtin();
        let mut rng = CardRng::new(21);

        for (key, _) in generator.registry().all() {
            let deck = generate_preview_deck(&generator, key, &mut rng).unwrap();
            assert_eq!(deck.len(), PREVIEW_SIZE);
            assert!(deck.iter().all(|c| c.card_type == key));
        }
    }

    #[test]
    fn test_preview_follows_curve() {
        let generator = CardGenerator::builtin();
        let mut rng = CardRng::new(2);
        let deck = generate_preview_deck(&generator, "human", &mut rng).unwrap();

        let costs: Vec<u8> = deck.iter().map(|c| c.cost).collect();
        assert_eq!(costs, vec![1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_one_in_three_has_taunt() {
        let generator = CardGenerator::builtin();
        let mut rng = CardRng::new(2);
        let deck = generate_preview_deck(&generator, "druid", &mut rng).unwrap();

        let taunts: Vec<usize> = deck
            .iter()
            .enumerate()
            .filter(|(_, c)| c.has_taunt)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(taunts, vec![2, 5, 8, 11, 14]);
    }

    #[test]
    fn test_ids_unique_within_preview() {
        let generator = CardGenerator::builtin();
        let mut rng = CardRng::new(8);
        let deck = generate_preview_deck(&generator, "orc", &mut rng).unwrap();

        let mut ids: Vec<_> = deck.iter().map(|c| c.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), deck.len());
    }

    #[test]
    fn test_unknown_archetype() {
        let generator = CardGenerator::builtin();
        let mut rng = CardRng::new(8);

        assert_eq!(
            generate_preview_deck(&generator, "dragon", &mut rng),
            Err(Error::UnknownArchetype("dragon".into()))
        );
    }

    #[test]
    fn test_custom_curve_without_taunt() {
        let mut config = GeneratorConfig::default()
            .with_preview_curve(vec![CurveSlot::new(3, 4), CurveSlot::new(7, 2)]);
        config.taunt_period = 0;
        let generator = CardGenerator::new(ArchetypeRegistry::builtin(), config);
        let mut rng = CardRng::new(8);

        let deck = generate_preview_deck(&generator, "ninja", &mut rng).unwrap();
        assert_eq!(deck.len(), 6);
        assert!(deck.iter().all(|c| !c.has_taunt));
    }

    #[test]
    fn test_invalid_curve_cost_propagates() {
        let config = GeneratorConfig::default().with_preview_curve(vec![CurveSlot::new(11, 1)]);
        let generator = CardGenerator::new(ArchetypeRegistry::builtin(), config);
        let mut rng = CardRng::new(8);

        assert!(matches!(
            generate_preview_deck(&generator, "orc", &mut rng),
            Err(Error::InvalidCost { cost: 11, .. })
        ));
    }
}
