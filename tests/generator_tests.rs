//! Card generator and preview integration tests.

use archetype_ccg::cards::CardGenerator;
use archetype_ccg::core::{CardRng, Error, GeneratorConfig, PREVIEW_SIZE};
use archetype_ccg::decks::generate_preview_deck;
use proptest::prelude::*;

/// Inclusive bounds on attack + health for the default ±20% jitter.
///
/// Each half is floored (up to 1 lost per half) and health may be lifted
/// to 1 (at most 1 gained).
fn budget_envelope(config: &GeneratorConfig, cost: u8) -> (f64, f64) {
    let budget = config.budget(cost);
    let low = budget * (1.0 - config.jitter) - 2.0;
    let high = budget * (1.0 + config.jitter) + 1.0;
    (low.max(1.0), high)
}

// =============================================================================
// Stat Bounds
// =============================================================================

proptest! {
    #[test]
    fn prop_stats_within_budget(
        cost in 1i64..=10,
        taunt in any::<bool>(),
        seed in any::<u64>(),
        archetype in prop::sample::select(vec![
            "orc", "minotaur", "human", "demon", "ninja", "runner", "druid",
        ]),
    ) {
        let generator = CardGenerator::builtin();
        let mut rng = CardRng::new(seed);

        let card = generator.generate("p", archetype, taunt, cost, &mut rng).unwrap();
        let (low, high) = budget_envelope(generator.config(), card.cost);
        let total = f64::from(card.total_stats());

        prop_assert!(card.health >= 1);
        prop_assert!(total >= low, "total {} below {}", total, low);
        prop_assert!(total <= high, "total {} above {}", total, high);
        prop_assert_eq!(i64::from(card.cost), cost);
        prop_assert_eq!(card.has_taunt, taunt);
    }

    #[test]
    fn prop_out_of_range_cost_rejected(cost in prop_oneof![i64::MIN..1i64, 11i64..i64::MAX]) {
        let generator = CardGenerator::builtin();
        let mut rng = CardRng::new(0);

        let is_invalid_cost = matches!(
            generator.generate("p", "orc", false, cost, &mut rng),
            Err(Error::InvalidCost { .. })
        );
        prop_assert!(is_invalid_cost);
    }
}

#[test]
fn test_low_and_high_cost_ranges() {
    let generator = CardGenerator::builtin();
    let mut rng = CardRng::new(99);

    for _ in 0..200 {
        let cheap = generator.generate("c", "human", false, 1, &mut rng).unwrap();
        assert!((2..=4).contains(&cheap.total_stats()), "cost 1 total {}", cheap.total_stats());

        let big = generator.generate("b", "human", false, 10, &mut rng).unwrap();
        assert!(big.total_stats() >= 15, "cost 10 total {}", big.total_stats());
    }
}

// =============================================================================
// Taunt Bias
// =============================================================================

#[test]
fn test_taunt_raises_mean_health() {
    let generator = CardGenerator::builtin();
    let mut rng = CardRng::new(2024);
    let samples: u32 = 500;

    let mean_health = |taunt: bool, rng: &mut CardRng| {
        let total: u32 = (0..samples)
            .map(|i| {
                generator
                    .generate(format!("s{i}"), "orc", taunt, 6, &mut *rng)
                    .unwrap()
                    .health
            })
            .sum();
        f64::from(total) / f64::from(samples)
    };

    let plain = mean_health(false, &mut rng);
    let taunt = mean_health(true, &mut rng);

    assert!(taunt > plain, "taunt mean {taunt} <= plain mean {plain}");
}

#[test]
fn test_taunt_lowers_mean_attack() {
    let generator = CardGenerator::builtin();
    let mut rng = CardRng::new(7);

    let attack_sum = |taunt: bool, rng: &mut CardRng| -> u32 {
        (0..300)
            .map(|_| generator.generate("a", "demon", taunt, 8, &mut *rng).unwrap().attack)
            .sum()
    };

    assert!(attack_sum(true, &mut rng) < attack_sum(false, &mut rng));
}

// =============================================================================
// Bias and Determinism
// =============================================================================

#[test]
fn test_stat_bias_shapes_cards() {
    let generator = CardGenerator::builtin();
    let mut rng = CardRng::new(5);

    let (mut demon_attack, mut druid_attack) = (0u32, 0u32);
    for _ in 0..200 {
        demon_attack += generator.generate("d", "demon", false, 7, &mut rng).unwrap().attack;
        druid_attack += generator.generate("r", "druid", false, 7, &mut rng).unwrap().attack;
    }

    assert!(demon_attack > druid_attack);
}

#[test]
fn test_same_seed_same_card() {
    let generator = CardGenerator::builtin();

    let a = generator.generate("x", "ninja", true, 5, &mut CardRng::new(77)).unwrap();
    let b = generator.generate("x", "ninja", true, 5, &mut CardRng::new(77)).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_rng_checkpoint_reproduces_preview() {
    let generator = CardGenerator::builtin();
    let mut rng = CardRng::new(31);
    let checkpoint = rng.state();

    let first = generate_preview_deck(&generator, "runner", &mut rng).unwrap();
    let mut restored = CardRng::from_state(&checkpoint);
    let replay = generate_preview_deck(&generator, "runner", &mut restored).unwrap();

    assert_eq!(first, replay);
}

// =============================================================================
// Preview Decks
// =============================================================================

#[test]
fn test_preview_size_for_all_archetypes() {
    let generator = CardGenerator::builtin();
    let mut rng = CardRng::from_entropy();

    for (key, archetype) in generator.registry().all() {
        let preview = generate_preview_deck(&generator, key, &mut rng).unwrap();
        assert_eq!(preview.len(), PREVIEW_SIZE);
        assert!(preview.iter().all(|c| c.color == archetype.color));
    }
}

#[test]
fn test_previews_differ_between_calls() {
    let generator = CardGenerator::builtin();
    let mut rng = CardRng::new(12);

    let a = generate_preview_deck(&generator, "minotaur", &mut rng).unwrap();
    let b = generate_preview_deck(&generator, "minotaur", &mut rng).unwrap();

    assert_eq!(a.len(), b.len());
    assert_ne!(a, b);
}

#[test]
fn test_preview_unknown_archetype() {
    let generator = CardGenerator::builtin();
    let mut rng = CardRng::new(12);

    assert_eq!(
        generate_preview_deck(&generator, "elf", &mut rng),
        Err(Error::UnknownArchetype("elf".to_string()))
    );
}
